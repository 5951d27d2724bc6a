//! Candidate discovery against a live transport.

use chrono::{Datelike, NaiveDate};

use super::layout::{daily_manifest_dir, year_dir};
use super::parse::parse_manifest;
use crate::config::FeedLayout;
use crate::error::FeedError;
use crate::remote::{join_remote, Transport, TransportError};

/// Where candidates for a date come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestSource {
    /// The per-day manifest in the front-file tree.
    #[default]
    Daily,
    /// Everything in the year's back-file directory.
    Yearly,
}

impl ManifestSource {
    pub fn resolve(
        self,
        transport: &mut dyn Transport,
        layout: &FeedLayout,
        date: NaiveDate,
    ) -> Result<Vec<String>, FeedError> {
        match self {
            ManifestSource::Daily => resolve_daily_manifest(transport, layout, date),
            ManifestSource::Yearly => resolve_year_manifest(transport, layout, date),
        }
    }
}

/// Reads the day's manifest and returns absolute paths, in manifest order.
pub fn resolve_daily_manifest(
    transport: &mut dyn Transport,
    layout: &FeedLayout,
    date: NaiveDate,
) -> Result<Vec<String>, FeedError> {
    tracing::info!("identifying new files for {}", date);

    let dir = daily_manifest_dir(layout, date);
    enter_dir(transport, &dir)?;

    let mut raw = Vec::new();
    transport
        .retrieve(&layout.manifest_name, &mut raw)
        .map_err(|e| match e {
            TransportError::FileUnavailable { .. } => FeedError::ManifestMissing {
                path: join_remote(&dir, &layout.manifest_name),
                source: e,
            },
            other => FeedError::Transport(other),
        })?;

    let content = String::from_utf8_lossy(&raw);
    let files = parse_manifest(layout, &content);
    tracing::info!("discovered {} new files in {}", files.len(), dir);
    Ok(files)
}

/// Lists the year's back-file directory and returns absolute paths, unfiltered and unsorted.
pub fn resolve_year_manifest(
    transport: &mut dyn Transport,
    layout: &FeedLayout,
    date: NaiveDate,
) -> Result<Vec<String>, FeedError> {
    tracing::info!("identifying files for year {}", date.year());

    let dir = year_dir(layout, date);
    enter_dir(transport, &dir)?;

    let files: Vec<String> = transport
        .list_dir()?
        .iter()
        .map(|name| join_remote(&dir, name))
        .collect();
    tracing::info!("discovered {} files in {}", files.len(), dir);
    Ok(files)
}

fn enter_dir(transport: &mut dyn Transport, dir: &str) -> Result<(), FeedError> {
    transport.change_dir(dir).map_err(|e| match e {
        TransportError::DirectoryUnavailable { .. } => FeedError::LocationUnavailable {
            path: dir.to_string(),
            source: e,
        },
        other => FeedError::Transport(other),
    })
}
