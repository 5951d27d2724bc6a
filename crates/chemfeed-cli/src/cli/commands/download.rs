//! `chemfeed download` – discover, select and fetch.

use anyhow::{Context, Result};
use chemfeed_core::config::FeedConfig;
use chemfeed_core::fetch::fetch_downloads;
use chemfeed_core::select::Selector;
use std::path::Path;

use super::common::with_candidates;
use crate::cli::SourceArgs;

pub fn run_download(cfg: &FeedConfig, source: &SourceArgs, target_dir: &Path) -> Result<()> {
    let selector = Selector::new(&cfg.layout)?;
    let policy = cfg.retry_policy();

    let report = with_candidates(cfg, source, |transport, candidates| {
        let list = selector.select(&candidates);
        fetch_downloads(transport, &list, target_dir, &policy)
            .with_context(|| format!("download into {}", target_dir.display()))
    })?;

    for file in &report.files {
        println!("{}  {}", file.sha256, file.local_path.display());
    }
    println!(
        "fetched {} files ({} bytes) into {}",
        report.files.len(),
        report.total_bytes(),
        target_dir.display()
    );
    Ok(())
}
