//! `chemfeed list` – print candidate files.

use anyhow::Result;
use chemfeed_core::config::FeedConfig;

use super::common::with_candidates;
use crate::cli::SourceArgs;

pub fn run_list(cfg: &FeedConfig, source: &SourceArgs) -> Result<()> {
    with_candidates(cfg, source, |_, candidates| {
        for path in &candidates {
            println!("{}", path);
        }
        Ok(())
    })
}
