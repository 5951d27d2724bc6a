//! `chemfeed select` and `chemfeed select-file` – print the download list.

use anyhow::{Context, Result};
use chemfeed_core::config::FeedConfig;
use chemfeed_core::select::{DownloadList, Selector};
use std::io::{self, Read};

use super::common::with_candidates;
use crate::cli::SourceArgs;

pub fn run_select(cfg: &FeedConfig, source: &SourceArgs) -> Result<()> {
    let selector = Selector::new(&cfg.layout)?;
    let list = with_candidates(cfg, source, |_, candidates| Ok(selector.select(&candidates)))?;
    print_list(&list);
    Ok(())
}

pub fn run_select_file(cfg: &FeedConfig, path: &str) -> Result<()> {
    let content = read_input(path)?;
    let selector = Selector::new(&cfg.layout)?;
    let list = selector.select(content.lines().map(str::trim).filter(|l| !l.is_empty()));
    print_list(&list);
    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read candidates from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("read candidates from {}", path))
}

fn print_list(list: &DownloadList) {
    for path in list {
        println!("{}", path);
    }
}
