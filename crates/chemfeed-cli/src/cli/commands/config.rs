//! `chemfeed config` – show where settings come from and what they are.

use anyhow::Result;
use chemfeed_core::config::{self, FeedConfig};
use std::path::Path;

pub fn run_config(cfg: &FeedConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
