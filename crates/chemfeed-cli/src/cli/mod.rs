//! CLI for the chemfeed downloader.

mod commands;

use anyhow::Result;
use chemfeed_core::config::{self, FeedConfig};
use chemfeed_core::manifest::ManifestSource;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_config, run_download, run_list, run_select, run_select_file};

/// Top-level CLI for chemfeed.
#[derive(Debug, Parser)]
#[command(name = "chemfeed")]
#[command(about = "chemfeed: fetch bibliographic and chemical-table files from a dated FTP feed", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/chemfeed/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Which date to inspect and where its candidates come from.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Date to inspect (defaults to today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// List the whole year's back-file directory instead of the day's manifest.
    #[arg(long)]
    pub year: bool,
}

impl SourceArgs {
    pub fn date_or_today(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn source(&self) -> ManifestSource {
        if self.year {
            ManifestSource::Yearly
        } else {
            ManifestSource::Daily
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the candidate files for a date.
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the files that would be downloaded for a date.
    Select {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Run selection over a local list of remote paths (one per line, `-` for stdin).
    SelectFile {
        /// File containing candidate paths.
        path: String,
    },

    /// Discover, select and download the files for a date.
    Download {
        #[command(flatten)]
        source: SourceArgs,

        /// Local directory to download into (created if missing; defaults to the current directory).
        #[arg(long, value_name = "DIR")]
        target: Option<PathBuf>,
    },

    /// Show the config file location and effective settings.
    Config,
}

fn load_config(path: Option<&PathBuf>) -> Result<FeedConfig> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::List { source } => run_list(&cfg, &source)?,
            CliCommand::Select { source } => run_select(&cfg, &source)?,
            CliCommand::SelectFile { path } => run_select_file(&cfg, &path)?,
            CliCommand::Download { source, target } => {
                let target_dir = match target {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                run_download(&cfg, &source, &target_dir)?;
            }
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
