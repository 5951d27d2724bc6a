//! CLI command handlers, one per file.

mod common;
mod config;
mod download;
mod list;
mod select;

pub use config::run_config;
pub use download::run_download;
pub use list::run_list;
pub use select::{run_select, run_select_file};
