//! Download selection: classify, deduplicate and pair candidate paths.
//!
//! Classification is pure string matching over paths so the whole selection
//! runs without a transport. Files that are neither bibliography nor
//! chemical tables are excluded from downloads without error.

mod classify;
mod list;
mod selector;

pub use classify::FileCategory;
pub use list::DownloadList;
pub use selector::{select_downloads, Selector};
