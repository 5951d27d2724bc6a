//! Manifest resolution: date -> remote directory -> candidate file paths.
//!
//! Two sources are supported. The daily front file publishes a manifest
//! (`newfiles.txt`) listing what was added that day; the yearly back file is
//! simply listed in full.

mod layout;
mod parse;
mod resolve;

pub use layout::{daily_manifest_dir, year_dir};
pub use parse::parse_manifest;
pub use resolve::{resolve_daily_manifest, resolve_year_manifest, ManifestSource};
