//! Fetcher: retrieve selected remote files into a flat local directory.
//!
//! Files are fetched one at a time in list order. Each file is written to a
//! `.part` sibling and renamed into place once complete, so an aborted run
//! leaves only whole files under their final names. Transient transport
//! failures are retried per file; the first unrecoverable failure aborts the
//! rest of the batch.

mod part;
mod report;
mod run;

pub use part::{part_path_for, PART_SUFFIX};
pub use report::{FetchReport, FetchedFile};
pub use run::fetch_downloads;
