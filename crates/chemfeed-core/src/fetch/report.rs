//! Outcome of a fetch run.

use std::path::PathBuf;

/// One file retrieved and finalized on local disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    pub remote_path: String,
    pub local_path: PathBuf,
    pub bytes: u64,
    /// Lowercase hex SHA-256 of the local file.
    pub sha256: String,
    /// Attempts used, including the successful one.
    pub attempts: u32,
}

/// Files fetched by one call, in download order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub files: Vec<FetchedFile>,
}

impl FetchReport {
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }

    /// Number of files that needed more than one attempt.
    pub fn retried(&self) -> usize {
        self.files.iter().filter(|f| f.attempts > 1).count()
    }
}
