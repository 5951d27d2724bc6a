//! Errors surfaced by discovery and fetching.
//!
//! None of these are caught internally; the caller decides whether to abort
//! or move on to another date.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::remote::TransportError;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The dated (or yearly) remote directory does not exist.
    #[error("remote location unavailable: {path}")]
    LocationUnavailable {
        path: String,
        #[source]
        source: TransportError,
    },

    /// The per-day manifest file is absent from its directory.
    #[error("manifest missing: {path}")]
    ManifestMissing {
        path: String,
        #[source]
        source: TransportError,
    },

    /// A remote path without a directory component or filename.
    #[error("remote path cannot be split into directory and filename: {path:?}")]
    InvalidRemotePath { path: String },

    /// Fetching a selected file failed (after any retries).
    #[error("retrieval failed: {path}")]
    RetrievalFailed {
        path: String,
        #[source]
        source: TransportError,
    },

    /// The configured suffixes do not form a usable supplementary pattern.
    #[error("invalid supplementary file pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Any other transport failure during discovery.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Creating, writing or renaming a local file failed.
    #[error("local file error: {}", .path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FeedError {
    pub(crate) fn local_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FeedError::LocalIo {
            path: path.into(),
            source,
        }
    }
}
