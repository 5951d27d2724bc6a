//! Narrow contract the core needs from a file-transfer session.

use std::io::{self, Write};
use thiserror::Error;

/// Failure reported by a [`Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// The remote directory does not exist (or cannot be entered).
    #[error("remote directory unavailable: {path}")]
    DirectoryUnavailable { path: String },
    /// The named file does not exist in the current directory.
    #[error("remote file unavailable: {name}")]
    FileUnavailable { name: String },
    /// Control or data connection failed.
    #[error("connection error: {0}")]
    Connection(#[source] io::Error),
    #[error("operation timed out")]
    Timeout,
    /// The server answered with an unexpected reply.
    #[error("server replied {code}: {message}")]
    Rejected {
        code: u32,
        message: String,
        /// True for temporary (4xx) replies worth retrying.
        transient: bool,
    },
    /// Writing retrieved bytes into the local sink failed.
    #[error("local write failed: {0}")]
    Io(#[source] io::Error),
}

/// Minimal session operations used by discovery and fetching.
///
/// Implementations keep a current working directory: `list_dir` and
/// `retrieve` act on whatever `change_dir` last selected.
pub trait Transport {
    fn change_dir(&mut self, path: &str) -> Result<(), TransportError>;

    /// Names of the entries in the current directory.
    fn list_dir(&mut self) -> Result<Vec<String>, TransportError>;

    /// Streams `filename` from the current directory into `sink`; returns bytes copied.
    fn retrieve(&mut self, filename: &str, sink: &mut dyn Write) -> Result<u64, TransportError>;

    /// Re-establishes the session before a retry. A failed transfer may leave
    /// a connection with unread replies; callers must `change_dir` again after.
    fn reset(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}
