//! Classify transport errors into retry policy error kinds.

use super::policy::ErrorKind;
use crate::remote::TransportError;

pub fn classify(e: &TransportError) -> ErrorKind {
    match e {
        TransportError::Timeout => ErrorKind::Timeout,
        TransportError::Connection(_) => ErrorKind::Connection,
        TransportError::Rejected {
            transient: true, ..
        } => ErrorKind::Throttled,
        TransportError::Rejected { .. }
        | TransportError::DirectoryUnavailable { .. }
        | TransportError::FileUnavailable { .. }
        | TransportError::Io(_) => ErrorKind::Other,
    }
}
