//! Remote side of the feed: path modeling and the transport seam.
//!
//! Discovery and fetching only depend on the [`Transport`] trait; the FTP
//! implementation lives in [`ftp`] and is chosen by the caller.

pub mod ftp;
mod path;
mod transport;

pub use ftp::FtpTransport;
pub use path::{join_remote, split_remote_path};
pub use transport::{Transport, TransportError};
