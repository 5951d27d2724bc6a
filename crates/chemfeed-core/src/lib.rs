pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod remote;
pub mod retry;
pub mod select;

pub use error::FeedError;
