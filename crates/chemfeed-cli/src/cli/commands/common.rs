//! Shared session setup for commands that talk to the server.

use anyhow::{Context, Result};
use chemfeed_core::config::FeedConfig;
use chemfeed_core::remote::FtpTransport;

use crate::cli::SourceArgs;

/// Connects, resolves candidates for `source`, and hands the open session to `f`.
/// The session is closed afterwards whatever `f` returns.
pub fn with_candidates<T>(
    cfg: &FeedConfig,
    source: &SourceArgs,
    f: impl FnOnce(&mut FtpTransport, Vec<String>) -> Result<T>,
) -> Result<T> {
    let mut transport = FtpTransport::connect(&cfg.server)?;
    let date = source.date_or_today();
    let result = source
        .source()
        .resolve(&mut transport, &cfg.layout, date)
        .with_context(|| format!("discover files for {}", date))
        .and_then(|candidates| f(&mut transport, candidates));
    if let Err(e) = transport.quit() {
        tracing::warn!("ftp quit failed: {:#}", e);
    }
    result
}
