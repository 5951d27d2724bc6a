//! Manifest content parsing.

use crate::config::FeedLayout;
use crate::remote::join_remote;

/// Turns newline-delimited relative names into absolute paths under the front root.
///
/// Manifest order is kept. Blank lines (including the one a trailing newline
/// leaves behind) and `\r` from CRLF endings never produce entries.
pub fn parse_manifest(layout: &FeedLayout, content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|rel| join_remote(&layout.front_root, rel))
        .collect()
}
