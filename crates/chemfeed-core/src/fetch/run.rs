//! Sequential retrieval of a download list.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::part::{discard, finalize, part_path_for};
use super::report::{FetchReport, FetchedFile};
use crate::checksum;
use crate::error::FeedError;
use crate::remote::{split_remote_path, Transport, TransportError};
use crate::retry::{run_with_retry, RetryPolicy};

/// Fetches every path into `target_dir`, flat (only the filename is kept).
///
/// `target_dir` is created with its parents if missing. Stops at the first
/// file that cannot be retrieved within `policy`; files finished before that
/// stay in place.
pub fn fetch_downloads<I, S>(
    transport: &mut dyn Transport,
    paths: I,
    target_dir: &Path,
    policy: &RetryPolicy,
) -> Result<FetchReport, FeedError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tracing::info!("creating target directory for download: [{}]", target_dir.display());
    fs::create_dir_all(target_dir).map_err(|e| FeedError::local_io(target_dir, e))?;

    let mut report = FetchReport::default();
    for path in paths {
        let fetched = fetch_one(transport, path.as_ref(), target_dir, policy)?;
        report.files.push(fetched);
    }

    tracing::info!(
        "fetched {} files ({} bytes, {} retried) into {}",
        report.files.len(),
        report.total_bytes(),
        report.retried(),
        target_dir.display()
    );
    Ok(report)
}

fn fetch_one(
    transport: &mut dyn Transport,
    remote_path: &str,
    target_dir: &Path,
    policy: &RetryPolicy,
) -> Result<FetchedFile, FeedError> {
    let (dir, filename) =
        split_remote_path(remote_path).ok_or_else(|| FeedError::InvalidRemotePath {
            path: remote_path.to_string(),
        })?;
    let final_path = target_dir.join(filename);
    let part_path = part_path_for(&final_path);

    tracing::info!("changing to remote directory [{}]", dir);
    tracing::info!("downloading [{}]", filename);

    let outcome = run_with_retry(policy, |attempt| {
        if attempt > 1 {
            tracing::debug!("attempt {} for {}", attempt, remote_path);
            transport.reset()?;
        }
        transport.change_dir(dir)?;
        // A fresh (truncated) file per attempt; dropped on every exit path.
        let file = File::create(&part_path).map_err(TransportError::Io)?;
        let mut out = BufWriter::new(file);
        let bytes = transport.retrieve(filename, &mut out)?;
        out.flush().map_err(TransportError::Io)?;
        Ok(bytes)
    });

    let (bytes, attempts) = match outcome {
        Ok(v) => v,
        Err(e) => {
            discard(&part_path);
            return Err(match e {
                TransportError::Io(source) => FeedError::local_io(&part_path, source),
                other => FeedError::RetrievalFailed {
                    path: remote_path.to_string(),
                    source: other,
                },
            });
        }
    };

    finalize(&part_path, &final_path).map_err(|e| FeedError::local_io(&final_path, e))?;
    let sha256 =
        checksum::sha256_path(&final_path).map_err(|e| FeedError::local_io(&final_path, e))?;
    tracing::debug!("{} -> {} ({} bytes, sha256 {})", remote_path, final_path.display(), bytes, sha256);

    Ok(FetchedFile {
        remote_path: remote_path.to_string(),
        local_path: final_path,
        bytes,
        sha256,
        attempts,
    })
}
