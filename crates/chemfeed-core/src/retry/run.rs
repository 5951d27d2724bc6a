//! Retry loop: run a closure until success or policy says stop.

use super::classify::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::remote::TransportError;

/// Runs `f` until it succeeds or the retry policy says to stop.
///
/// `f` receives the 1-based attempt number. On success returns the value and
/// the number of attempts used; on retryable failure sleeps for the backoff
/// duration then tries again.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut f: F) -> Result<(T, u32), TransportError>
where
    F: FnMut(u32) -> Result<T, TransportError>,
{
    let mut attempt = 1u32;
    loop {
        match f(attempt) {
            Ok(v) => return Ok((v, attempt)),
            Err(e) => match policy.decide(attempt, classify(&e)) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(d) => {
                    tracing::warn!("attempt {} failed: {}; retrying in {:?}", attempt, e, d);
                    std::thread::sleep(d);
                    attempt += 1;
                }
            },
        }
    }
}
