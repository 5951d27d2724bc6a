//! Retry and backoff policy for per-file retrieval.
//!
//! Transport errors are classified into kinds (timeouts, throttling,
//! connection failures) and an exponential backoff policy decides whether
//! and when to try again. Discovery does not retry; only the fetcher does.

mod classify;
mod policy;
mod run;

pub use classify::classify;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
