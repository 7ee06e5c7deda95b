//! Retry policy for transient provider failures.

mod retry;

pub use retry::{retry_on_rate_limit, LinearBuilder, BACKOFF_STEP, MAX_ATTEMPTS};
