//! Linear backoff for rate-limited provider calls.
//!
//! A provider call is attempted at most [`MAX_ATTEMPTS`] times. Only rate
//! limiting triggers a retry; any other failure aborts immediately so the
//! orchestrator can move on to the next provider. The wait grows linearly
//! with the attempt number (2s, then 4s), with no jitter.

use std::future::Future;
use std::time::Duration;

use backon::{BackoffBuilder, Retryable};
use tracing::warn;

use crate::providers::ProviderError;

/// Total attempts per provider call, including the first.
pub const MAX_ATTEMPTS: usize = 3;

/// Base wait; attempt `n` waits `n * BACKOFF_STEP` before retrying.
pub const BACKOFF_STEP: Duration = Duration::from_secs(2);

/// Linear backoff builder: yields `step`, `2 * step`, ... up to `max_retries`
/// delays.
#[derive(Debug, Clone, Copy)]
pub struct LinearBuilder {
    step: Duration,
    max_retries: usize,
}

impl LinearBuilder {
    pub fn new(step: Duration, max_retries: usize) -> Self {
        Self { step, max_retries }
    }
}

impl Default for LinearBuilder {
    fn default() -> Self {
        Self::new(BACKOFF_STEP, MAX_ATTEMPTS - 1)
    }
}

impl BackoffBuilder for LinearBuilder {
    type Backoff = LinearBackoff;

    fn build(self) -> Self::Backoff {
        LinearBackoff {
            step: self.step,
            max_retries: self.max_retries,
            retries: 0,
        }
    }
}

#[derive(Debug)]
pub struct LinearBackoff {
    step: Duration,
    max_retries: usize,
    retries: usize,
}

impl Iterator for LinearBackoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.retries >= self.max_retries {
            return None;
        }
        self.retries += 1;
        Some(self.step * self.retries as u32)
    }
}

/// Run `op`, retrying on rate limiting with linear backoff. Each wait is
/// logged with the provider name so stalls are visible in the logs.
pub async fn retry_on_rate_limit<F, Fut, T>(provider: &str, op: F) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    op.retry(LinearBuilder::default())
        .when(ProviderError::is_rate_limited)
        .notify(|err: &ProviderError, delay: Duration| {
            warn!(
                provider,
                delay_secs = delay.as_secs(),
                error = %err,
                "provider rate limited, backing off"
            );
        })
        .await
}
