//! Generative provider abstractions.
//!
//! Two adapters implement [`StoryProvider`]: the Gemini-style
//! "contents/parts" backend and the chat-completions backend. Both speak a
//! different wire format but honor the same contract: build a prompt, make
//! one bounded HTTP attempt (retried only on rate limiting), and extract the
//! raw text payload from the provider's response envelope. Everything that
//! can go wrong surfaces as a [`ProviderError`] which the orchestrator turns
//! into a fallthrough, never into a caller-visible failure.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use plotwright_core::{AnalysisRequest, ExpansionRequest};

use crate::config::HttpConfig;

mod gemini;
mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// How much of an error body to keep in diagnostics.
const ERROR_BODY_PREVIEW: usize = 300;

/// Errors from provider adapters.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    #[error("rate limit exceeded, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("timeout after {0:?}")]
    Timeout(Duration),

    #[error("response parse error: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Only rate limiting is retryable; everything else aborts the adapter.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// A generative backend capable of story analysis and path expansion.
///
/// Implementations must be cheap to call when unconfigured: `is_available`
/// is checked before any attempt and an unavailable provider consumes no
/// retry budget.
#[async_trait]
pub trait StoryProvider: Send + Sync {
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;

    /// Whether the required configuration is present.
    fn is_available(&self) -> bool;

    /// Ask the provider to analyze a story. Returns the raw response text,
    /// which the validator parses separately.
    async fn generate_analysis(&self, request: &AnalysisRequest)
        -> Result<String, ProviderError>;

    /// Ask the provider to expand a chosen path into a short preview.
    async fn expand_path(&self, request: &ExpansionRequest) -> Result<String, ProviderError>;
}

/// Shared HTTP client with the connection timeout applied. Per-request
/// timeouts are set on each attempt.
pub(crate) fn build_http_client(http: &HttpConfig) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .connect_timeout(http.connect_timeout)
        .build()
        .map_err(|e| ProviderError::Http(e.to_string()))
}

pub(crate) fn map_transport_error(err: reqwest::Error, timeout: Duration) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(timeout)
    } else {
        ProviderError::Http(err.to_string())
    }
}

/// Parse a `Retry-After` seconds hint, if the provider sent one.
pub(crate) fn retry_after_hint(response: &reqwest::Response) -> Option<Duration> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Truncate an error body for logging.
pub(crate) fn preview(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW).collect()
}
