//! Runtime configuration for the provider pipeline.
//!
//! Configuration is read from the environment exactly once at process start
//! and is immutable afterwards. A provider with no usable configuration is
//! simply unconfigured; that is a normal state, not an error, and the
//! orchestrator will skip it.
//!
//! ## Security
//!
//! API keys are wrapped in [`secrecy::SecretString`] the moment they are
//! read. They cannot appear in `Debug` output and are exposed only at the
//! HTTP call site.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the Gemini model.
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";
/// Environment variable overriding the Gemini base URL.
pub const GEMINI_BASE_URL_ENV: &str = "GEMINI_BASE_URL";

/// Environment variable holding the chat-completions API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable holding the chat-completions endpoint URL.
pub const OPENAI_API_URL_ENV: &str = "OPENAI_API_URL";
/// Environment variable overriding the chat-completions model.
pub const OPENAI_MODEL_ENV: &str = "OPENAI_MODEL";

/// Environment variable overriding the per-attempt request timeout.
pub const REQUEST_TIMEOUT_ENV: &str = "PLOTWRIGHT_REQUEST_TIMEOUT";
/// Environment variable overriding the connection-establishment timeout.
pub const CONNECT_TIMEOUT_ENV: &str = "PLOTWRIGHT_CONNECT_TIMEOUT";

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid duration in {var}: {source}")]
    InvalidDuration {
        var: &'static str,
        #[source]
        source: humantime::DurationError,
    },
}

/// HTTP timeouts shared by all providers.
#[derive(Debug, Clone, Copy)]
pub struct HttpConfig {
    /// Bound on one full request attempt.
    pub request_timeout: Duration,
    /// Bound on connection establishment, applied independently.
    pub connect_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

/// Configuration for the Gemini-style provider (Provider A).
#[derive(Debug)]
pub struct GeminiConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl GeminiConfig {
    /// Configured iff an API key is present.
    pub fn is_configured(&self) -> bool {
        has_value(&self.api_key)
    }
}

/// Configuration for the chat-completions provider (Provider B).
///
/// Works with any endpoint implementing the `/v1/chat/completions` shape:
/// OpenAI, Groq, Together, OpenRouter, or a local Ollama.
#[derive(Debug, Default)]
pub struct OpenAiConfig {
    pub api_key: Option<SecretString>,
    pub endpoint: Option<String>,
    pub model: String,
}

impl OpenAiConfig {
    /// Configured iff an endpoint is present and either a key is set or the
    /// endpoint is local (Ollama needs no key).
    pub fn is_configured(&self) -> bool {
        let Some(endpoint) = self.endpoint.as_deref() else {
            return false;
        };
        if endpoint.trim().is_empty() {
            return false;
        }
        has_value(&self.api_key) || endpoint.contains("localhost")
    }
}

fn has_value(key: &Option<SecretString>) -> bool {
    key.as_ref()
        .map(|k| !k.expose_secret().trim().is_empty())
        .unwrap_or(false)
}

/// Immutable engine configuration, loaded once at startup.
#[derive(Debug, Default)]
pub struct EngineConfig {
    pub gemini: GeminiConfig,
    pub openai: OpenAiConfig,
    pub http: HttpConfig,
}

impl EngineConfig {
    /// Load configuration from the environment.
    ///
    /// Missing provider variables leave that provider unconfigured; only a
    /// malformed timeout value is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut openai = OpenAiConfig {
            api_key: non_blank_env(OPENAI_API_KEY_ENV).map(SecretString::from),
            endpoint: non_blank_env(OPENAI_API_URL_ENV),
            model: DEFAULT_CHAT_MODEL.to_string(),
        };
        if let Some(model) = non_blank_env(OPENAI_MODEL_ENV) {
            openai.model = model;
        }

        let mut gemini = GeminiConfig {
            api_key: non_blank_env(GEMINI_API_KEY_ENV).map(SecretString::from),
            ..GeminiConfig::default()
        };
        if let Some(model) = non_blank_env(GEMINI_MODEL_ENV) {
            gemini.model = model;
        }
        if let Some(base_url) = non_blank_env(GEMINI_BASE_URL_ENV) {
            gemini.base_url = base_url;
        }

        let http = HttpConfig {
            request_timeout: duration_env(REQUEST_TIMEOUT_ENV, DEFAULT_REQUEST_TIMEOUT)?,
            connect_timeout: duration_env(CONNECT_TIMEOUT_ENV, DEFAULT_CONNECT_TIMEOUT)?,
        };

        Ok(Self {
            gemini,
            openai,
            http,
        })
    }
}

fn non_blank_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn duration_env(var: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match non_blank_env(var) {
        Some(value) => humantime::parse_duration(&value)
            .map_err(|source| ConfigError::InvalidDuration { var, source }),
        None => Ok(default),
    }
}
