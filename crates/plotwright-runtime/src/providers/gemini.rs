//! Gemini-style provider (Provider A).
//!
//! Request envelope is the "contents/parts" structure; response text lives
//! at `candidates[0].content.parts[0].text`. The API key travels as a query
//! parameter and is exposed only at URL construction.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use plotwright_core::{AnalysisRequest, ExpansionRequest};

use super::{
    map_transport_error, preview, retry_after_hint, ProviderError, StoryProvider,
};
use crate::config::{GeminiConfig, HttpConfig};
use crate::prompts;
use crate::resilience::retry_on_rate_limit;

const TEMPERATURE: f32 = 0.9;
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Adapter for the Gemini `generateContent` API.
pub struct GeminiProvider {
    config: GeminiConfig,
    http: HttpConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig, http: HttpConfig, client: reqwest::Client) -> Self {
        Self {
            config,
            http,
            client,
        }
    }

    async fn call(&self, prompt: String) -> Result<String, ProviderError> {
        if !self.is_available() {
            return Err(ProviderError::NotConfigured(
                "gemini api key not set".to_string(),
            ));
        }
        retry_on_rate_limit(self.name(), || self.dispatch(&prompt)).await
    }

    /// One HTTP attempt: send the prompt, classify the status, extract text.
    async fn dispatch(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| ProviderError::NotConfigured("gemini api key not set".to_string()))?;

        // The key is exposed here, at the point of use, and nowhere else.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            api_key.expose_secret()
        );

        let body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .timeout(self.http.request_timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.http.request_timeout))?;

        let status = response.status();
        tracing::debug!(provider = self.name(), status = status.as_u16(), "response received");

        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimited {
                retry_after: retry_after_hint(&response),
            });
        }

        if !status.is_success() {
            let message = preview(&response.text().await.unwrap_or_default());
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        extract_text(envelope)
    }
}

#[async_trait]
impl StoryProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn is_available(&self) -> bool {
        self.config.is_configured()
    }

    async fn generate_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> Result<String, ProviderError> {
        self.call(prompts::analysis_prompt(request)).await
    }

    async fn expand_path(&self, request: &ExpansionRequest) -> Result<String, ProviderError> {
        self.call(prompts::expansion_prompt(request)).await
    }
}

/// Request envelope.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

/// Response envelope. Every level is optional so a degenerate body becomes
/// an extraction failure instead of a deserialization error.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

fn extract_text(envelope: GeminiResponse) -> Result<String, ProviderError> {
    envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| ProviderError::Parse("no candidate text in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn configured() -> GeminiProvider {
        let config = GeminiConfig {
            api_key: Some(SecretString::from("test-key".to_string())),
            ..GeminiConfig::default()
        };
        GeminiProvider::new(config, HttpConfig::default(), reqwest::Client::new())
    }

    #[test]
    fn availability_tracks_the_key() {
        assert!(configured().is_available());

        let unconfigured = GeminiProvider::new(
            GeminiConfig::default(),
            HttpConfig::default(),
            reqwest::Client::new(),
        );
        assert!(!unconfigured.is_available());
    }

    #[tokio::test]
    async fn unconfigured_provider_refuses_without_network() {
        let provider = GeminiProvider::new(
            GeminiConfig::default(),
            HttpConfig::default(),
            reqwest::Client::new(),
        );
        let err = provider
            .generate_analysis(&AnalysisRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[test]
    fn request_envelope_matches_wire_format() {
        let body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
        assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn extracts_text_from_first_candidate() {
        let envelope: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"the payload"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(envelope).unwrap(), "the payload");
    }

    #[test]
    fn empty_candidate_list_is_a_parse_error() {
        let envelope: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            extract_text(envelope),
            Err(ProviderError::Parse(_))
        ));

        let no_field: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            extract_text(no_field),
            Err(ProviderError::Parse(_))
        ));
    }
}
