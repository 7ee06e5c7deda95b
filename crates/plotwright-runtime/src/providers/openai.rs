//! Chat-completions provider (Provider B).
//!
//! Works against any endpoint implementing the OpenAI `/v1/chat/completions`
//! shape: OpenAI, Groq, Together, OpenRouter, or a local Ollama (which needs
//! no API key). Response text lives at `choices[0].message.content`.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use plotwright_core::{AnalysisRequest, ExpansionRequest};

use super::{
    map_transport_error, preview, retry_after_hint, ProviderError, StoryProvider,
};
use crate::config::{HttpConfig, OpenAiConfig};
use crate::prompts;
use crate::resilience::retry_on_rate_limit;

const TEMPERATURE: f32 = 0.9;
const MAX_TOKENS: u32 = 1024;

/// Adapter for OpenAI-compatible chat-completion endpoints.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    http: HttpConfig,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig, http: HttpConfig, client: reqwest::Client) -> Self {
        Self {
            config,
            http,
            client,
        }
    }

    async fn call(&self, prompt: String) -> Result<String, ProviderError> {
        if !self.is_available() {
            return Err(ProviderError::NotConfigured(
                "chat endpoint not set".to_string(),
            ));
        }
        retry_on_rate_limit(self.name(), || self.dispatch(&prompt)).await
    }

    async fn dispatch(&self, prompt: &str) -> Result<String, ProviderError> {
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .ok_or_else(|| ProviderError::NotConfigured("chat endpoint not set".to_string()))?;

        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let mut request = self
            .client
            .post(endpoint)
            .header("content-type", "application/json")
            .timeout(self.http.request_timeout)
            .json(&body);

        // Ollama on localhost runs without a key.
        if let Some(api_key) = &self.config.api_key {
            request = request.header(
                "authorization",
                format!("Bearer {}", api_key.expose_secret()),
            );
        }

        let response = request
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

        let envelope: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        extract_text(envelope)
    }
}

#[async_trait]
impl StoryProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn is_available(&self) -> bool {
        self.config.is_configured()
    }

    async fn generate_analysis(
        &self,
        request: &AnalysisRequest,
    ) -> Result<String, ProviderError> {
        self.call(prompts::chat_analysis_prompt(request)).await
    }

    async fn expand_path(&self, request: &ExpansionRequest) -> Result<String, ProviderError> {
        self.call(prompts::chat_expansion_prompt(request)).await
    }
}

/// Request envelope in the chat-completions format.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Response envelope: `{ "choices": [{ "message": { "content": "..." } }] }`.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn extract_text(envelope: ChatResponse) -> Result<String, ProviderError> {
    envelope
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .ok_or_else(|| ProviderError::Parse("no choice content in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn availability_requires_endpoint_and_key_or_localhost() {
        let remote_with_key = OpenAiProvider::new(
            OpenAiConfig {
                api_key: Some(SecretString::from("key".to_string())),
                endpoint: Some("https://api.groq.com/openai/v1/chat/completions".to_string()),
                model: "m".to_string(),
            },
            HttpConfig::default(),
            reqwest::Client::new(),
        );
        assert!(remote_with_key.is_available());

        let local_without_key = OpenAiProvider::new(
            OpenAiConfig {
                api_key: None,
                endpoint: Some("http://localhost:11434/v1/chat/completions".to_string()),
                model: "m".to_string(),
            },
            HttpConfig::default(),
            reqwest::Client::new(),
        );
        assert!(local_without_key.is_available());
    }

    #[tokio::test]
    async fn unconfigured_provider_refuses_without_network() {
        let provider = OpenAiProvider::new(
            OpenAiConfig::default(),
            HttpConfig::default(),
            reqwest::Client::new(),
        );
        let err = provider
            .expand_path(&ExpansionRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }

    #[test]
    fn request_envelope_matches_wire_format() {
        let body = ChatRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hello".to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
        assert_eq!(json["max_tokens"], 1024);
    }

    #[test]
    fn extracts_text_from_first_choice() {
        let envelope: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"the payload"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(envelope).unwrap(), "the payload");
    }

    #[test]
    fn empty_choice_list_is_a_parse_error() {
        let envelope: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_text(envelope),
            Err(ProviderError::Parse(_))
        ));
    }
}
