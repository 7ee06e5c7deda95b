//! Provider orchestration with terminal deterministic fallback.
//!
//! The engine walks its provider chain in order, skipping anything not
//! configured, and hands each reply to the validator. The first provider
//! whose reply validates wins. When every provider fails or is skipped,
//! the request is answered by the template synthesizer, so both entry
//! points are infallible.

use std::sync::Arc;

use plotwright_core::{
    AnalysisRequest, AnalysisResult, ExpansionRequest, ExpansionResult, TemplateSynthesizer,
};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::providers::{
    build_http_client, GeminiProvider, OpenAiProvider, ProviderError, StoryProvider,
};
use crate::validator::parse_analysis;

/// Story analysis engine: an ordered provider chain over a deterministic
/// synthesizer.
pub struct StoryEngine {
    providers: Vec<Arc<dyn StoryProvider>>,
    synthesizer: TemplateSynthesizer,
}

impl StoryEngine {
    /// Build the default chain from configuration: Gemini first, then the
    /// chat-completions endpoint. Providers left unconfigured stay in the
    /// chain and are skipped per request.
    pub fn from_config(config: EngineConfig) -> Result<Self, ProviderError> {
        let client = build_http_client(&config.http)?;
        let providers: Vec<Arc<dyn StoryProvider>> = vec![
            Arc::new(GeminiProvider::new(
                config.gemini,
                config.http,
                client.clone(),
            )),
            Arc::new(OpenAiProvider::new(config.openai, config.http, client)),
        ];
        Ok(Self::with_providers(providers))
    }

    /// Build an engine over an explicit provider chain.
    pub fn with_providers(providers: Vec<Arc<dyn StoryProvider>>) -> Self {
        Self {
            providers,
            synthesizer: TemplateSynthesizer::new(),
        }
    }

    /// Analyze a story and produce exactly three narrative directions.
    ///
    /// Never fails: if no provider produces a valid analysis, the template
    /// synthesizer answers from the request text alone.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        for provider in &self.providers {
            if !provider.is_available() {
                debug!(provider = provider.name(), "provider not configured, skipping");
                continue;
            }
            match provider.generate_analysis(request).await {
                Ok(raw) => {
                    if let Some(result) = parse_analysis(&raw) {
                        info!(
                            provider = provider.name(),
                            genre = %result.genre,
                            "analysis served by provider"
                        );
                        return result;
                    }
                    warn!(
                        provider = provider.name(),
                        "provider reply failed validation, falling through"
                    );
                }
                Err(err) => {
                    warn!(
                        provider = provider.name(),
                        error = %err,
                        "provider call failed, falling through"
                    );
                }
            }
        }

        info!("analysis served by template synthesizer");
        self.synthesizer.synthesize(request)
    }

    /// Expand a chosen direction into a short prose preview.
    ///
    /// Never fails: a fixed-form preview is synthesized when no provider
    /// returns usable text.
    pub async fn expand_path(&self, request: &ExpansionRequest) -> ExpansionResult {
        for provider in &self.providers {
            if !provider.is_available() {
                debug!(provider = provider.name(), "provider not configured, skipping");
                continue;
            }
            match provider.expand_path(request).await {
                Ok(raw) => {
                    let preview = raw.trim();
                    if !preview.is_empty() {
                        info!(provider = provider.name(), "expansion served by provider");
                        return ExpansionResult {
                            preview: preview.to_string(),
                        };
                    }
                    warn!(
                        provider = provider.name(),
                        "provider returned a blank preview, falling through"
                    );
                }
                Err(err) => {
                    warn!(
                        provider = provider.name(),
                        error = %err,
                        "provider call failed, falling through"
                    );
                }
            }
        }

        info!("expansion served by template fallback");
        self.synthesizer.fallback_preview(request)
    }
}
