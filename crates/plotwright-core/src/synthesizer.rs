//! Template synthesizer: the guaranteed terminal fallback.
//!
//! When no generative provider is usable, analysis still has to produce a
//! complete result. The synthesizer combines the keyword classifier, the
//! entity extractor, and the per-genre templates into an `AnalysisResult`
//! that always satisfies the exactly-three-directions contract. It is
//! infallible and fully deterministic: same input, same output.

use crate::classifier;
use crate::entities;
use crate::templates::{self, DEFAULT_ENTITY};
use crate::types::{AnalysisRequest, AnalysisResult, ExpansionRequest, ExpansionResult, Source};

/// Deterministic, keyword-driven analysis fallback.
#[derive(Debug, Default)]
pub struct TemplateSynthesizer;

impl TemplateSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Synthesize a complete analysis result from the request text alone.
    pub fn synthesize(&self, request: &AnalysisRequest) -> AnalysisResult {
        let text = request.joined_text();

        let genre = classifier::detect_genre(&text);
        let tone = classifier::detect_tone(&text);
        let key_entities = entities::extract_entities(&text);

        let entity = key_entities
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_ENTITY);

        let directions = templates::directions_for(genre, entity);
        let narrative_bridge =
            format!("{entity}'s story reaches a critical turning point. Three paths lie ahead:");

        tracing::debug!(genre, tone, entities = key_entities.len(), "template synthesis");

        AnalysisResult {
            genre: genre.to_string(),
            tone: tone.to_string(),
            key_entities,
            narrative_bridge,
            directions,
            source: Source::Template,
        }
    }

    /// Fixed-sentence preview for a chosen path; terminal fallback of the
    /// expansion pipeline.
    pub fn fallback_preview(&self, request: &ExpansionRequest) -> ExpansionResult {
        let preview = format!(
            "{} unfolds as {} The consequences of this choice ripple through the story, \
             revealing new truths and challenging everything the characters thought they knew.",
            request.path_name,
            request.path_description.to_lowercase()
        );
        ExpansionResult { preview }
    }
}
