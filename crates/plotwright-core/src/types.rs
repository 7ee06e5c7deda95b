//! Core data model for story analysis.
//!
//! Wire field names (`genre_detected`, `key_entities`, ...) are part of the
//! public JSON contract and must not change.

use serde::{Deserialize, Serialize};

/// Sentinel substituted for absent or blank request fields before they are
/// embedded in a provider prompt. Prompts must never contain empty sections.
pub const MISSING_FIELD_PLACEHOLDER: &str = "(not provided)";

/// Upper bound on `key_entities`.
pub const MAX_KEY_ENTITIES: usize = 8;

/// Every analysis result carries exactly this many directions.
pub const DIRECTION_COUNT: usize = 3;

/// Narrative text to analyze. All fields are optional; blank values are
/// treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The story so far.
    #[serde(default)]
    pub full_context: Option<String>,

    /// A short rolling summary of recent events.
    #[serde(default)]
    pub short_memory: Option<String>,

    /// The most recently written paragraph.
    #[serde(default)]
    pub last_paragraph: Option<String>,
}

impl AnalysisRequest {
    /// Build a request from plain text (context only).
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            full_context: Some(text.into()),
            ..Self::default()
        }
    }

    /// All three fields joined with spaces, missing fields contributing
    /// nothing. This is the corpus the deterministic synthesizer scans.
    pub fn joined_text(&self) -> String {
        format!(
            "{} {} {}",
            or_empty(&self.full_context),
            or_empty(&self.short_memory),
            or_empty(&self.last_paragraph)
        )
    }

    /// Context for prompt embedding, placeholder-substituted when blank.
    pub fn full_context_for_prompt(&self) -> &str {
        or_placeholder(&self.full_context)
    }

    /// Short memory for prompt embedding, placeholder-substituted when blank.
    pub fn short_memory_for_prompt(&self) -> &str {
        or_placeholder(&self.short_memory)
    }

    /// Last paragraph for prompt embedding, placeholder-substituted when blank.
    pub fn last_paragraph_for_prompt(&self) -> &str {
        or_placeholder(&self.last_paragraph)
    }
}

fn or_empty(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

fn or_placeholder(field: &Option<String>) -> &str {
    match field.as_deref() {
        Some(s) if !s.trim().is_empty() => s,
        _ => MISSING_FIELD_PLACEHOLDER,
    }
}

/// One named branching continuation of a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub name: String,
    pub description: String,
}

impl Direction {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Where an analysis result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Produced by a generative provider and validated.
    Ai,
    /// Produced by the deterministic template synthesizer.
    Template,
}

/// Structured story-direction suggestions.
///
/// Invariant: `directions.len() == DIRECTION_COUNT`, regardless of which
/// pipeline stage produced the result. Callers depend on this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "genre_detected")]
    pub genre: String,

    #[serde(rename = "tone_detected")]
    pub tone: String,

    /// Proper nouns surfaced from the text, first-seen order, deduplicated,
    /// at most [`MAX_KEY_ENTITIES`].
    pub key_entities: Vec<String>,

    /// One sentence setting up the branching moment.
    pub narrative_bridge: String,

    /// Exactly [`DIRECTION_COUNT`] branching paths.
    pub directions: Vec<Direction>,

    pub source: Source,
}

/// A chosen direction to expand into a preview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpansionRequest {
    #[serde(default)]
    pub story_context: String,

    #[serde(default)]
    pub path_name: String,

    #[serde(default)]
    pub path_description: String,
}

/// A short preview of how a chosen path unfolds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionResult {
    pub preview: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_text_skips_missing_fields() {
        let request = AnalysisRequest {
            full_context: Some("The castle stood".to_string()),
            short_memory: None,
            last_paragraph: Some("alone".to_string()),
        };
        assert_eq!(request.joined_text(), "The castle stood  alone");
    }

    #[test]
    fn blank_fields_get_placeholder_for_prompts() {
        let request = AnalysisRequest {
            full_context: Some("   ".to_string()),
            ..AnalysisRequest::default()
        };
        assert_eq!(request.full_context_for_prompt(), MISSING_FIELD_PLACEHOLDER);
        assert_eq!(request.short_memory_for_prompt(), MISSING_FIELD_PLACEHOLDER);
    }

    #[test]
    fn non_blank_fields_pass_through_to_prompts() {
        let request = AnalysisRequest::from_text("Kara rode north");
        assert_eq!(request.full_context_for_prompt(), "Kara rode north");
    }

    #[test]
    fn result_serializes_with_wire_field_names() {
        let result = AnalysisResult {
            genre: "Fantasy".to_string(),
            tone: "Epic".to_string(),
            key_entities: vec!["Kara".to_string()],
            narrative_bridge: "A bridge".to_string(),
            directions: vec![
                Direction::new("A", "a"),
                Direction::new("B", "b"),
                Direction::new("C", "c"),
            ],
            source: Source::Template,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["genre_detected"], "Fantasy");
        assert_eq!(json["tone_detected"], "Epic");
        assert_eq!(json["key_entities"][0], "Kara");
        assert_eq!(json["narrative_bridge"], "A bridge");
        assert_eq!(json["source"], "template");
        assert_eq!(json["directions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn source_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&Source::Ai).unwrap(), "\"ai\"");
        let source: Source = serde_json::from_str("\"template\"").unwrap();
        assert_eq!(source, Source::Template);
    }
}
