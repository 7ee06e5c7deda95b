//! Validation of raw provider output into a usable analysis.
//!
//! Providers are asked for bare JSON but routinely wrap it in markdown
//! fences or pad it with prose, so parsing is lenient about everything
//! except the one structural guarantee callers rely on: exactly three
//! directions. A response that cannot supply three is rejected outright
//! so the orchestrator falls through to the next provider.

use plotwright_core::{
    AnalysisResult, Direction, Source, DEFAULT_GENRE, DEFAULT_TONE, DIRECTION_COUNT,
    MAX_KEY_ENTITIES,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Parse a raw provider reply into an [`AnalysisResult`], or `None` when the
/// reply is unusable.
pub fn parse_analysis(raw: &str) -> Option<AnalysisResult> {
    if raw.trim().is_empty() {
        return None;
    }

    let cleaned = strip_code_fence(raw);
    debug!(
        preview = %crate::providers::preview(cleaned),
        "parsing provider analysis"
    );

    let root: Value = match serde_json::from_str(cleaned) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "provider reply is not valid JSON");
            return None;
        }
    };

    let genre = string_or(&root, "genre_detected", DEFAULT_GENRE);
    let tone = string_or(&root, "tone_detected", DEFAULT_TONE);
    let narrative_bridge = string_or(&root, "narrative_bridge", "");
    let key_entities = parse_entities(&root);

    let mut directions = parse_directions(&root);
    if directions.len() < DIRECTION_COUNT {
        warn!(
            count = directions.len(),
            "provider returned fewer than three directions, discarding reply"
        );
        return None;
    }
    directions.truncate(DIRECTION_COUNT);

    Some(AnalysisResult {
        genre,
        tone,
        key_entities,
        narrative_bridge,
        directions,
        source: Source::Ai,
    })
}

/// Strip a single surrounding markdown code fence, if present.
fn strip_code_fence(raw: &str) -> &str {
    let mut cleaned = raw.trim();
    if let Some(rest) = cleaned.strip_prefix("```json") {
        cleaned = rest;
    } else if let Some(rest) = cleaned.strip_prefix("```") {
        cleaned = rest;
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }
    cleaned.trim()
}

fn string_or(root: &Value, key: &str, default: &str) -> String {
    match root.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

/// String entries only; duplicates dropped, capped at [`MAX_KEY_ENTITIES`].
fn parse_entities(root: &Value) -> Vec<String> {
    let mut entities: Vec<String> = Vec::new();
    if let Some(Value::Array(items)) = root.get("key_entities") {
        for item in items {
            if let Value::String(s) = item {
                if !entities.iter().any(|e| e == s) {
                    entities.push(s.clone());
                }
            }
        }
    }
    entities.truncate(MAX_KEY_ENTITIES);
    entities
}

/// Accept both shapes models produce: objects with name/description, and
/// bare strings, which become the description of a positionally named path.
fn parse_directions(root: &Value) -> Vec<Direction> {
    let mut directions = Vec::new();
    if let Some(Value::Array(items)) = root.get("directions") {
        for item in items {
            match item {
                Value::Object(fields) => {
                    let name = match fields.get("name") {
                        Some(Value::String(s)) => s.clone(),
                        _ => format!("Path {}", directions.len() + 1),
                    };
                    let description = match fields.get("description") {
                        Some(Value::String(s)) => s.clone(),
                        _ => String::new(),
                    };
                    directions.push(Direction::new(name, description));
                }
                Value::String(text) => {
                    let name = format!("Path {}", directions.len() + 1);
                    directions.push(Direction::new(name, text.clone()));
                }
                _ => {}
            }
        }
    }
    directions
}
