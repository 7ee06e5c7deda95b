//! Capitalized-token entity extraction.
//!
//! A lightweight heuristic for surfacing candidate proper nouns: capitalized
//! alphabetic words of length >= 3 that follow whitespace, a quote, or an
//! opening bracket, minus a fixed stop-word set. The very first word of the
//! text gets its own check since nothing precedes it.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::types::MAX_KEY_ENTITIES;

lazy_static! {
    /// Capitalized word preceded by a delimiter. The capture excludes the
    /// delimiter itself.
    static ref CAPITALIZED_TOKEN: Regex =
        Regex::new(r#"[\s"'(\[]([A-Z][a-z]{2,})"#).unwrap();

    /// Capitalized word at the very start of the text.
    static ref LEADING_TOKEN: Regex = Regex::new(r"^([A-Z][a-z]{2,})").unwrap();

    /// Capitalized function words that are never entities.
    static ref STOP_WORDS: HashSet<&'static str> = [
        "The", "This", "That", "Then", "They", "There", "Their", "These", "Those",
        "When", "Where", "What", "Which", "While", "With", "After", "Before",
        "Because", "Since", "About", "From", "Into", "Through", "During",
        "Without", "Between", "Each", "Every", "Some", "Many", "Most", "Other",
        "Another", "Such", "Only", "Just", "Also", "Even", "Still", "Already",
        "Here", "Never", "Always", "Sometimes", "Perhaps", "Maybe", "However",
        "Although", "Though", "But", "And", "For", "Not", "She", "His", "Her",
        "Its", "Our", "Has", "Had", "Was", "Were", "Are", "Been", "Being",
        "Have", "Did", "Does", "Could", "Would", "Should", "Must", "Shall",
        "Will", "May", "Might", "Like", "Okay", "Either", "Outside",
        "Inside", "Below", "Above", "Near", "Except",
    ]
    .into_iter()
    .collect();
}

/// Extract candidate entity names from free text.
///
/// Order is first-seen, duplicates are dropped, and the result is capped at
/// [`MAX_KEY_ENTITIES`]. The leading word of the text is considered last,
/// after all delimiter-preceded matches.
pub fn extract_entities(text: &str) -> Vec<String> {
    let mut entities: Vec<String> = Vec::new();

    for capture in CAPITALIZED_TOKEN.captures_iter(text) {
        push_unique(&mut entities, &capture[1]);
    }

    if text.len() > 3 {
        if let Some(capture) = LEADING_TOKEN.captures(text.trim()) {
            push_unique(&mut entities, &capture[1]);
        }
    }

    entities.truncate(MAX_KEY_ENTITIES);
    entities
}

fn push_unique(entities: &mut Vec<String>, word: &str) {
    if STOP_WORDS.contains(word) {
        return;
    }
    if !entities.iter().any(|e| e == word) {
        entities.push(word.to_string());
    }
}
