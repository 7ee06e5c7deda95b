//! Prompt construction for the generative providers.
//!
//! Both providers receive semantically identical instructions; only the
//! phrasing differs per backend. Blank request fields are replaced with
//! `(not provided)` before embedding so a prompt never carries an empty
//! section. The analysis prompts end with a strict JSON schema directive;
//! the expansion prompts explicitly forbid JSON and markdown.

use plotwright_core::{AnalysisRequest, ExpansionRequest, MISSING_FIELD_PLACEHOLDER};

/// The JSON schema the analysis response must follow.
const ANALYSIS_SCHEMA: &str = concat!(
    r#"{"genre_detected":"...","tone_detected":"...","key_entities":["..."],"#,
    r#""narrative_bridge":"...","directions":["#,
    r#"{"name":"...","description":"..."},"#,
    r#"{"name":"...","description":"..."},"#,
    r#"{"name":"...","description":"..."}]}"#
);

const ANALYSIS_INSTRUCTIONS: &str = "INSTRUCTIONS:\n\
    1. Detect genre: Fantasy/Sci-Fi/Romance/Horror/Thriller/Comedy/Drama/Mystery/Adventure/Mixed\n\
    2. Detect tone: Dark/Lighthearted/Suspenseful/Emotional/Epic/Humorous/Neutral\n\
    3. Extract key entities (character names, locations, objects) max 8\n\
    4. Write a 1-sentence narrative bridge setting up the branching moment\n\
    5. Generate EXACTLY 3 named narrative paths:\n\
    \x20  - Each has a creative name and a 1-2 sentence description\n\
    \x20  - DEEPLY specific to this story's characters and events\n\
    \x20  - Each is a DIFFERENT branch. 2 logical + 1 twist.\n\
    \x20  - Reference actual characters by name.\n";

/// Analysis prompt for the Gemini-style provider.
pub fn analysis_prompt(request: &AnalysisRequest) -> String {
    format!(
        "You are Plotwright, an AI narrative shadow that analyzes stories.\n\n\
         STORY CONTEXT:\n{}\n\n\
         SHORT MEMORY:\n{}\n\n\
         LAST PARAGRAPH:\n{}\n\n\
         {}\n\
         Return ONLY valid JSON, no markdown fences, no extra text:\n{}",
        request.full_context_for_prompt(),
        request.short_memory_for_prompt(),
        request.last_paragraph_for_prompt(),
        ANALYSIS_INSTRUCTIONS,
        ANALYSIS_SCHEMA
    )
}

/// Analysis prompt for the chat-completions provider. The short-memory
/// section is dropped entirely when nothing was provided.
pub fn chat_analysis_prompt(request: &AnalysisRequest) -> String {
    let short_memory = request.short_memory_for_prompt();
    let memory_section = if short_memory == MISSING_FIELD_PLACEHOLDER {
        String::new()
    } else {
        format!("SHORT MEMORY:\n{short_memory}\n\n")
    };

    format!(
        "You are Plotwright, an AI narrative shadow that analyzes stories.\n\n\
         STORY CONTEXT:\n{}\n\n\
         {}\
         LAST PARAGRAPH:\n{}\n\n\
         {}\n\
         Return ONLY valid JSON, no markdown fences, no extra text:\n{}",
        request.full_context_for_prompt(),
        memory_section,
        request.last_paragraph_for_prompt(),
        ANALYSIS_INSTRUCTIONS,
        ANALYSIS_SCHEMA
    )
}

/// Expansion prompt for the Gemini-style provider.
pub fn expansion_prompt(request: &ExpansionRequest) -> String {
    format!(
        "You are Plotwright. A writer has chosen a narrative direction for their story.\n\n\
         STORY SO FAR:\n{}\n\n\
         CHOSEN PATH: {}\n\
         PATH DESCRIPTION: {}\n\n\
         Write a 3-4 sentence preview/summary of how this path would unfold. \
         Be specific to the characters and world. Write in present tense, like a story outline. \
         Do NOT write the actual story — just a compelling preview of what happens next.\n\n\
         Return ONLY the preview text, no JSON, no markdown, no extra commentary.",
        placeholder_if_blank(&request.story_context),
        placeholder_if_blank(&request.path_name),
        placeholder_if_blank(&request.path_description)
    )
}

/// Expansion prompt for the chat-completions provider.
pub fn chat_expansion_prompt(request: &ExpansionRequest) -> String {
    format!(
        "You are Plotwright. A writer has chosen this direction:\n\n\
         STORY SO FAR:\n{}\n\n\
         CHOSEN PATH: {}\n\
         DESCRIPTION: {}\n\n\
         Write a 3-4 sentence preview of how this path unfolds. \
         Be specific to the characters. Write in present tense.\n\
         Return ONLY the preview text, no JSON, no markdown.",
        placeholder_if_blank(&request.story_context),
        placeholder_if_blank(&request.path_name),
        placeholder_if_blank(&request.path_description)
    )
}

fn placeholder_if_blank(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING_FIELD_PLACEHOLDER
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompt_embeds_all_fields() {
        let request = AnalysisRequest {
            full_context: Some("A city of glass".to_string()),
            short_memory: Some("The towers hummed".to_string()),
            last_paragraph: Some("Then silence".to_string()),
        };
        let prompt = analysis_prompt(&request);

        assert!(prompt.contains("STORY CONTEXT:\nA city of glass"));
        assert!(prompt.contains("SHORT MEMORY:\nThe towers hummed"));
        assert!(prompt.contains("LAST PARAGRAPH:\nThen silence"));
        assert!(prompt.contains("EXACTLY 3 named narrative paths"));
        assert!(prompt.contains(r#""genre_detected""#));
    }

    #[test]
    fn blank_fields_never_leave_empty_sections() {
        let prompt = analysis_prompt(&AnalysisRequest::default());
        assert!(prompt.contains(&format!("STORY CONTEXT:\n{MISSING_FIELD_PLACEHOLDER}")));
        assert!(prompt.contains(&format!("SHORT MEMORY:\n{MISSING_FIELD_PLACEHOLDER}")));
        assert!(!prompt.contains("CONTEXT:\n\n"));
    }

    #[test]
    fn chat_prompt_drops_missing_short_memory() {
        let prompt = chat_analysis_prompt(&AnalysisRequest::from_text("Once upon a time"));
        assert!(!prompt.contains("SHORT MEMORY"));

        let with_memory = chat_analysis_prompt(&AnalysisRequest {
            full_context: Some("Once".to_string()),
            short_memory: Some("Recently".to_string()),
            last_paragraph: None,
        });
        assert!(with_memory.contains("SHORT MEMORY:\nRecently"));
    }

    #[test]
    fn expansion_prompts_forbid_structured_output() {
        let request = ExpansionRequest {
            story_context: "The story".to_string(),
            path_name: "The Descent".to_string(),
            path_description: "Down they go".to_string(),
        };

        for prompt in [expansion_prompt(&request), chat_expansion_prompt(&request)] {
            assert!(prompt.contains("CHOSEN PATH: The Descent"));
            assert!(prompt.contains("no JSON"));
            assert!(prompt.contains("no markdown"));
        }
    }

    #[test]
    fn expansion_prompt_substitutes_blank_fields() {
        let prompt = expansion_prompt(&ExpansionRequest::default());
        assert!(prompt.contains(&format!("CHOSEN PATH: {MISSING_FIELD_PLACEHOLDER}")));
    }
}
