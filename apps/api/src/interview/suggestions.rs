//! Dynamic suggestion lists for the `job_title` and `skills` steps.
//!
//! Failures here are never surfaced: an LLM error yields an empty list and
//! the caller falls back to the step's static suggestions.

use serde_json::Value;
use tracing::debug;

use crate::interview::prompts::{
    JOB_TITLE_SUGGESTION_TEMPLATE, SKILLS_SUGGESTION_TEMPLATE, SUGGESTION_SYSTEM,
};
use crate::interview::sequencer::CollectedData;
use crate::llm_client::LlmClient;

const MAX_JOB_TITLES: usize = 3;
const MAX_SKILLS: usize = 6;

/// Asks the LLM for a suggestion list for the given field. Returns an empty
/// vec for fields without dynamic suggestions and on any failure.
pub async fn dynamic_suggestions(
    llm: &LlmClient,
    field: &str,
    collected: &CollectedData,
) -> Vec<String> {
    let (prompt, limit) = match field {
        "job_title" => (
            JOB_TITLE_SUGGESTION_TEMPLATE
                .replace("{experience_level}", field_str(collected, "experience_level"))
                .replace("{domain}", field_str(collected, "domain")),
            MAX_JOB_TITLES,
        ),
        "skills" => (
            SKILLS_SUGGESTION_TEMPLATE.replace("{job_title}", field_str(collected, "job_title")),
            MAX_SKILLS,
        ),
        _ => return Vec::new(),
    };

    match llm.call(&prompt, SUGGESTION_SYSTEM).await {
        Ok(response) => response
            .text()
            .map(|t| parse_suggestion_list(t, limit))
            .unwrap_or_default(),
        Err(e) => {
            debug!("Dynamic suggestions for '{field}' failed: {e}");
            Vec::new()
        }
    }
}

/// Splits a comma-separated LLM reply into at most `limit` trimmed,
/// non-empty suggestions.
pub fn parse_suggestion_list(text: &str, limit: usize) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(limit)
        .map(String::from)
        .collect()
}

fn field_str<'a>(collected: &'a CollectedData, field: &str) -> &'a str {
    collected
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_trims_and_drops_empties() {
        assert_eq!(
            parse_suggestion_list(" Rust , , SQL ,Docker,", 6),
            vec!["Rust", "SQL", "Docker"]
        );
    }

    #[test]
    fn test_parse_truncates_to_limit() {
        assert_eq!(
            parse_suggestion_list("a, b, c, d, e", 3),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_parse_empty_reply() {
        assert!(parse_suggestion_list("", 6).is_empty());
        assert!(parse_suggestion_list(" , , ", 6).is_empty());
    }

    #[test]
    fn test_field_str_missing_or_non_string() {
        let mut data = CollectedData::new();
        data.insert("skills".to_string(), json!(["Rust"]));
        assert_eq!(field_str(&data, "skills"), "");
        assert_eq!(field_str(&data, "domain"), "");
    }
}
