//! Axum handler for the conversational profile-building endpoint.
//!
//! The server holds no session state: the collected data and the current step
//! index travel in the request and response payloads. Only the transcript log
//! persists anything, and that is best-effort.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

use crate::interview::catalog::{terminal_step, StepDefinition, RESUME_STEPS};
use crate::interview::prompts::{
    ATS_PROMPT_TEMPLATE, ATS_SYSTEM, SUMMARY_OPTIONS_TEMPLATE, SUMMARY_SYSTEM,
};
use crate::interview::sequencer::{find_next_step, is_filled, CollectedData};
use crate::interview::suggestions::dynamic_suggestions;
use crate::interview::validation::validate;
use crate::llm_client::LlmClient;
use crate::state::AppState;
use crate::transcript::log_interaction;

/// Wire sentinel for "no current step" — the client's very first call.
const NO_STEP: i64 = -1;

fn no_step() -> i64 {
    NO_STEP
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: CollectedData,
    #[serde(default = "no_step")]
    pub step: i64,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// POST /api/resume-chat
///
/// One chat turn. Every branch answers 200 with a branch-specific JSON shape;
/// even validation and LLM failures ride inside the body so the client can
/// keep the user on the current step.
pub async fn handle_resume_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<Value> {
    let user_input = request.message.trim().to_string();
    let mut collected = request.data;
    let current_step = request.step;
    let session_id = request
        .session_id
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // Special commands take priority over the step sequence.
    let command = user_input.to_lowercase();
    if command == "check ats score" {
        return ats_detour(&state, &session_id, &user_input, current_step, &collected).await;
    }
    if command == "submit" {
        let ai_text = "Interview complete! Please click the green 'Submit Profile' button.";
        log_interaction(
            &state.db,
            &session_id,
            &user_input,
            ai_text,
            current_step,
            &collected,
        )
        .await;
        return Json(json!({
            "response": ai_text,
            "finished": true,
            "data": collected,
            "session_id": session_id,
        }));
    }

    // Validate and save the pending answer.
    let mut just_saved_summary = false;
    if current_step != NO_STEP && !user_input.is_empty() {
        if let Some(rule) = step_at(current_step) {
            if let Err(error) = validate(rule, &user_input) {
                let message = error.to_string();
                log_interaction(
                    &state.db,
                    &session_id,
                    &user_input,
                    &message,
                    current_step,
                    &collected,
                )
                .await;
                return Json(json!({
                    "error": message,
                    "keep_step": true,
                    "session_id": session_id,
                }));
            }

            if rule.field == "summary" && command.contains("generate") {
                return summary_options(&state, &session_id, &user_input, current_step, &collected)
                    .await;
            }

            collected.insert(rule.field.to_string(), Value::String(user_input.clone()));
            just_saved_summary = rule.field == "summary";
        }
    }

    match find_next_step(&collected) {
        None => {
            let ai_text = with_summary_note(
                just_saved_summary,
                "Profile complete! Please review and submit.".to_string(),
            );
            log_interaction(
                &state.db,
                &session_id,
                &user_input,
                &ai_text,
                current_step,
                &collected,
            )
            .await;
            Json(json!({
                "response": ai_text,
                "finished": true,
                "data": collected,
                "session_id": session_id,
            }))
        }
        Some(next) => {
            let rule = &RESUME_STEPS[next];
            let mut ai_text = with_summary_note(just_saved_summary, rule.question.to_string());
            let suggestions = suggestions_for(&state.llm, rule, &collected).await;

            // The greeting turn is the only one whose `response` carries the
            // question text; on a normal advance the question field does.
            let mut ui_response = String::new();
            if current_step == NO_STEP && user_input.is_empty() {
                ai_text = greeting(&collected, &ai_text);
                ui_response = ai_text.clone();
            }

            log_interaction(
                &state.db,
                &session_id,
                &user_input,
                &ai_text,
                next as i64,
                &collected,
            )
            .await;
            Json(json!({
                "response": ui_response,
                "next_step": next,
                "question": rule.question,
                "suggestions": suggestions,
                "data": collected,
                "session_id": session_id,
            }))
        }
    }
}

/// "Check ATS Score" keeps the user on their step: the scan result is
/// followed by a reminder of whichever question the sequencer would ask next.
async fn ats_detour(
    state: &AppState,
    session_id: &str,
    user_input: &str,
    current_step: i64,
    collected: &CollectedData,
) -> Json<Value> {
    let profile = Value::Object(collected.clone()).to_string();
    let prompt = ATS_PROMPT_TEMPLATE.replace("{profile}", &profile);

    let scan = match state.llm.call(&prompt, ATS_SYSTEM).await {
        Ok(response) => response.text().map(str::to_string),
        Err(e) => {
            warn!("ATS scan failed: {e}");
            None
        }
    };
    let Some(scan) = scan else {
        return Json(json!({
            "error": "ATS failed.",
            "keep_step": true,
            "session_id": session_id,
        }));
    };

    let mut ai_text = format!("**ATS Analysis:**\n\n{scan}");

    match find_next_step(collected) {
        Some(next) => {
            let rule = &RESUME_STEPS[next];
            ai_text.push_str(&format!("\n\n---\n**Resuming:** {}", rule.question));
            let suggestions = suggestions_for(&state.llm, rule, collected).await;
            log_interaction(
                &state.db,
                session_id,
                user_input,
                &ai_text,
                next as i64,
                collected,
            )
            .await;
            Json(json!({
                "response": ai_text,
                "keep_step": true,
                "question": rule.question,
                "suggestions": suggestions,
                "session_id": session_id,
                "next_step": next,
            }))
        }
        None => {
            let review = terminal_step();
            log_interaction(
                &state.db,
                session_id,
                user_input,
                &ai_text,
                current_step,
                collected,
            )
            .await;
            Json(json!({
                "response": ai_text,
                "keep_step": true,
                "question": review.question,
                "suggestions": review.suggestions,
                "session_id": session_id,
            }))
        }
    }
}

/// "Generate" on the summary step: two draft summaries, returned as clickable
/// suggestions instead of being saved.
async fn summary_options(
    state: &AppState,
    session_id: &str,
    user_input: &str,
    current_step: i64,
    collected: &CollectedData,
) -> Json<Value> {
    let prompt = SUMMARY_OPTIONS_TEMPLATE
        .replace("{job_title}", field_str(collected, "job_title"))
        .replace("{skills}", field_str(collected, "skills"));

    let raw = match state.llm.call(&prompt, SUMMARY_SYSTEM).await {
        Ok(response) => response.text().map(str::to_string),
        Err(e) => {
            warn!("Summary generation failed: {e}");
            None
        }
    };
    let Some(raw) = raw else {
        return Json(json!({
            "error": "Generation failed.",
            "keep_step": true,
            "session_id": session_id,
        }));
    };

    let options = split_summary_options(&raw);
    let ai_text = "Here are two summary options. Click one to auto-fill.";
    log_interaction(
        &state.db,
        session_id,
        user_input,
        &format!("{ai_text} {options:?}"),
        current_step,
        collected,
    )
    .await;
    Json(json!({
        "response": ai_text,
        "suggestions": options,
        "keep_step": true,
        "session_id": session_id,
    }))
}

/// Dynamic suggestions for job_title/skills, static catalog defaults otherwise
/// (and whenever generation comes back empty).
async fn suggestions_for(
    llm: &LlmClient,
    rule: &StepDefinition,
    collected: &CollectedData,
) -> Vec<String> {
    if matches!(rule.field, "job_title" | "skills") {
        let generated = dynamic_suggestions(llm, rule.field, collected).await;
        if !generated.is_empty() {
            return generated;
        }
    }
    rule.suggestions.iter().map(|s| s.to_string()).collect()
}

fn step_at(index: i64) -> Option<&'static StepDefinition> {
    usize::try_from(index).ok().and_then(|i| RESUME_STEPS.get(i))
}

fn with_summary_note(just_saved_summary: bool, text: String) -> String {
    if just_saved_summary {
        format!("Summary updated.\n\n{text}")
    } else {
        text
    }
}

fn greeting(collected: &CollectedData, question: &str) -> String {
    if is_filled(collected, "full_name") {
        let name = field_str(collected, "full_name");
        format!("Welcome back, **{name}**! Resuming... {question}")
    } else {
        format!("Hello! Let's build your resume. {question}")
    }
}

fn split_summary_options(raw: &str) -> Vec<String> {
    raw.split("|||")
        .map(str::trim)
        .filter(|s| !s.is_empty())
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
    fn test_step_at_bounds() {
        assert_eq!(step_at(NO_STEP).map(|s| s.field), None);
        assert_eq!(step_at(0).map(|s| s.field), Some("full_name"));
        assert_eq!(step_at(8).map(|s| s.field), Some("critique"));
        assert_eq!(step_at(99).map(|s| s.field), None);
    }

    #[test]
    fn test_split_summary_options() {
        assert_eq!(
            split_summary_options(" First draft. ||| Second draft. "),
            vec!["First draft.", "Second draft."]
        );
        assert_eq!(split_summary_options("|||"), Vec::<String>::new());
        assert_eq!(split_summary_options("only one"), vec!["only one"]);
    }

    #[test]
    fn test_greeting_welcomes_back_by_name() {
        let mut data = CollectedData::new();
        data.insert("full_name".to_string(), json!("Ada"));
        let text = greeting(&data, "What is your **Email Address**?");
        assert!(text.starts_with("Welcome back, **Ada**!"));
        assert!(text.ends_with("What is your **Email Address**?"));
    }

    #[test]
    fn test_greeting_for_fresh_session() {
        let text = greeting(&CollectedData::new(), "Q");
        assert!(text.starts_with("Hello! Let's build your resume."));
    }

    #[test]
    fn test_summary_note_prefix() {
        assert_eq!(
            with_summary_note(true, "Next question".to_string()),
            "Summary updated.\n\nNext question"
        );
        assert_eq!(with_summary_note(false, "x".to_string()), "x");
    }

    #[test]
    fn test_chat_request_defaults() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.step, NO_STEP);
        assert!(request.message.is_empty());
        assert!(request.data.is_empty());
        assert!(request.session_id.is_none());
    }
}
