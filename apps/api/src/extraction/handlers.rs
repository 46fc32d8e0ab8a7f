//! Resume upload and extraction: PDF text out, LLM-structured fields back.
//!
//! Thin orchestration — any failure past input validation collapses into a
//! single generic extraction error, with the cause logged server-side. There
//! is no partial-result recovery.

use anyhow::{Context, Result};
use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::{json, Value};
use sqlx::types::Json as SqlJson;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::prompts::{EXTRACT_PROMPT_TEMPLATE, EXTRACT_SYSTEM};
use crate::state::AppState;

/// Only this many characters of raw text go into the extraction prompt.
const PROMPT_TEXT_LIMIT: usize = 4000;

/// POST /api/upload-resume
///
/// Multipart form with a `file` field holding a PDF. Returns the extracted
/// field map as initial collected data, plus the upload's id so the final
/// submission can reference it.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
            file = Some((filename, bytes.to_vec()));
            break;
        }
    }

    let Some((filename, bytes)) = file else {
        return Err(AppError::Validation("No file uploaded".to_string()));
    };
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    extract_and_persist(&state, &filename, &bytes)
        .await
        .map(Json)
        .map_err(AppError::Extraction)
}

async fn extract_and_persist(state: &AppState, filename: &str, bytes: &[u8]) -> Result<Value> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .with_context(|| format!("Unreadable PDF '{filename}'"))?;

    let resume_id = Uuid::new_v4();
    insert_resume_upload(&state.db, resume_id, filename, &text).await?;

    let prompt = EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", truncate_chars(&text, PROMPT_TEXT_LIMIT));
    let extracted: Value = state
        .llm
        .call_json(&prompt, EXTRACT_SYSTEM)
        .await
        .context("LLM extraction returned malformed output")?;

    insert_parsed_resume(&state.db, resume_id, &extracted).await?;

    info!("Resume {resume_id} ('{filename}') extracted");
    Ok(json!({
        "success": true,
        "data": extracted,
        "resume_id": resume_id,
        "message": "Analyzed.",
    }))
}

async fn insert_resume_upload(
    pool: &PgPool,
    resume_id: Uuid,
    filename: &str,
    raw_text: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO resume_uploads (resume_id, filename, raw_text_content) VALUES ($1, $2, $3)",
    )
    .bind(resume_id)
    .bind(filename)
    .bind(raw_text)
    .execute(pool)
    .await
    .context("Failed to persist resume upload")?;
    Ok(())
}

async fn insert_parsed_resume(pool: &PgPool, resume_id: Uuid, parsed: &Value) -> Result<()> {
    sqlx::query("INSERT INTO parsed_resumes (id, resume_id, parsed_data) VALUES ($1, $2, $3)")
        .bind(Uuid::new_v4())
        .bind(resume_id)
        .bind(SqlJson(parsed))
        .execute(pool)
        .await
        .context("Failed to persist parsed resume")?;
    Ok(())
}

/// Truncates to at most `max` characters, never splitting a UTF-8 character.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_text_untouched() {
        assert_eq!(truncate_chars("short", 4000), "short");
    }

    #[test]
    fn test_truncate_at_exact_limit() {
        let text = "abcdef";
        assert_eq!(truncate_chars(text, 6), "abcdef");
        assert_eq!(truncate_chars(text, 3), "abc");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "résumé";
        assert_eq!(truncate_chars(text, 2), "ré");
        assert_eq!(truncate_chars(text, 6), "résumé");
    }
}
