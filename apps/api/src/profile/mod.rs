//! Final profile submission — the terminal record of a session.

use axum::{extract::State, Json};
use serde_json::{json, Map, Value};
use sqlx::types::Json as SqlJson;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/submit-resume
///
/// Body is the full collected profile, plus optional `resume_session_id` and
/// `upload_resume_id` back-references. The references are kept only when they
/// are well-formed ids; the rest of the body is stored as-is.
pub async fn handle_submit_resume(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let Value::Object(mut profile) = body else {
        return Err(AppError::Validation("Expected a JSON object".to_string()));
    };

    let chat_session_id = take_reference(&mut profile, "resume_session_id");
    let resume_upload_id = take_reference(&mut profile, "upload_resume_id");

    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO submitted_profiles (id, profile, chat_session_id, resume_upload_id)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(SqlJson(&profile))
    .bind(chat_session_id)
    .bind(resume_upload_id)
    .execute(&state.db)
    .await?;

    info!("Profile {id} submitted (session: {chat_session_id:?}, upload: {resume_upload_id:?})");
    Ok(Json(json!({
        "status": "success",
        "message": "Profile saved",
    })))
}

/// Removes `key` from the profile body; returns it only when it holds a
/// well-formed id. Malformed or absent references are stored as NULL.
fn take_reference(profile: &mut Map<String, Value>, key: &str) -> Option<Uuid> {
    profile
        .remove(key)
        .and_then(|v| v.as_str().and_then(|s| Uuid::parse_str(s).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(key: &str, value: Value) -> Map<String, Value> {
        let mut profile = Map::new();
        profile.insert("full_name".to_string(), json!("Ada"));
        profile.insert(key.to_string(), value);
        profile
    }

    #[test]
    fn test_take_reference_extracts_valid_id() {
        let id = Uuid::new_v4();
        let mut profile = profile_with("resume_session_id", json!(id.to_string()));
        assert_eq!(take_reference(&mut profile, "resume_session_id"), Some(id));
        // The reference key never lands in the stored profile body.
        assert!(!profile.contains_key("resume_session_id"));
        assert!(profile.contains_key("full_name"));
    }

    #[test]
    fn test_take_reference_drops_malformed_id() {
        let mut profile = profile_with("upload_resume_id", json!("not-an-id"));
        assert_eq!(take_reference(&mut profile, "upload_resume_id"), None);
        assert!(!profile.contains_key("upload_resume_id"));
    }

    #[test]
    fn test_take_reference_tolerates_null_and_absent() {
        let mut profile = profile_with("resume_session_id", Value::Null);
        assert_eq!(take_reference(&mut profile, "resume_session_id"), None);
        assert_eq!(take_reference(&mut profile, "upload_resume_id"), None);
    }
}
