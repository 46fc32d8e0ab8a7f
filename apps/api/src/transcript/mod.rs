//! Best-effort interaction logging.
//!
//! Every chat turn is appended to the session's transcript. This is an audit
//! log, never on the critical path: a failure is classified into a
//! [`LogOutcome`] and swallowed, and callers are free to ignore the outcome.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::interview::sequencer::CollectedData;

/// What happened to a log attempt. Callers may ignore this, but the
/// distinction exists so nothing is silently lost without a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    Logged,
    SkippedInvalidSession,
    SkippedStoreUnavailable,
}

/// One chat turn as stored in a transcript's `interactions` array.
#[derive(Debug, Serialize)]
struct InteractionRecord<'a> {
    timestamp: DateTime<Utc>,
    step: i64,
    user_said: &'a str,
    ai_replied: &'a str,
    snapshot: &'a CollectedData,
}

/// Appends one interaction to the transcript for `session_id`, creating the
/// transcript on first use (upsert, at-least-once append, no deduplication).
pub async fn log_interaction(
    pool: &PgPool,
    session_id: &str,
    user_text: &str,
    ai_text: &str,
    step_index: i64,
    snapshot: &CollectedData,
) -> LogOutcome {
    let Some(session) = parse_session_id(session_id) else {
        return LogOutcome::SkippedInvalidSession;
    };

    let record = InteractionRecord {
        timestamp: Utc::now(),
        step: step_index,
        user_said: user_text,
        ai_replied: ai_text,
        snapshot,
    };

    let result = sqlx::query(
        r#"
        INSERT INTO chat_transcripts (session_id, created_at, interactions)
        VALUES ($1, NOW(), jsonb_build_array($2::jsonb))
        ON CONFLICT (session_id)
        DO UPDATE SET interactions = chat_transcripts.interactions || EXCLUDED.interactions
        "#,
    )
    .bind(session)
    .bind(Json(&record))
    .execute(pool)
    .await;

    match result {
        Ok(_) => LogOutcome::Logged,
        Err(e) => {
            warn!("Transcript append failed for session {session}: {e}");
            LogOutcome::SkippedStoreUnavailable
        }
    }
}

fn parse_session_id(session_id: &str) -> Option<Uuid> {
    Uuid::parse_str(session_id).ok()
}
