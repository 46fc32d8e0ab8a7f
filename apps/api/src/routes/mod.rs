pub mod health;
pub mod ui;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers::handle_upload_resume;
use crate::interview::handlers::handle_resume_chat;
use crate::profile::handle_submit_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/upload-resume", post(handle_upload_resume))
        .route("/api/resume-chat", post(handle_resume_chat))
        .route("/api/submit-resume", post(handle_submit_resume))
        // Resume PDFs routinely exceed axum's 2 MB default body limit.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(state)
}
