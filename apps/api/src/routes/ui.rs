use axum::response::Html;

/// GET /
/// Serves the single-page chat UI. The page is embedded in the binary so the
/// service deploys as one artifact.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
