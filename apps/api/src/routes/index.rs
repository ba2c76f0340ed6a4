use axum::response::Html;

/// GET /
/// Serves the single-page upload and generation UI.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = include_str!("../../static/index.html");
