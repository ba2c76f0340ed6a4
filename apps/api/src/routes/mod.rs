pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::export::CODE_EXPORT_URL;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;
use crate::summary::handlers as summary_handlers;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/summary", post(summary_handlers::handle_summarize))
        .route("/api/v1/generate", post(generation_handlers::handle_generate))
        .route(CODE_EXPORT_URL, post(generation_handlers::handle_export_code))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
