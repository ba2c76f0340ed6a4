//! Axum route handlers for the Generation API.

use axum::{extract::State, response::Response, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::export::code_attachment;
use crate::generation::generator::{generate_artifact, GeneratedArtifact};
use crate::session::SessionAction;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub action: SessionAction,
    /// The technical summary as returned by the summary endpoint. May be empty.
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportCodeRequest {
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate
///
/// Runs the selected action against the summary. An empty summary is still sent.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GeneratedArtifact>, AppError> {
    let kind = request.action.artifact_kind();
    let artifact = generate_artifact(state.llm.as_ref(), &request.summary, kind).await?;
    Ok(Json(artifact))
}

/// POST /api/v1/export/code
///
/// Returns generated code as a `generated_abap_code.abap` download.
pub async fn handle_export_code(
    Json(request): Json<ExportCodeRequest>,
) -> Result<Response, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    Ok(code_attachment(request.content))
}
