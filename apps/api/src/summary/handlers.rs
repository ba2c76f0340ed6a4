//! Axum route handlers for the Summary API.

use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::DocumentFormat;
use crate::session::{process_upload, UploadOutcome};

const NO_TECHNICAL_CONTENT_MESSAGE: &str = "No technical content found based on the keywords.";

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryResponse {
    Summary {
        file_name: String,
        format: DocumentFormat,
        line_count: usize,
        summary: String,
        summary_lines: Vec<String>,
        matched_keywords: Vec<&'static str>,
    },
    NoTechnicalContent {
        file_name: String,
        format: DocumentFormat,
        line_count: usize,
        message: String,
    },
}

/// POST /api/v1/summary
///
/// Multipart upload with a single `file` field (.docx or .pdf).
/// Returns the technical summary, or the "no technical content" state.
pub async fn handle_summarize(mut multipart: Multipart) -> Result<Json<SummaryResponse>, AppError> {
    let (file_name, bytes) = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
            .ok_or_else(|| AppError::Validation("Missing 'file' field in upload".to_string()))?;

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no name".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        break (file_name, bytes);
    };

    match process_upload(file_name, bytes).await? {
        UploadOutcome::UnsupportedFileType { file_name } => {
            Err(AppError::UnsupportedFileType(file_name))
        }
        UploadOutcome::NoTechnicalContent {
            file_name,
            format,
            line_count,
        } => Ok(Json(SummaryResponse::NoTechnicalContent {
            file_name,
            format,
            line_count,
            message: NO_TECHNICAL_CONTENT_MESSAGE.to_string(),
        })),
        UploadOutcome::Summary {
            file_name,
            format,
            line_count,
            summary,
        } => Ok(Json(SummaryResponse::Summary {
            file_name,
            format,
            line_count,
            summary: summary.text(),
            matched_keywords: summary.matched_keywords(),
            summary_lines: summary.lines().to_vec(),
        })),
    }
}
