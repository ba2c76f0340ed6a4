//! Session shell logic: what happens to one upload and which action a button press selects.
//!
//! The HTTP layer is a thin adapter over these two pieces.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_text, Document, DocumentFormat};
use crate::generation::ArtifactKind;
use crate::summary::{extract_technical_summary, TechnicalSummary};

/// Result of processing one upload. Only parse failures are errors.
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// Extension is neither `.docx` nor `.pdf`. Nothing was extracted.
    UnsupportedFileType { file_name: String },
    /// Extraction worked but no line mentions a technical keyword.
    NoTechnicalContent {
        file_name: String,
        format: DocumentFormat,
        line_count: usize,
    },
    Summary {
        file_name: String,
        format: DocumentFormat,
        line_count: usize,
        summary: TechnicalSummary,
    },
}

/// Routes the upload by extension, extracts its text off the async runtime, then filters it.
pub async fn process_upload(file_name: String, bytes: Bytes) -> Result<UploadOutcome, AppError> {
    let Some(format) = DocumentFormat::from_file_name(&file_name) else {
        return Ok(UploadOutcome::UnsupportedFileType { file_name });
    };

    let document = Document {
        file_name,
        format,
        bytes,
    };

    // Parsing is CPU-bound; keep it off the async workers
    let (document, extracted) = tokio::task::spawn_blocking(move || {
        let extracted = extract_text(&document);
        (document, extracted)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))?;
    let extracted = extracted?;

    let summary = extract_technical_summary(&extracted.lines);
    info!(
        "Technical summary for '{}': {} of {} lines kept",
        document.file_name,
        summary.len(),
        extracted.line_count()
    );

    if summary.is_empty() {
        return Ok(UploadOutcome::NoTechnicalContent {
            file_name: document.file_name,
            format: extracted.format,
            line_count: extracted.line_count(),
        });
    }

    Ok(UploadOutcome::Summary {
        file_name: document.file_name,
        format: extracted.format,
        line_count: extracted.line_count(),
        summary,
    })
}

/// The single action selected by one interaction. One request carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    GenerateCode,
    GenerateUtp,
    GenerateTs,
}

impl SessionAction {
    pub fn artifact_kind(self) -> ArtifactKind {
        match self {
            SessionAction::GenerateCode => ArtifactKind::Code,
            SessionAction::GenerateUtp => ArtifactKind::UnitTestPlan,
            SessionAction::GenerateTs => ArtifactKind::TechnicalSpecification,
        }
    }
}
