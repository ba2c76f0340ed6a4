//! Export of generated artifacts as downloadable files. Only code is exportable.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::generation::generator::ArtifactKind;

pub const CODE_EXPORT_FILE_NAME: &str = "generated_abap_code.abap";
pub const CODE_EXPORT_URL: &str = "/api/v1/export/code";

/// Tells the client how to download an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDescriptor {
    pub file_name: String,
    pub download_url: String,
}

/// Returns the export descriptor for `kind`, or `None` for display-only kinds.
pub fn export_descriptor(kind: ArtifactKind) -> Option<ExportDescriptor> {
    match kind {
        ArtifactKind::Code => Some(ExportDescriptor {
            file_name: CODE_EXPORT_FILE_NAME.to_string(),
            download_url: CODE_EXPORT_URL.to_string(),
        }),
        ArtifactKind::UnitTestPlan | ArtifactKind::TechnicalSpecification => None,
    }
}

/// Wraps generated code as a `generated_abap_code.abap` attachment.
pub fn code_attachment(content: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CODE_EXPORT_FILE_NAME}\""),
            ),
        ],
        content,
    )
        .into_response()
}
