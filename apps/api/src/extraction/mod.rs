//! Text extraction — turns an uploaded `.docx` or `.pdf` into ordered lines of plain text.
//!
//! ## Supported formats
//! - Word: `.docx` via docx-rs, one line per body paragraph, paragraph order
//! - PDF: `.pdf` via pdf-extract, page order
//!
//! Everything else is rejected before any parsing happens.

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;

#[cfg(test)]
pub mod testing;

/// Format discriminator derived from the upload's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Docx,
    Pdf,
}

impl DocumentFormat {
    /// Maps a file name to a supported format by extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// An upload held for the duration of one request.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub format: DocumentFormat,
    pub bytes: Bytes,
}

/// Plain text of one document as ordered lines.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub format: DocumentFormat,
    pub lines: Vec<String>,
}

impl ExtractedText {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|l| l.split_whitespace().count()).sum()
    }
}

/// Extracts the document's text, preserving paragraph or page order.
pub fn extract_text(document: &Document) -> Result<ExtractedText, AppError> {
    info!(
        "Extracting {:?} document '{}' ({} bytes)",
        document.format,
        document.file_name,
        document.bytes.len()
    );

    let lines = match document.format {
        DocumentFormat::Docx => extract_docx_lines(&document.bytes)?,
        DocumentFormat::Pdf => extract_pdf_lines(&document.bytes)?,
    };

    let extracted = ExtractedText {
        format: document.format,
        lines,
    };

    info!(
        "Extracted {} lines, {} words from '{}'",
        extracted.line_count(),
        extracted.word_count(),
        document.file_name
    );

    if let Some(first) = extracted.lines.iter().find(|l| !l.trim().is_empty()) {
        let preview: String = first.chars().take(80).collect();
        debug!("First non-empty line: {preview}");
    }

    Ok(extracted)
}

/// Reads body paragraphs in document order. Each paragraph becomes one line,
/// or several when it contains manual line breaks.
fn extract_docx_lines(bytes: &[u8]) -> Result<Vec<String>, AppError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| {
        warn!("DOCX parsing failed: {e}");
        AppError::UnprocessableEntity(format!("Failed to read .docx document: {e}"))
    })?;

    let lines = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .flat_map(|text| text.split('\n').map(String::from).collect::<Vec<_>>())
        .collect();

    Ok(lines)
}

fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run_text(run, &mut text),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let docx_rs::ParagraphChild::Run(run) = inner {
                        push_run_text(run, &mut text);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

fn push_run_text(run: &docx_rs::Run, output: &mut String) {
    for run_child in &run.children {
        match run_child {
            docx_rs::RunChild::Text(t) => output.push_str(&t.text),
            docx_rs::RunChild::Tab(_) => output.push('\t'),
            docx_rs::RunChild::Break(_) => output.push('\n'),
            _ => {}
        }
    }
}

/// Extracts page text in page order.
/// pdf-extract can panic on malformed fonts, so the call runs under `catch_unwind`.
fn extract_pdf_lines(bytes: &[u8]) -> Result<Vec<String>, AppError> {
    let text = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    })) {
        Ok(Ok(t)) => t,
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            return Err(AppError::UnprocessableEntity(format!(
                "Failed to read .pdf document: {e}"
            )));
        }
        Err(_panic) => {
            warn!("PDF extraction panicked, likely a malformed font or glyph table");
            return Err(AppError::UnprocessableEntity(
                "Failed to read .pdf document: malformed content".to_string(),
            ));
        }
    };

    Ok(text.split('\n').map(String::from).collect())
}
