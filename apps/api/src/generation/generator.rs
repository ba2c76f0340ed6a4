//! Artifact Generator — one parameterized call for all three artifact kinds.
//!
//! Flow: pick the kind's template → embed the summary → one completion call → wrap the text.
//! Each call is independent. Identical input may yield different output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::export::{export_descriptor, ExportDescriptor};
use crate::generation::prompts::{
    render, CODE_PROMPT_TEMPLATE, TS_PROMPT_TEMPLATE, UTP_PROMPT_TEMPLATE,
};
use crate::llm_client::CompletionProvider;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// The three artifacts the tool can produce from a technical summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Code,
    UnitTestPlan,
    TechnicalSpecification,
}

/// Per-kind prompt and presentation strings.
struct ArtifactTemplate {
    prompt: &'static str,
    /// Short name used in error messages.
    label: &'static str,
    title: &'static str,
}

static CODE_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    prompt: CODE_PROMPT_TEMPLATE,
    label: "code",
    title: "Generated Code",
};

static UTP_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    prompt: UTP_PROMPT_TEMPLATE,
    label: "UTP",
    title: "Unit Test Plan",
};

static TS_TEMPLATE: ArtifactTemplate = ArtifactTemplate {
    prompt: TS_PROMPT_TEMPLATE,
    label: "TS",
    title: "Technical Specification",
};

impl ArtifactKind {
    fn template(self) -> &'static ArtifactTemplate {
        match self {
            ArtifactKind::Code => &CODE_TEMPLATE,
            ArtifactKind::UnitTestPlan => &UTP_TEMPLATE,
            ArtifactKind::TechnicalSpecification => &TS_TEMPLATE,
        }
    }

    pub fn label(self) -> &'static str {
        self.template().label
    }

    pub fn title(self) -> &'static str {
        self.template().title
    }

    /// Builds this kind's prompt around `summary`.
    pub fn prompt(self, summary: &str) -> String {
        render(self.template().prompt, summary)
    }
}

/// One generated artifact. Transient: returned to the caller and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArtifact {
    /// Correlates the response with server logs.
    pub artifact_id: Uuid,
    pub kind: ArtifactKind,
    pub title: String,
    pub content: String,
    pub generated_at: DateTime<Utc>,
    /// Present only for kinds that can be downloaded as a file.
    pub export: Option<ExportDescriptor>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates one artifact of `kind` from `summary` with a single completion call.
///
/// Failures surface as `AppError::Llm` carrying "Error generating <label>: <cause>".
pub async fn generate_artifact(
    llm: &dyn CompletionProvider,
    summary: &str,
    kind: ArtifactKind,
) -> Result<GeneratedArtifact, AppError> {
    let artifact_id = Uuid::new_v4();
    info!(
        "Generating {} ({} summary chars) with model {} [artifact {}]",
        kind.label(),
        summary.len(),
        llm.model(),
        artifact_id
    );

    let prompt = kind.prompt(summary);
    let completion = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Error generating {}: {e}", kind.label())))?;

    match &completion.usage {
        Some(usage) => info!(
            "Generated {} [artifact {}]: prompt_tokens={}, completion_tokens={}",
            kind.label(),
            artifact_id,
            usage.prompt_tokens,
            usage.completion_tokens
        ),
        None => info!("Generated {} [artifact {}]", kind.label(), artifact_id),
    }

    Ok(GeneratedArtifact {
        artifact_id,
        kind,
        title: kind.title().to_string(),
        content: completion.text,
        generated_at: Utc::now(),
        export: export_descriptor(kind),
    })
}
