use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Azure OpenAI in production, a mock in tests.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}
