use std::path::PathBuf;
use std::sync::Arc;

use crate::knowledge::KnowledgeText;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Compiled once at startup; read-only for the life of the process.
    pub knowledge: KnowledgeText,
    /// Pluggable model backend. Default: Gemini `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    pub landing_page_path: PathBuf,
}
