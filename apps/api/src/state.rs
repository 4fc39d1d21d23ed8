use std::sync::Arc;

use crate::analysis::extract::DocumentExtractor;
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable collaborators; no per-request data lives here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document parser. Default: PdfTextExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
    /// Pluggable text generator. Default: the Gemini-backed LlmClient.
    pub generator: Arc<dyn TextGenerator>,
}
