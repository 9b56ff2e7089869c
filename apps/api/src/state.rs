use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::{CompletionProvider, GenerationParams};

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests never write to it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Completion backend. `GeminiClient` in production, a fake in tests.
    pub llm: Arc<dyn CompletionProvider>,
    pub generation: GenerationParams,
}
