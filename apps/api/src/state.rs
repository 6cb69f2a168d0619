use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Chat backend. `OllamaClient` in production, a stub in tests.
    pub llm: Arc<dyn ChatModel>,
    pub config: Config,
}
