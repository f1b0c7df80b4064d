use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;
use crate::llm_client::TextGenerator;
use crate::store::DataStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// JSON files backing the engineers, calendar and pricing collections.
    pub store: Arc<DataStore>,
    /// Reference Markdown served to the dashboard and spliced into SOW prompts.
    pub content: Arc<dyn ContentStore>,
    /// Pluggable generator. Default: OllamaClient.
    pub llm: Arc<dyn TextGenerator>,
}
