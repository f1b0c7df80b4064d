use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Where SOW drafts are generated; reachability is not probed here.
    pub generation_endpoint: String,
    pub generation_model: String,
    pub data_dir_present: bool,
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        service: "sowdesk-api",
        version: env!("CARGO_PKG_VERSION"),
        generation_endpoint: state.llm.endpoint().to_string(),
        generation_model: state.config.ollama_model.clone(),
        data_dir_present: state.store.dir().is_dir(),
    })
}
