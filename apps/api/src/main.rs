mod config;
mod content;
mod dashboard;
mod errors;
mod llm_client;
mod models;
mod routes;
mod sow;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::FsContentStore;
use crate::llm_client::OllamaClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::DataStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SOW Desk API v{}", env!("CARGO_PKG_VERSION"));

    let store = DataStore::open(&config.data_dir).await?;
    info!("Data store ready at {}", store.dir().display());

    let content = FsContentStore::new(&config.content_dir);
    info!("Reference content served from {}", config.content_dir.display());

    let llm = OllamaClient::new(
        config.ollama_url.clone(),
        config.ollama_model.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!(
        "LLM client initialized (endpoint: {}, model: {})",
        config.ollama_url,
        llm.model()
    );

    let state = AppState {
        config: config.clone(),
        store: Arc::new(store),
        content: Arc::new(content),
        llm: Arc::new(llm),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
