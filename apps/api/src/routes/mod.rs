pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::sow::handlers as sow;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // SOW API
        .route("/api/sow", get(sow::handle_sow_root))
        .route("/api/sow/analyze", post(sow::handle_analyze))
        .route("/api/sow/generate", post(sow::handle_generate))
        .route("/api/sow/engineers", get(sow::handle_engineers_markdown))
        .route("/api/sow/calendar", get(sow::handle_calendar_markdown))
        .route("/api/sow/pricing", get(sow::handle_pricing_markdown))
        .route("/api/sow/sow-templates", get(sow::handle_templates_markdown))
        // Dashboard API
        .route(
            "/api/engineers",
            get(dashboard::handle_list_engineers).post(dashboard::handle_create_engineer),
        )
        .route(
            "/api/engineers/:id",
            put(dashboard::handle_update_engineer).delete(dashboard::handle_delete_engineer),
        )
        .route(
            "/api/calendar",
            get(dashboard::handle_list_calendar).post(dashboard::handle_create_calendar_entry),
        )
        .route(
            "/api/calendar/:id",
            axum::routing::delete(dashboard::handle_delete_calendar_entry),
        )
        .route(
            "/api/pricing",
            get(dashboard::handle_list_pricing).post(dashboard::handle_create_price_item),
        )
        .route(
            "/api/pricing/:id",
            put(dashboard::handle_update_price_item).delete(dashboard::handle_delete_price_item),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
