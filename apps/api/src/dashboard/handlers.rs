//! Axum route handlers for the dashboard API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::dashboard::validation::{
    validate_new_calendar_entry, validate_new_engineer, validate_new_price_item,
};
use crate::errors::AppError;
use crate::models::calendar::{CalendarEntry, NewCalendarEntry};
use crate::models::engineer::{Engineer, EngineerUpdate, NewEngineer};
use crate::models::pricing::{NewPriceItem, PriceItem, PriceItemUpdate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Engineers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/engineers
pub async fn handle_list_engineers(State(state): State<AppState>) -> Json<Vec<Engineer>> {
    Json(state.store.engineers().await)
}

/// POST /api/engineers
pub async fn handle_create_engineer(
    State(state): State<AppState>,
    Json(req): Json<NewEngineer>,
) -> Result<(StatusCode, Json<Engineer>), AppError> {
    let engineer = validate_new_engineer(req)?;
    let created = state.store.add_engineer(engineer).await?;
    info!("Engineer {} added ({})", created.id, created.role);
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/engineers/:id
pub async fn handle_update_engineer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<EngineerUpdate>,
) -> Result<Json<Engineer>, AppError> {
    state
        .store
        .update_engineer(&id, req)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Engineer {id} not found")))
}

/// DELETE /api/engineers/:id
pub async fn handle_delete_engineer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_engineer(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Engineer {id} not found")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Calendar
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/calendar
pub async fn handle_list_calendar(State(state): State<AppState>) -> Json<Vec<CalendarEntry>> {
    Json(state.store.calendar_entries().await)
}

/// POST /api/calendar
pub async fn handle_create_calendar_entry(
    State(state): State<AppState>,
    Json(req): Json<NewCalendarEntry>,
) -> Result<(StatusCode, Json<CalendarEntry>), AppError> {
    let entry = validate_new_calendar_entry(req)?;
    let created = state.store.add_calendar_entry(entry).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/calendar/:id
pub async fn handle_delete_calendar_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_calendar_entry(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Calendar entry {id} not found")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pricing
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/pricing
pub async fn handle_list_pricing(State(state): State<AppState>) -> Json<Vec<PriceItem>> {
    Json(state.store.price_items().await)
}

/// POST /api/pricing
pub async fn handle_create_price_item(
    State(state): State<AppState>,
    Json(req): Json<NewPriceItem>,
) -> Result<(StatusCode, Json<PriceItem>), AppError> {
    let item = validate_new_price_item(req)?;
    let created = state.store.add_price_item(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/pricing/:id
pub async fn handle_update_price_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PriceItemUpdate>,
) -> Result<Json<PriceItem>, AppError> {
    state
        .store
        .update_price_item(&id, req)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Price item {id} not found")))
}

/// DELETE /api/pricing/:id
pub async fn handle_delete_price_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_price_item(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Price item {id} not found")))
    }
}
