//! Axum route handlers for the SOW API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::content::ContentKey;
use crate::errors::AppError;
use crate::sow::analysis::{analyze_document, AnalysisResult};
use crate::sow::extract::{extract_text, UploadedDocument};
use crate::sow::generator::{generate_sow, SowDraft};
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
const DOCUMENT_FIELD: &str = "document";
const MISSING_DOCUMENT: &str = "No document uploaded";

/// Pulls the `document` field out of a multipart body. Other fields are ignored.
async fn read_document(multipart: &mut Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read multipart body: {e}")))?
    {
        if field.name() != Some(DOCUMENT_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("document").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
        debug!(
            "File uploaded: {filename}, {} bytes, content type {:?}",
            data.len(),
            content_type
        );
        return Ok(UploadedDocument {
            filename,
            content_type,
            data: data.to_vec(),
        });
    }
    Err(AppError::Validation(MISSING_DOCUMENT.to_string()))
}

/// GET /api/sow
pub async fn handle_sow_root() -> Json<Value> {
    Json(json!({ "message": "SOW API placeholder" }))
}

/// POST /api/sow/analyze
///
/// Classifies the uploaded document and returns the raw analysis without calling the model.
pub async fn handle_analyze(mut multipart: Multipart) -> Result<Json<AnalysisResult>, AppError> {
    let upload = read_document(&mut multipart).await?;
    let filename = upload.filename.clone();
    let text = extract_text(upload).await?;
    let analysis = analyze_document(&text, &filename);
    info!(
        "Analyzed {}: platform={}, size={}, complexity={}",
        filename,
        analysis.platform.detected,
        analysis.project.size.label(),
        analysis.project.complexity
    );
    Ok(Json(analysis))
}

/// POST /api/sow/generate
///
/// Full pipeline: decode upload → analyze → build prompt → LLM generate. Returns Markdown.
pub async fn handle_generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SowDraft>, AppError> {
    let upload = read_document(&mut multipart).await?;
    let filename = upload.filename.clone();
    let text = extract_text(upload).await?;
    info!(
        "SOW generation requested for {} ({} characters)",
        filename,
        text.chars().count()
    );
    let draft = generate_sow(
        &text,
        &filename,
        state.content.as_ref(),
        state.llm.as_ref(),
    )
    .await?;
    Ok(Json(draft))
}

async fn reference_markdown(
    state: &AppState,
    key: ContentKey,
) -> Result<impl IntoResponse, AppError> {
    let body = state.content.read(key).await?;
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], body))
}

/// GET /api/sow/engineers
pub async fn handle_engineers_markdown(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    reference_markdown(&state, ContentKey::Engineers).await
}

/// GET /api/sow/calendar
pub async fn handle_calendar_markdown(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    reference_markdown(&state, ContentKey::Calendar).await
}

/// GET /api/sow/pricing
pub async fn handle_pricing_markdown(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    reference_markdown(&state, ContentKey::Pricing).await
}

/// GET /api/sow/sow-templates
pub async fn handle_templates_markdown(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    reference_markdown(&state, ContentKey::SowTemplates).await
}
