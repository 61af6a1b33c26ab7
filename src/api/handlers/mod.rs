use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::api::AppState;
use crate::export::ExportResult;
use crate::models::{ConOpsInput, ProjectSummary, SaveProjectRequest, ValidationError};

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking internal details.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Structural validation failures are the client's fault and safe to expose.
fn validation_error(e: ValidationError) -> (StatusCode, String) {
    tracing::warn!("Validation error: {}", e);
    (StatusCode::BAD_REQUEST, e.to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Saved Projects
// ============================================================

pub async fn save_project(
    State(state): State<AppState>,
    Json(input): Json<SaveProjectRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, String)> {
    input.spec.validate().map_err(validation_error)?;

    let id = state
        .db
        .save_project(&input.name, &input.spec)
        .map_err(internal_error)?;
    Ok((StatusCode::CREATED, Json(serde_json::json!({ "id": id }))))
}

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectSummary>>, (StatusCode, String)> {
    state.db.list_projects().map(Json).map_err(internal_error)
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let project = state
        .db
        .get_project(id)
        .map_err(internal_error)?
        .ok_or((StatusCode::NOT_FOUND, "Project not found".to_string()))?;

    // Stored payloads were validated at save time; a parse failure here
    // means the row was tampered with outside this service.
    let data: serde_json::Value =
        serde_json::from_str(&project.data).map_err(internal_error)?;
    Ok(Json(serde_json::json!({
        "id": project.id,
        "name": project.name,
        "data": data,
        "created_at": project.created_at,
    })))
}

// ============================================================
// Export / Download
// ============================================================

pub async fn export_spec(
    State(state): State<AppState>,
    Json(input): Json<ConOpsInput>,
) -> Result<Json<ExportResult>, (StatusCode, String)> {
    input.validate().map_err(validation_error)?;

    state.exporter.export(&input).map(Json).map_err(internal_error)
}

pub async fn download(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let path = state
        .exporter
        .artifact_path(&name)
        .ok_or((StatusCode::NOT_FOUND, "Artifact not found".to_string()))?;

    let body = std::fs::read_to_string(path).map_err(internal_error)?;
    let content_type = if name.ends_with(".md") {
        "text/markdown; charset=utf-8"
    } else {
        "application/yaml"
    };
    Ok(([(header::CONTENT_TYPE, content_type)], body))
}
