use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use showcase_core::entry::PastWorkItem;

use super::with_service;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/past-work — every past work project in insertion order.
pub async fn list_past_work(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let work = with_service(&app, |svc| svc.list::<PastWorkItem>()).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "count": work.len(),
        "past_work": work,
    })))
}

/// GET /api/past-work/{name} — case-insensitive lookup.
pub async fn get_past_work(
    State(app): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Path(name) = name.map_err(|e| AppError::bad_request(e.body_text()))?;
    let item = with_service(&app, move |svc| svc.find_by_name::<PastWorkItem>(&name))
        .await?
        .ok_or_else(|| AppError::not_found("Past work project not found"))?;
    Ok(Json(serde_json::json!({
        "success": true,
        "past_work": item,
    })))
}
