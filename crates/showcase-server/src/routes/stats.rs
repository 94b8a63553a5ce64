use axum::extract::State;
use axum::Json;

use super::with_service;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/stats — collection sizes, computed on every request.
pub async fn get_stats(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let stats = with_service(&app, |svc| svc.stats()).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "stats": stats,
    })))
}
