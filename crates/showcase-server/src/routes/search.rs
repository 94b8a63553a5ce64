use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use showcase_core::entry::{PastWorkItem, Product};

use super::with_service;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/search?q=<query> — name substring search across both collections.
pub async fn search(
    State(app): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(params) = params.map_err(|e| AppError::bad_request(e.body_text()))?;
    // Repeated keys are allowed; the first `q` wins.
    let query = params
        .into_iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.to_lowercase())
        .unwrap_or_default();
    if query.is_empty() {
        return Err(AppError::bad_request("Search query required"));
    }

    let needle = query.clone();
    let (products, past_work) = with_service(&app, move |svc| {
        let products = svc.search::<Product>(&needle)?;
        let past_work = svc.search::<PastWorkItem>(&needle)?;
        Ok((products, past_work))
    })
    .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "query": query,
        "counts": {
            "products": products.len(),
            "past_work": past_work.len(),
        },
        "results": {
            "products": products,
            "past_work": past_work,
        },
    })))
}
