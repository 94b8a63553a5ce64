use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use showcase_core::entry::Product;

use super::with_service;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/products — every product in insertion order.
pub async fn list_products(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let products = with_service(&app, |svc| svc.list::<Product>()).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "count": products.len(),
        "products": products,
    })))
}

/// GET /api/products/{name} — case-insensitive lookup.
pub async fn get_product(
    State(app): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Path(name) = name.map_err(|e| AppError::bad_request(e.body_text()))?;
    let product = with_service(&app, move |svc| svc.find_by_name::<Product>(&name))
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;
    Ok(Json(serde_json::json!({
        "success": true,
        "product": product,
    })))
}
