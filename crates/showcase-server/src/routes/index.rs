use axum::Json;

pub const API_NAME: &str = "Showcase Catalog API";

/// GET / — service descriptor.
pub async fn descriptor() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": API_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "products": "/api/products",
            "past_work": "/api/past-work",
            "stats": "/api/stats",
            "search": "/api/search?q=<query>",
        },
    }))
}
