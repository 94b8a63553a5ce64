pub mod error;
pub mod routes;
pub mod state;

use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    with_middleware(api_routes()).with_state(app_state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(routes::index::descriptor))
        // Products
        .route("/api/products", get(routes::products::list_products))
        .route("/api/products/{name}", get(routes::products::get_product))
        // Past work
        .route("/api/past-work", get(routes::past_work::list_past_work))
        .route(
            "/api/past-work/{name}",
            get(routes::past_work::get_past_work),
        )
        // Aggregates
        .route("/api/stats", get(routes::stats::get_stats))
        .route("/api/search", get(routes::search::search))
        .fallback(endpoint_not_found)
}

fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(panic_response))
}

async fn endpoint_not_found() -> Response {
    error::failure(StatusCode::NOT_FOUND, "Endpoint not found")
}

fn panic_response(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "request handler panicked");
    error::failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        error::INTERNAL_ERROR_MESSAGE,
    )
}

/// Serve the catalog API on a pre-bound listener.
///
/// The caller binds first so it can read the actual port before starting
/// (useful when `port = 0` and the OS picks a free port).
pub async fn serve_on(app_state: AppState, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(app_state);

    tracing::info!("catalog API listening on http://localhost:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}
