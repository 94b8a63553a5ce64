pub mod index;
pub mod past_work;
pub mod products;
pub mod search;
pub mod stats;

use crate::error::AppError;
use crate::state::AppState;
use showcase_core::service::CatalogService;

/// Run a blocking catalog call off the async executor.
pub(crate) async fn with_service<T, F>(app: &AppState, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&CatalogService) -> showcase_core::Result<T> + Send + 'static,
{
    let service = app.service.clone();
    let result = tokio::task::spawn_blocking(move || f(service.as_ref()))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(result)
}
