use showcase_core::config::Config;
use showcase_core::service::CatalogService;
use showcase_core::store::CatalogStore;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CatalogService>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::from_service(Arc::new(CatalogService::new(CatalogStore::from_config(
            config,
        ))))
    }

    /// Share an existing service, e.g. with a command gateway in the same process.
    pub fn from_service(service: Arc<CatalogService>) -> Self {
        Self { service }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_uses_configured_data_dir() {
        let state = AppState::new(&Config::new("/tmp/showcase-test"));
        assert_eq!(
            state.service.store().data_dir(),
            std::path::Path::new("/tmp/showcase-test")
        );
    }

    #[test]
    fn from_service_shares_the_instance() {
        let service = Arc::new(CatalogService::new(CatalogStore::from_config(
            &Config::default(),
        )));
        let state = AppState::from_service(Arc::clone(&service));
        assert!(Arc::ptr_eq(&state.service, &service));
    }
}
