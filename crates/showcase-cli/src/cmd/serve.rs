use anyhow::Context;
use showcase_core::config::Config;
use showcase_core::service::CatalogService;
use showcase_core::store::CatalogStore;
use showcase_server::AppState;
use std::sync::Arc;

pub fn run(config: &Config, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or(config.port);

    let store = CatalogStore::from_config(config);
    store
        .ensure_all()
        .with_context(|| format!("failed to initialize {}", store.data_dir().display()))?;
    let service = Arc::new(CatalogService::new(store));

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
            .await
            .with_context(|| format!("failed to bind port {port}"))?;
        let actual_port = listener.local_addr()?.port();

        println!("Catalog API → http://localhost:{actual_port}");
        println!("  GET /api/products");
        println!("  GET /api/past-work");
        println!("  GET /api/stats");
        println!("  GET /api/search?q=<query>");

        tokio::select! {
            res = showcase_server::serve_on(AppState::from_service(service), listener) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
