// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use crate::application::dataset::DatasetProvider;
use crate::application::session_registry::SessionRegistry;
use crate::application::view_composer::ViewComposer;
use crate::infrastructure::config::load_server_config;
use crate::infrastructure::static_dataset::StaticDataset;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let server_config = load_server_config()?;

    // Static tables are built once and shared read-only across sessions
    let dataset: Arc<dyn DatasetProvider> = Arc::new(StaticDataset::new());

    // Create application components
    let registry = SessionRegistry::new(dataset.clone());
    let composer = ViewComposer::new(dataset.clone());

    // Create application state
    let state = Arc::new(AppState {
        dataset,
        registry,
        composer,
    });

    // Build router (presentation layer)
    let router = router(state);

    // Start server
    let addr: SocketAddr =
        format!("{}:{}", server_config.server.host, server_config.server.port).parse()?;
    tracing::info!(%addr, "starting workwave-dashboard service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
