use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, Level};

use docstore::{
    api::{create_router, router::AppState},
    application::{gateway::DocumentGateway, ports::ObjectStore},
    domain::ValidationPolicy,
    infrastructure::storage::LocalObjectStore,
    Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .init();

    info!("Starting document storage gateway");

    // Load configuration
    let config = Config::from_env();
    config.validate()?;
    info!("Configuration loaded and validated");

    // Initialize the store adapter; creates the container if absent
    let store = Arc::new(LocalObjectStore::new(
        config.storage_root.clone(),
        config.container_name.clone(),
    ));
    store.init().await?;
    let store: Arc<dyn ObjectStore> = store;
    info!(container = %config.container_name, "Object store initialized");

    // Assemble the gateway around the immutable policy
    let policy = ValidationPolicy::new(
        config.max_document_size_bytes,
        config.supported_types.clone(),
    );
    let gateway = Arc::new(DocumentGateway::new(policy, store));

    let state = AppState { gateway };

    // The body cap sits above the document limit so oversize uploads still
    // reach validation; multipart framing overhead rides in the headroom.
    let max_body_bytes = (config.max_document_size_bytes as usize).saturating_mul(2);
    let app = create_router(state, max_body_bytes);

    // Start server
    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
