use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    delete_handler, download_handler, health_handler, list_handler, upload_handler,
};
use crate::api::openapi::openapi_handler;
use crate::application::gateway::DocumentGateway;

/// Application state container
pub struct AppState {
    pub gateway: Arc<DocumentGateway>,
}

/// Create router with all routes and middleware.
///
/// `max_body_bytes` must sit above the policy's document size limit so that
/// oversize uploads reach validation and get the policy message instead of a
/// transport-level rejection.
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .route("/document/upload", post(upload_handler))
        .route("/document/download/{document_name}", get(download_handler))
        .route("/document/documentsList", get(list_handler))
        .route("/document/delete/{document_name}", delete(delete_handler))
        .with_state(state.gateway)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
