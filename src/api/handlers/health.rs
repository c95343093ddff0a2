use axum::response::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
