use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::DocumentDto;
use crate::application::gateway::DocumentGateway;

/// GET /document/documentsList
/// Enumerate stored documents: name, content type and length, no content.
#[utoipa::path(
    get,
    path = "/document/documentsList",
    tag = "documents",
    responses(
        (status = 200, description = "Stored documents, possibly empty", body = [DocumentDto]),
        (status = 400, description = "Store error")
    )
)]
pub async fn list_handler(
    State(gateway): State<Arc<DocumentGateway>>,
) -> Result<Json<Vec<DocumentDto>>, ApiError> {
    let documents = gateway.list().await?;
    Ok(Json(documents))
}
