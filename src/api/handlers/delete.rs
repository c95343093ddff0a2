use axum::extract::{Path, State};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::gateway::DocumentGateway;

/// DELETE /document/delete/{document_name}
#[utoipa::path(
    delete,
    path = "/document/delete/{document_name}",
    tag = "documents",
    params(
        ("document_name" = String, Path, description = "Name the document was stored under")
    ),
    responses(
        (status = 200, description = "Document deleted; body is a confirmation string", body = String),
        (status = 400, description = "Missing name, unknown document, or delete failure")
    )
)]
pub async fn delete_handler(
    State(gateway): State<Arc<DocumentGateway>>,
    Path(document_name): Path<String>,
) -> Result<String, ApiError> {
    let confirmation = gateway.delete(&document_name).await?;
    Ok(confirmation)
}
