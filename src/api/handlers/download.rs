use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::gateway::DocumentGateway;

/// GET /document/download/{document_name}
/// Stream a stored document back under its recorded content type.
#[utoipa::path(
    get,
    path = "/document/download/{document_name}",
    tag = "documents",
    params(
        ("document_name" = String, Path, description = "Name the document was stored under")
    ),
    responses(
        (status = 200, description = "Document content, tagged with its stored content type"),
        (status = 400, description = "Missing name, unknown document, or store error")
    )
)]
pub async fn download_handler(
    State(gateway): State<Arc<DocumentGateway>>,
    Path(document_name): Path<String>,
) -> Result<Response, ApiError> {
    let descriptor = gateway.download(&document_name).await?;
    let content = descriptor.content.unwrap_or_default();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, descriptor.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", descriptor.name),
        )
        .body(Body::from(content))
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {e}")))
}
