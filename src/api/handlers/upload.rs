use axum::extract::{Multipart, State};
use std::sync::Arc;
use tracing::error;

use crate::api::errors::ApiError;
use crate::application::dto::UploadDocument;
use crate::application::gateway::DocumentGateway;

/// POST /document/upload
/// Upload a document from a multipart form; the first `file` field wins.
#[utoipa::path(
    post,
    path = "/document/upload",
    tag = "documents",
    responses(
        (status = 200, description = "Document stored; body is its absolute location", body = String),
        (status = 400, description = "Validation failure (JSON violation map) or upload error")
    )
)]
pub async fn upload_handler(
    State(gateway): State<Arc<DocumentGateway>>,
    mut multipart: Multipart,
) -> Result<String, ApiError> {
    let mut document = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let content = match field.bytes().await {
            Ok(content) => content,
            Err(e) => {
                error!(error = %e, document = %file_name, "error buffering the uploaded document");
                return Err(ApiError::bad_request(format!(
                    "failed to upload document : {file_name} "
                )));
            }
        };

        document = Some(UploadDocument {
            file_name,
            content_type,
            content,
        });
        break;
    }

    // A form without a file field still goes through validation, which
    // reports it as NoDocument.
    let location = gateway.upload(document).await?;
    Ok(location)
}
