use axum::response::Json;
use utoipa::OpenApi;

use crate::application::dto::DocumentDto;

/// OpenAPI specification for the document gateway API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DocStore API",
        version = "1.0.0",
        description = "Document storage gateway over a pluggable object store"
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::upload::upload_handler,
        crate::api::handlers::download::download_handler,
        crate::api::handlers::list::list_handler,
        crate::api::handlers::delete::delete_handler,
    ),
    components(schemas(DocumentDto)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "documents", description = "Document storage operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
