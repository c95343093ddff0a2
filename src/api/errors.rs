use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::errors::{DeleteError, DownloadError, ListError, UploadError};
use crate::domain::policy::ValidationOutcome;

/// API error response.
///
/// Every gateway failure renders as a 4xx with either the operation's fixed
/// message as a plain string body, or the validation outcome as a JSON object
/// keyed by violation code. Internal detail never reaches the caller; the
/// gateway has already logged it.
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

enum ApiErrorBody {
    Message(String),
    Violations(ValidationOutcome),
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody::Message(message.into()),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn validation(outcome: ValidationOutcome) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrorBody::Violations(outcome),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.body {
            ApiErrorBody::Message(message) => (self.status, message).into_response(),
            ApiErrorBody::Violations(outcome) => (self.status, Json(outcome)).into_response(),
        }
    }
}

// Convert gateway operation errors to API errors. Every operation failure,
// including not-found, is a 400 by contract.

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Validation(outcome) => ApiError::validation(outcome),
            other => ApiError::bad_request(other.to_string()),
        }
    }
}

impl From<DownloadError> for ApiError {
    fn from(err: DownloadError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<ListError> for ApiError {
    fn from(err: ListError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<DeleteError> for ApiError {
    fn from(err: DeleteError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}
