//! Operation error types returned by the document gateway.
//!
//! Each variant's `Display` string is the exact message rendered to the
//! caller; downstream consumers match on these strings, so the wording
//! (including trailing and double spaces) is load-bearing.

use thiserror::Error;

use crate::domain::policy::ValidationOutcome;

#[derive(Debug, Error)]
pub enum UploadError {
    /// The document violates the validation policy. Rendered as a
    /// structured per-code error map, not a single string.
    #[error("document validation failed")]
    Validation(ValidationOutcome),

    /// Buffering or the store call failed. Carries the original file name
    /// exactly as the client sent it.
    #[error("failed to upload document : {name} ")]
    Store { name: String },
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Please provide a document name")]
    MissingName,

    #[error("Requested document Doesn't exist")]
    NotFound,

    #[error("Error downloading document:  {name}")]
    Store { name: String },
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Error getting documents list")]
    Store,
}

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("Document name not provided")]
    MissingName,

    #[error("Document doesn't exist")]
    NotFound,

    /// The store reported non-removal despite the prior existence check,
    /// i.e. a concurrent delete won the race.
    #[error("Unable to delete document : {name}")]
    Failed { name: String },

    #[error("failed to delete document : {name} ")]
    Store { name: String },
}
