use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::ObjectSummary;

/// An incoming document as parsed off the wire, before validation.
///
/// `file_name` is kept exactly as the client sent it; path components are
/// only stripped when the gateway derives the store key from it.
#[derive(Debug, Clone)]
pub struct UploadDocument {
    pub file_name: String,
    pub content_type: String,
    pub content: Bytes,
}

/// Metadata view of one stored document, as returned by listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentDto {
    pub name: String,
    pub content_type: String,
    pub length: u64,
}

impl From<ObjectSummary> for DocumentDto {
    fn from(summary: ObjectSummary) -> Self {
        Self {
            name: summary.key,
            content_type: summary.content_type,
            length: summary.length,
        }
    }
}
