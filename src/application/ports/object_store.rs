use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid object key: {0}")]
    InvalidKey(String),
}

/// Object content together with the content type it was stored under.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub content: Bytes,
    pub content_type: String,
}

/// Listing entry for one stored object. Content is never materialized here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: String,
    pub content_type: String,
    pub length: u64,
}

/// Port for the object store backing the gateway.
///
/// Keys form a flat namespace; the document name is the key. Creating the
/// container if absent is the adapter's one-time startup responsibility,
/// not part of this contract.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Probe whether an object is present under `key`. Idempotent and
    /// non-destructive.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Fetch an object's bytes and stored content type.
    async fn get(&self, key: &str) -> Result<StoredObject, StoreError>;

    /// Persist `content` under `key`, tagged with `content_type`, and return
    /// the resolvable absolute location of the stored object.
    async fn put(&self, key: &str, content: Bytes, content_type: &str) -> Result<String, StoreError>;

    /// Enumerate stored objects. An empty container yields an empty vec.
    async fn list(&self) -> Result<Vec<ObjectSummary>, StoreError>;

    /// Remove the object under `key`. Returns true iff an object existed and
    /// was removed.
    async fn delete(&self, key: &str) -> Result<bool, StoreError>;
}
