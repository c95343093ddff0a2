use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::application::ports::{ObjectStore, ObjectSummary, StoreError, StoredObject};

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Filesystem-backed object store.
///
/// One container maps to one directory tree: document bytes live under
/// `objects/`, the recorded content type of each document under `meta/`, and
/// in-flight writes under `tmp/` until renamed into place. Renames within the
/// container give last-write-wins semantics for concurrent puts to one key.
pub struct LocalObjectStore {
    root: PathBuf,
    container: String,
}

impl LocalObjectStore {
    pub fn new(root: PathBuf, container: String) -> Self {
        Self { root, container }
    }

    /// Create the container directories if absent. One-time startup step.
    pub async fn init(&self) -> Result<(), StoreError> {
        fs::create_dir_all(self.objects_dir()).await?;
        fs::create_dir_all(self.meta_dir()).await?;
        fs::create_dir_all(self.tmp_dir()).await?;
        Ok(())
    }

    fn container_dir(&self) -> PathBuf {
        self.root.join(&self.container)
    }

    fn objects_dir(&self) -> PathBuf {
        self.container_dir().join("objects")
    }

    fn meta_dir(&self) -> PathBuf {
        self.container_dir().join("meta")
    }

    fn tmp_dir(&self) -> PathBuf {
        self.container_dir().join("tmp")
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.objects_dir().join(key)
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.meta_dir().join(key)
    }

    /// Keys are flat file names; anything that could escape the objects
    /// directory is rejected before touching the filesystem.
    fn validate_key(key: &str) -> Result<(), StoreError> {
        if key.is_empty() || key == "." || key == ".." {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        if key.contains('/') || key.contains('\\') {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(())
    }

    async fn content_type_of(&self, key: &str) -> Result<String, StoreError> {
        match fs::read_to_string(self.meta_path(key)).await {
            Ok(content_type) => Ok(content_type),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(DEFAULT_CONTENT_TYPE.to_string())
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        if Self::validate_key(key).is_err() {
            return Ok(false);
        }
        Ok(fs::metadata(self.object_path(key)).await.is_ok())
    }

    async fn get(&self, key: &str) -> Result<StoredObject, StoreError> {
        Self::validate_key(key)?;

        let content = fs::read(self.object_path(key)).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(key.to_string())
            } else {
                StoreError::Io(e)
            }
        })?;
        let content_type = self.content_type_of(key).await?;

        Ok(StoredObject {
            content: Bytes::from(content),
            content_type,
        })
    }

    async fn put(&self, key: &str, content: Bytes, content_type: &str) -> Result<String, StoreError> {
        Self::validate_key(key)?;

        // Write to a temp file first, then rename into place so readers never
        // observe a partially written object.
        let temp_path = self.tmp_dir().join(Uuid::new_v4().to_string());
        debug!(key, temp = ?temp_path, "writing object to temp file");
        fs::write(&temp_path, &content).await?;

        let object_path = self.object_path(key);
        if let Err(e) = fs::rename(&temp_path, &object_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StoreError::Io(e));
        }
        fs::write(self.meta_path(key), content_type.as_bytes()).await?;

        let absolute = fs::canonicalize(&object_path).await?;
        Ok(format!("file://{}", absolute.display()))
    }

    async fn list(&self) -> Result<Vec<ObjectSummary>, StoreError> {
        let mut objects = Vec::new();
        let mut entries = fs::read_dir(self.objects_dir()).await?;

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let key = entry.file_name().to_string_lossy().into_owned();
            let content_type = self.content_type_of(&key).await?;
            objects.push(ObjectSummary {
                key,
                content_type,
                length: metadata.len(),
            });
        }

        objects.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(objects)
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        Self::validate_key(key)?;

        match fs::remove_file(self.object_path(key)).await {
            Ok(()) => {
                // Metadata cleanup is best effort; a stray meta entry is harmless.
                let _ = fs::remove_file(self.meta_path(key)).await;
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
