use std::sync::Arc;

use tracing::error;

use crate::application::dto::{DocumentDto, UploadDocument};
use crate::application::errors::{DeleteError, DownloadError, ListError, UploadError};
use crate::application::ports::ObjectStore;
use crate::domain::document::{document_basename, DocumentDescriptor};
use crate::domain::policy::ValidationPolicy;

/// The single orchestration point for the four document operations.
///
/// Stateless: holds only the immutable validation policy and a handle to the
/// object store, so it is safe for unlimited concurrent invocation. Store
/// failures never cross this boundary; they are logged here, once, and
/// converted to the operation's fixed failure message.
pub struct DocumentGateway {
    policy: ValidationPolicy,
    store: Arc<dyn ObjectStore>,
}

impl DocumentGateway {
    pub fn new(policy: ValidationPolicy, store: Arc<dyn ObjectStore>) -> Self {
        Self { policy, store }
    }

    /// Validate and persist a document, returning the stored object's
    /// absolute location.
    pub async fn upload(&self, document: Option<UploadDocument>) -> Result<String, UploadError> {
        let Some(document) = document else {
            return Err(UploadError::Validation(self.policy.validate(None)));
        };

        let descriptor = DocumentDescriptor {
            name: document_basename(&document.file_name).to_string(),
            content_type: document.content_type,
            length: Some(document.content.len() as u64),
            content: Some(document.content),
        };

        let outcome = self.policy.validate(Some(&descriptor));
        if !outcome.is_empty() {
            return Err(UploadError::Validation(outcome));
        }

        let content = descriptor.content.clone().unwrap_or_default();
        match self
            .store
            .put(&descriptor.name, content, &descriptor.content_type)
            .await
        {
            Ok(location) => Ok(location),
            Err(e) => {
                error!(error = %e, document = %document.file_name, "error uploading the document");
                Err(UploadError::Store {
                    name: document.file_name,
                })
            }
        }
    }

    /// Fetch a document by name with content and content type populated.
    pub async fn download(&self, document_name: &str) -> Result<DocumentDescriptor, DownloadError> {
        if document_name.is_empty() {
            return Err(DownloadError::MissingName);
        }

        let fetch = async {
            if !self.store.exists(document_name).await? {
                return Ok(None);
            }
            self.store.get(document_name).await.map(Some)
        };

        match fetch.await {
            Ok(Some(object)) => Ok(DocumentDescriptor {
                name: document_name.to_string(),
                content_type: object.content_type,
                length: Some(object.content.len() as u64),
                content: Some(object.content),
            }),
            Ok(None) => Err(DownloadError::NotFound),
            Err(e) => {
                error!(error = %e, document = %document_name, "error downloading the document");
                Err(DownloadError::Store {
                    name: document_name.to_string(),
                })
            }
        }
    }

    /// Enumerate stored documents. An empty store is a successful empty list.
    pub async fn list(&self) -> Result<Vec<DocumentDto>, ListError> {
        match self.store.list().await {
            Ok(objects) => Ok(objects.into_iter().map(DocumentDto::from).collect()),
            Err(e) => {
                error!(error = %e, "error listing documents");
                Err(ListError::Store)
            }
        }
    }

    /// Remove a document by name, returning a confirmation message.
    pub async fn delete(&self, document_name: &str) -> Result<String, DeleteError> {
        if document_name.is_empty() {
            return Err(DeleteError::MissingName);
        }

        let attempt = async {
            if !self.store.exists(document_name).await? {
                return Ok(None);
            }
            self.store.delete(document_name).await.map(Some)
        };

        match attempt.await {
            Ok(Some(true)) => Ok(format!("Document : {document_name} deleted successfully")),
            Ok(Some(false)) => Err(DeleteError::Failed {
                name: document_name.to_string(),
            }),
            Ok(None) => Err(DeleteError::NotFound),
            Err(e) => {
                error!(error = %e, document = %document_name, "error deleting the document");
                Err(DeleteError::Store {
                    name: document_name.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockObjectStore, ObjectSummary, StoreError, StoredObject};
    use crate::domain::policy::violation;
    use bytes::Bytes;

    const MAX_SIZE: u64 = 5_242_880;

    fn pdf_policy() -> ValidationPolicy {
        ValidationPolicy::new(MAX_SIZE, vec!["application/pdf".to_string()])
    }

    fn gateway(store: MockObjectStore) -> DocumentGateway {
        DocumentGateway::new(pdf_policy(), Arc::new(store))
    }

    fn pdf_upload(file_name: &str) -> UploadDocument {
        UploadDocument {
            file_name: file_name.to_string(),
            content_type: "application/pdf".to_string(),
            content: Bytes::from_static(b"%PDF-1.7 test"),
        }
    }

    fn io_error() -> StoreError {
        StoreError::Io(std::io::Error::other("connection reset"))
    }

    #[tokio::test]
    async fn test_upload_returns_store_location_unchanged() {
        // Arrange
        let mut store = MockObjectStore::new();
        store
            .expect_put()
            .withf(|key, _, content_type| key == "report.pdf" && content_type == "application/pdf")
            .times(1)
            .returning(|_, _, _| Ok("file:///data/documents/documents/objects/report.pdf".to_string()));

        let gateway = gateway(store);

        // Act
        let result = gateway.upload(Some(pdf_upload("report.pdf"))).await;

        // Assert
        assert_eq!(
            result.unwrap(),
            "file:///data/documents/documents/objects/report.pdf"
        );
    }

    #[tokio::test]
    async fn test_upload_strips_path_components_from_store_key() {
        // Arrange
        let mut store = MockObjectStore::new();
        store
            .expect_put()
            .withf(|key, _, _| key == "report.pdf")
            .times(1)
            .returning(|_, _, _| Ok("file:///objects/report.pdf".to_string()));

        let gateway = gateway(store);

        // Act
        let result = gateway.upload(Some(pdf_upload("../secrets/report.pdf"))).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_upload_without_document_fails_validation_before_store() {
        // Arrange: no expectations, the store must not be touched
        let gateway = gateway(MockObjectStore::new());

        // Act
        let result = gateway.upload(None).await;

        // Assert
        let Err(UploadError::Validation(outcome)) = result else {
            panic!("expected validation failure");
        };
        assert!(outcome.contains(violation::NO_DOCUMENT));
        assert_eq!(outcome.violations().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_json_document_rejected_with_only_type_violation() {
        // Arrange
        let gateway = gateway(MockObjectStore::new());
        let document = UploadDocument {
            file_name: "data.json".to_string(),
            content_type: "application/json".to_string(),
            content: Bytes::from_static(b"{}"),
        };

        // Act
        let result = gateway.upload(Some(document)).await;

        // Assert
        let Err(UploadError::Validation(outcome)) = result else {
            panic!("expected validation failure");
        };
        assert!(outcome.contains(violation::INVALID_TYPE));
        assert_eq!(outcome.violations().len(), 1);
    }

    #[tokio::test]
    async fn test_upload_oversized_document_message_embeds_limit() {
        // Arrange
        let gateway = gateway(MockObjectStore::new());
        let document = UploadDocument {
            file_name: "huge.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            content: Bytes::from(vec![0u8; (MAX_SIZE + 1) as usize]),
        };

        // Act
        let result = gateway.upload(Some(document)).await;

        // Assert
        let Err(UploadError::Validation(outcome)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(
            outcome.messages(violation::SIZE_EXCEEDED),
            ["Document size is bigger than maximum allowed document size 5242880"]
        );
    }

    #[tokio::test]
    async fn test_upload_oversized_wrong_type_reports_both_violations() {
        // Arrange
        let gateway = gateway(MockObjectStore::new());
        let document = UploadDocument {
            file_name: "huge.bin".to_string(),
            content_type: "application/octet-stream".to_string(),
            content: Bytes::from(vec![0u8; (MAX_SIZE + 1) as usize]),
        };

        // Act
        let result = gateway.upload(Some(document)).await;

        // Assert
        let Err(UploadError::Validation(outcome)) = result else {
            panic!("expected validation failure");
        };
        assert!(outcome.contains(violation::SIZE_EXCEEDED));
        assert!(outcome.contains(violation::INVALID_TYPE));
    }

    #[tokio::test]
    async fn test_upload_store_failure_message_keeps_original_file_name() {
        // Arrange
        let mut store = MockObjectStore::new();
        store
            .expect_put()
            .times(1)
            .returning(|_, _, _| Err(io_error()));

        let gateway = gateway(store);

        // Act
        let result = gateway.upload(Some(pdf_upload("reports/q1.pdf"))).await;

        // Assert: raw client name, trailing space preserved
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "failed to upload document : reports/q1.pdf ");
    }

    #[tokio::test]
    async fn test_download_empty_name_short_circuits_before_store() {
        // Arrange: no expectations, the store must not be touched
        let gateway = gateway(MockObjectStore::new());

        // Act
        let result = gateway.download("").await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, DownloadError::MissingName));
        assert_eq!(err.to_string(), "Please provide a document name");
    }

    #[tokio::test]
    async fn test_download_missing_document_is_not_found() {
        // Arrange
        let mut store = MockObjectStore::new();
        store
            .expect_exists()
            .withf(|key| key == "ghost.pdf")
            .times(1)
            .returning(|_| Ok(false));

        let gateway = gateway(store);

        // Act
        let result = gateway.download("ghost.pdf").await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, DownloadError::NotFound));
        assert_eq!(err.to_string(), "Requested document Doesn't exist");
    }

    #[tokio::test]
    async fn test_download_returns_content_and_stored_type() {
        // Arrange
        let mut store = MockObjectStore::new();
        store.expect_exists().times(1).returning(|_| Ok(true));
        store.expect_get().withf(|key| key == "report.pdf").times(1).returning(|_| {
            Ok(StoredObject {
                content: Bytes::from_static(b"%PDF-1.7 test"),
                content_type: "application/pdf".to_string(),
            })
        });

        let gateway = gateway(store);

        // Act
        let descriptor = gateway.download("report.pdf").await.unwrap();

        // Assert
        assert_eq!(descriptor.name, "report.pdf");
        assert_eq!(descriptor.content_type, "application/pdf");
        assert_eq!(descriptor.length, Some(13));
        assert_eq!(descriptor.content.unwrap(), Bytes::from_static(b"%PDF-1.7 test"));
    }

    #[tokio::test]
    async fn test_download_exists_failure_uses_download_error_message() {
        // Arrange
        let mut store = MockObjectStore::new();
        store.expect_exists().times(1).returning(|_| Err(io_error()));

        let gateway = gateway(store);

        // Act
        let result = gateway.download("report.pdf").await;

        // Assert: double space preserved
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Error downloading document:  report.pdf");
    }

    #[tokio::test]
    async fn test_list_empty_store_is_success() {
        // Arrange
        let mut store = MockObjectStore::new();
        store.expect_list().times(1).returning(|| Ok(vec![]));

        let gateway = gateway(store);

        // Act
        let documents = gateway.list().await.unwrap();

        // Assert
        assert!(documents.is_empty());
    }

    #[tokio::test]
    async fn test_list_maps_summaries_to_document_metadata() {
        // Arrange
        let mut store = MockObjectStore::new();
        store.expect_list().times(1).returning(|| {
            Ok(vec![
                ObjectSummary {
                    key: "a.pdf".to_string(),
                    content_type: "application/pdf".to_string(),
                    length: 42,
                },
                ObjectSummary {
                    key: "b.pdf".to_string(),
                    content_type: "application/pdf".to_string(),
                    length: 7,
                },
            ])
        });

        let gateway = gateway(store);

        // Act
        let documents = gateway.list().await.unwrap();

        // Assert
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].name, "a.pdf");
        assert_eq!(documents[0].length, 42);
        assert_eq!(documents[1].name, "b.pdf");
    }

    #[tokio::test]
    async fn test_list_store_failure_uses_list_error_message() {
        // Arrange
        let mut store = MockObjectStore::new();
        store.expect_list().times(1).returning(|| Err(io_error()));

        let gateway = gateway(store);

        // Act
        let result = gateway.list().await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "Error getting documents list");
    }

    #[tokio::test]
    async fn test_delete_empty_name_short_circuits_before_store() {
        // Arrange
        let gateway = gateway(MockObjectStore::new());

        // Act
        let result = gateway.delete("").await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, DeleteError::MissingName));
        assert_eq!(err.to_string(), "Document name not provided");
    }

    #[tokio::test]
    async fn test_delete_confirmation_contains_document_name() {
        // Arrange
        let mut store = MockObjectStore::new();
        store.expect_exists().times(1).returning(|_| Ok(true));
        store
            .expect_delete()
            .withf(|key| key == "report.pdf")
            .times(1)
            .returning(|_| Ok(true));

        let gateway = gateway(store);

        // Act
        let message = gateway.delete("report.pdf").await.unwrap();

        // Assert
        assert_eq!(message, "Document : report.pdf deleted successfully");
    }

    #[tokio::test]
    async fn test_delete_store_reporting_false_is_failed_delete() {
        // Arrange: exists says yes but the removal loses the race
        let mut store = MockObjectStore::new();
        store.expect_exists().times(1).returning(|_| Ok(true));
        store.expect_delete().times(1).returning(|_| Ok(false));

        let gateway = gateway(store);

        // Act
        let result = gateway.delete("report.pdf").await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, DeleteError::Failed { .. }));
        assert_eq!(err.to_string(), "Unable to delete document : report.pdf");
    }

    #[tokio::test]
    async fn test_delete_missing_document_skips_delete_call() {
        // Arrange: no delete expectation
        let mut store = MockObjectStore::new();
        store.expect_exists().times(1).returning(|_| Ok(false));

        let gateway = gateway(store);

        // Act
        let result = gateway.delete("ghost.pdf").await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, DeleteError::NotFound));
        assert_eq!(err.to_string(), "Document doesn't exist");
    }

    #[tokio::test]
    async fn test_delete_twice_resolves_second_call_to_not_found() {
        // Arrange: exists flips to false after the first removal, delete runs once
        let mut store = MockObjectStore::new();
        store.expect_exists().times(1).returning(|_| Ok(true));
        store.expect_delete().times(1).returning(|_| Ok(true));
        store.expect_exists().times(1).returning(|_| Ok(false));

        let gateway = gateway(store);

        // Act
        let first = gateway.delete("report.pdf").await;
        let second = gateway.delete("report.pdf").await;

        // Assert
        assert!(first.is_ok());
        assert!(matches!(second.unwrap_err(), DeleteError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_store_failure_uses_delete_error_message() {
        // Arrange
        let mut store = MockObjectStore::new();
        store.expect_exists().times(1).returning(|_| Err(io_error()));

        let gateway = gateway(store);

        // Act
        let result = gateway.delete("report.pdf").await;

        // Assert: trailing space preserved
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "failed to delete document : report.pdf ");
    }
}
