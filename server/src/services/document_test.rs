use super::*;

use crate::state::test_helpers::test_pool;

struct FailingStore;

#[async_trait::async_trait]
impl ObjectStore for FailingStore {
    async fn upload(&self, _key: &str, _bytes: Vec<u8>, _content_type: &str) -> Result<(), StorageError> {
        Err(StorageError::UpstreamStatus(500))
    }

    fn public_url(&self, key: &str) -> String {
        format!("http://storage.test/object/public/documents/{key}")
    }
}

#[test]
fn sanitize_filename_keeps_safe_characters() {
    assert_eq!(sanitize_filename("Q3-report_v2.pdf"), "Q3-report_v2.pdf");
}

#[test]
fn sanitize_filename_replaces_unsafe_characters() {
    assert_eq!(sanitize_filename("client notes (final).pdf"), "client_notes__final_.pdf");
}

#[test]
fn sanitize_filename_handles_empty_input() {
    assert_eq!(sanitize_filename(""), "file");
}

#[test]
fn object_key_is_prefixed_and_unique() {
    let a = object_key("report.pdf");
    let b = object_key("report.pdf");
    assert!(a.starts_with("documents/"));
    assert!(a.ends_with("-report.pdf"));
    assert_ne!(a, b);
}

#[tokio::test]
async fn upload_without_storage_is_rejected() {
    let pool = test_pool();
    let result =
        upload_document(&pool, None, None, "report.pdf", "application/pdf", vec![1, 2, 3]).await;
    assert!(matches!(result, Err(UploadError::StorageUnavailable)));
}

#[tokio::test]
async fn upload_aborts_when_object_write_fails() {
    let pool = test_pool();
    let storage: Arc<dyn ObjectStore> = Arc::new(FailingStore);
    let result = upload_document(
        &pool,
        Some(&storage),
        None,
        "report.pdf",
        "application/pdf",
        vec![1, 2, 3],
    )
    .await;
    assert!(matches!(result, Err(UploadError::Storage(StorageError::UpstreamStatus(500)))));
}
