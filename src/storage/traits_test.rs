use super::*;
use async_trait::async_trait;

// A trivial in-memory backend proving the trait is object-safe and
// implementable outside the filesystem store.
struct NullBackend;

#[async_trait]
impl BlobStoreBackend for NullBackend {
    async fn put(&self, _id: &str, _bytes: &[u8], _mime_type: &str) -> Result<(), BlobStoreError> {
        Err(BlobStoreError::Unsupported("null backend".to_string()))
    }

    async fn get(&self, _id: &str) -> Result<Option<BlobEntry>, BlobStoreError> {
        Ok(None)
    }

    async fn delete(&self, _id: &str) -> Result<(), BlobStoreError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_trait_is_object_safe() {
    let backend: Box<dyn BlobStoreBackend> = Box::new(NullBackend);

    assert!(backend.get("x").await.unwrap().is_none());
    assert!(backend.put("x", &[1], "audio/webm").await.is_err());
    backend.delete("x").await.unwrap();
}

#[test]
fn test_error_display() {
    assert_eq!(
        BlobStoreError::Unsupported("no disk".to_string()).to_string(),
        "Blob store unsupported: no disk"
    );
    assert_eq!(
        BlobStoreError::Write("full".to_string()).to_string(),
        "Blob write failed: full"
    );
}
