//! Storage backend trait for the audio blob tier.
//!
//! The trait decouples the facade from the filesystem implementation so the
//! fallback policy can be exercised against absent or failing backends.

use async_trait::async_trait;

/// Errors from the blob store tier.
///
/// Every variant is recoverable from the facade's point of view: a failing
/// blob write triggers the inline fallback, a failing read falls through to
/// the next hydration tier, and a failing delete leaves acceptable garbage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlobStoreError {
    /// The platform has no usable blob storage facility. Soft failure;
    /// the facade runs without this tier.
    #[error("Blob store unsupported: {0}")]
    Unsupported(String),
    /// A write did not complete.
    #[error("Blob write failed: {0}")]
    Write(String),
    /// A read or delete hit an I/O error other than "not found".
    #[error("Blob store I/O error: {0}")]
    Io(String),
}

/// One stored blob: raw audio bytes plus the mime type recorded with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobEntry {
    pub bytes: Vec<u8>,
    /// Mime type stored alongside the payload. Absent for entries written
    /// before the sidecar existed; callers fall back to the metadata row.
    pub mime_type: Option<String>,
}

/// Backend trait for audio blob storage operations.
///
/// Implementations of this trait provide best-effort persistence of raw
/// audio bytes keyed by memo id. The primary implementation is FsBlobStore.
#[async_trait]
pub trait BlobStoreBackend: Send + Sync {
    /// Store or overwrite the blob for this memo id.
    async fn put(&self, id: &str, bytes: &[u8], mime_type: &str) -> Result<(), BlobStoreError>;

    /// Fetch the blob for this memo id. A missing key is `Ok(None)`,
    /// never an error.
    async fn get(&self, id: &str) -> Result<Option<BlobEntry>, BlobStoreError>;

    /// Remove the blob for this memo id. Removing an absent key is a no-op.
    async fn delete(&self, id: &str) -> Result<(), BlobStoreError>;
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
