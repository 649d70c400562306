// File-backed blob store for raw audio payloads.
//
// Each memo id maps to two files under the store directory: `<id>.bin` with
// the encoded audio and `<id>.mime` with its mime type (the stored analog of
// a resource's content type). Writes go through a temp file + rename so a
// crash mid-write never leaves a torn payload behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::traits::{BlobEntry, BlobStoreBackend, BlobStoreError};

/// Filesystem implementation of the audio blob tier.
pub struct FsBlobStore {
    dir: PathBuf,
}

impl FsBlobStore {
    /// Open the blob store rooted at `dir`, creating it on first use.
    ///
    /// Fails with `BlobStoreError::Unsupported` when the directory cannot
    /// be created; callers treat that as "no blob tier", not as fatal.
    pub fn open(dir: &Path) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(dir).map_err(|e| {
            BlobStoreError::Unsupported(format!("cannot create {}: {}", dir.display(), e))
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn payload_path(&self, id: &str) -> PathBuf {
        // Ids are UUIDs (or digit strings from older sessions), so they are
        // safe as file name stems.
        self.dir.join(format!("{}.bin", id))
    }

    fn mime_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.mime", id))
    }
}

#[async_trait]
impl BlobStoreBackend for FsBlobStore {
    async fn put(&self, id: &str, bytes: &[u8], mime_type: &str) -> Result<(), BlobStoreError> {
        let payload_path = self.payload_path(id);
        let temp_path = payload_path.with_extension("bin.tmp");

        // Write payload to temp file with explicit sync, then rename
        {
            let mut file = tokio::fs::File::create(&temp_path).await.map_err(|e| {
                BlobStoreError::Write(format!("Failed to create temp file: {}", e))
            })?;
            file.write_all(bytes)
                .await
                .map_err(|e| BlobStoreError::Write(format!("Failed to write: {}", e)))?;
            file.sync_all()
                .await
                .map_err(|e| BlobStoreError::Write(format!("Failed to sync: {}", e)))?;
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &payload_path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(BlobStoreError::Write(format!("Failed to rename: {}", e)));
        }

        tokio::fs::write(self.mime_path(id), mime_type.as_bytes())
            .await
            .map_err(|e| BlobStoreError::Write(format!("Failed to write mime type: {}", e)))?;

        crate::debug!("Stored blob for memo {} ({} bytes)", id, bytes.len());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<BlobEntry>, BlobStoreError> {
        let bytes = match tokio::fs::read(self.payload_path(id)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BlobStoreError::Io(e.to_string())),
        };

        // The sidecar is optional; entries written before it existed hydrate
        // with the mime type from the metadata row instead.
        let mime_type = match tokio::fs::read_to_string(self.mime_path(id)).await {
            Ok(mime) if !mime.is_empty() => Some(mime),
            _ => None,
        };

        Ok(Some(BlobEntry { bytes, mime_type }))
    }

    async fn delete(&self, id: &str) -> Result<(), BlobStoreError> {
        for path in [self.payload_path(id), self.mime_path(id)] {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(BlobStoreError::Io(e.to_string())),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "blobs_test.rs"]
mod tests;
