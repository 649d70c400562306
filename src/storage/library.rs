// MemoLibrary - the persistence facade the rest of the app talks to.
//
// Orchestrates the blob store (preferred tier, best-effort) and the libsql
// metadata store (authoritative) behind four operations: init, save,
// get_all, delete. Every operation opens a fresh scoped database connection
// and releases it on every exit path; no connection state is shared between
// concurrent calls.

use std::path::PathBuf;
use std::sync::Arc;

use crate::codec::{BlobCodec, CodecError};
use crate::config::StorageConfig;
use crate::db::{initialize_schema, DbClient, DbError, MemoRecord};
use crate::memo::{Memo, PlayableHandle};

use super::blobs::FsBlobStore;
use super::hydrate::{resolve_audio, AudioSource};
use super::traits::BlobStoreBackend;

/// Errors surfaced by the memo library.
///
/// Blob-tier failures never appear here; they are recovered internally via
/// the inline fallback (writes) or the next hydration tier (reads).
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// The metadata store could not be opened at all. Callers should
    /// degrade to an empty, session-only library rather than crash.
    #[error("Failed to open memo library: {0}")]
    Init(String),
    /// The final metadata write failed; the memo was not made durable.
    /// Callers should keep the memo in session state and warn the user.
    #[error("Failed to persist memo: {0}")]
    Save(String),
    #[error("Failed to load memos: {0}")]
    Load(String),
    #[error("Failed to delete memo: {0}")]
    Delete(String),
    /// The source audio could not be read; nothing was written.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// The persistence facade for voice memos.
///
/// Once constructed via `init` the library stays ready for the rest of the
/// process lifetime; there is no close operation.
pub struct MemoLibrary {
    db_path: PathBuf,
    blobs: Option<Arc<dyn BlobStoreBackend>>,
}

impl MemoLibrary {
    /// Open the library described by `config`.
    ///
    /// The blob tier is optional: if its directory cannot be created the
    /// library runs with inline-only storage. The metadata store is not
    /// optional; failure to open or migrate it is an `Init` error.
    pub async fn init(config: &StorageConfig) -> Result<Self, LibraryError> {
        let data_dir = config
            .resolved_data_dir()
            .map_err(|e| LibraryError::Init(e.to_string()))?;
        // Best-effort: a failure here will surface from the database open
        // below if it actually matters.
        if let Err(e) = std::fs::create_dir_all(&data_dir) {
            crate::warn!("Could not create data dir {:?}: {}", data_dir, e);
        }

        let blob_dir = config
            .blob_dir_path()
            .map_err(|e| LibraryError::Init(e.to_string()))?;
        let blobs: Option<Arc<dyn BlobStoreBackend>> = match FsBlobStore::open(&blob_dir) {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                crate::warn!("Blob store unavailable, using inline storage only: {}", e);
                None
            }
        };

        let db_path = config
            .db_path()
            .map_err(|e| LibraryError::Init(e.to_string()))?;
        Self::init_with_backend(db_path, blobs).await
    }

    /// Open the library with an explicit blob backend (or none).
    ///
    /// This is the seam used to exercise the fallback policy against
    /// failing or absent backends.
    pub async fn init_with_backend(
        db_path: PathBuf,
        blobs: Option<Arc<dyn BlobStoreBackend>>,
    ) -> Result<Self, LibraryError> {
        let client = DbClient::open(&db_path)
            .await
            .map_err(|e| LibraryError::Init(e.to_string()))?;
        initialize_schema(&client)
            .await
            .map_err(|e| LibraryError::Init(e.to_string()))?;

        crate::debug!("Memo library ready at {:?}", db_path);
        Ok(Self { db_path, blobs })
    }

    /// Fresh scoped connection for one operation.
    async fn client(&self) -> Result<DbClient, DbError> {
        DbClient::open(&self.db_path).await
    }

    /// Persist a memo. Upserts by id: saving an existing id overwrites all
    /// fields of that record.
    ///
    /// Audio bytes go to the blob store when possible; when that tier is
    /// absent or fails, they are encoded inline on the metadata record
    /// instead. Only the final metadata write can fail this operation.
    pub async fn save(&self, memo: &Memo) -> Result<(), LibraryError> {
        // An empty clip can never hydrate; refuse before touching any store.
        if memo.audio.is_empty() {
            return Err(CodecError::UnreadableSource(
                "clip contains no audio data".to_string(),
            )
            .into());
        }

        let stored_external = match &self.blobs {
            Some(store) => match store
                .put(&memo.id, memo.audio.bytes(), memo.mime_type())
                .await
            {
                Ok(()) => true,
                Err(e) => {
                    crate::warn!(
                        "Blob write failed for memo {}, falling back to inline storage: {}",
                        memo.id,
                        e
                    );
                    false
                }
            },
            None => false,
        };

        let inline_audio = if stored_external {
            None
        } else {
            Some(BlobCodec::to_bytes(&memo.audio)?)
        };

        let record = MemoRecord {
            id: memo.id.clone(),
            title: memo.title.clone(),
            duration_secs: memo.duration_secs,
            created_at: memo.created_at,
            mime_type: memo.mime_type().to_string(),
            inline_audio,
            legacy_audio: None,
        };

        let client = self
            .client()
            .await
            .map_err(|e| LibraryError::Save(e.to_string()))?;
        client
            .upsert_memo(&record)
            .await
            .map_err(|e| LibraryError::Save(e.to_string()))?;

        crate::debug!("Memo {} saved ({} tier)", memo.id, if stored_external { "blob" } else { "inline" });
        Ok(())
    }

    /// Load every recoverable memo, newest first.
    ///
    /// Each record's audio is resolved through the storage tiers in priority
    /// order; records with no recoverable bytes are dropped, never returned
    /// with an empty handle. Every returned memo carries a freshly minted
    /// session-scoped handle.
    pub async fn get_all(&self) -> Result<Vec<Memo>, LibraryError> {
        let client = self
            .client()
            .await
            .map_err(|e| LibraryError::Load(e.to_string()))?;
        let records = client
            .list_memo_records()
            .await
            .map_err(|e| LibraryError::Load(e.to_string()))?;

        let mut memos = Vec::with_capacity(records.len());
        for record in records {
            if let Some(memo) = self.hydrate(record).await {
                memos.push(memo);
            }
        }

        // The store gives no ordering guarantee; newest first is imposed here.
        memos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(memos)
    }

    /// Reconstruct one memo from its stored record, or None when no tier
    /// holds its audio.
    async fn hydrate(&self, record: MemoRecord) -> Option<Memo> {
        let mut external_mime = None;
        let external_bytes = match &self.blobs {
            Some(store) => match store.get(&record.id).await {
                Ok(Some(entry)) => {
                    external_mime = entry.mime_type;
                    Some(entry.bytes)
                }
                Ok(None) => None,
                Err(e) => {
                    crate::warn!("Blob read failed for memo {}: {}", record.id, e);
                    None
                }
            },
            None => None,
        };

        let source = match resolve_audio(&record, external_bytes) {
            Some(source) => source,
            None => {
                crate::warn!("Dropping memo {} - no recoverable audio in any tier", record.id);
                return None;
            }
        };
        crate::debug!("Hydrated memo {} from {} tier", record.id, source.tier());

        // The sidecar mime wins only for blob-tier bytes; inline and legacy
        // bytes were written under the record's own mime type.
        let mime_type = match &source {
            AudioSource::External(_) => external_mime.unwrap_or_else(|| record.mime_type.clone()),
            _ => record.mime_type.clone(),
        };

        let audio = BlobCodec::from_bytes(source.into_bytes(), &mime_type);
        let handle = PlayableHandle::mint(&record.id, audio.shared_bytes(), audio.mime_type());

        Some(Memo {
            id: record.id,
            title: record.title,
            duration_secs: record.duration_secs,
            created_at: record.created_at,
            audio,
            handle,
        })
    }

    /// Delete a memo from both tiers.
    ///
    /// The blob-store removal is best-effort: an orphaned blob is acceptable
    /// garbage, but a metadata record pointing at deleted audio is not, so
    /// only the metadata removal decides success. Deleting an absent id is
    /// a no-op.
    pub async fn delete(&self, id: &str) -> Result<(), LibraryError> {
        if let Some(store) = &self.blobs {
            if let Err(e) = store.delete(id).await {
                crate::warn!("Blob delete failed for memo {} (continuing): {}", id, e);
            }
        }

        let client = self
            .client()
            .await
            .map_err(|e| LibraryError::Delete(e.to_string()))?;
        client
            .delete_memo(id)
            .await
            .map_err(|e| LibraryError::Delete(e.to_string()))?;

        crate::debug!("Memo {} deleted", id);
        Ok(())
    }

    /// Update a memo's title, the only field mutable after creation.
    ///
    /// Renaming an id that no longer exists is logged and ignored; the
    /// caller's list is simply stale.
    pub async fn rename(&self, id: &str, title: &str) -> Result<(), LibraryError> {
        let client = self
            .client()
            .await
            .map_err(|e| LibraryError::Save(e.to_string()))?;
        let renamed = client
            .rename_memo(id, title)
            .await
            .map_err(|e| LibraryError::Save(e.to_string()))?;

        if !renamed {
            crate::warn!("Rename of unknown memo {} ignored", id);
        }
        Ok(())
    }

    /// Number of persisted memos, for default-title generation.
    pub async fn count(&self) -> Result<u64, LibraryError> {
        let client = self
            .client()
            .await
            .map_err(|e| LibraryError::Load(e.to_string()))?;
        client
            .count_memos()
            .await
            .map_err(|e| LibraryError::Load(e.to_string()))
    }
}

#[cfg(test)]
#[path = "library_test.rs"]
mod tests;
