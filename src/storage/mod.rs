//! Storage facade for voice memos.
//!
//! This module orchestrates the two storage tiers: a file-backed blob store
//! for raw audio (preferred, best-effort) and the libsql metadata store
//! (authoritative). `MemoLibrary` is the only type the rest of the app talks
//! to; it implements the save-time fallback policy and the three-tier
//! hydration policy on load.
//!
//! ## Usage
//!
//! ```ignore
//! use memovault::{MemoLibrary, StorageConfig};
//!
//! let library = MemoLibrary::init(&StorageConfig::default()).await?;
//! library.save(&memo).await?;
//! let memos = library.get_all().await?; // newest first
//! ```

mod blobs;
mod hydrate;
mod library;
mod traits;

pub use blobs::FsBlobStore;
pub use hydrate::{resolve_audio, AudioSource};
pub use library::{LibraryError, MemoLibrary};
pub use traits::{BlobEntry, BlobStoreBackend, BlobStoreError};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
