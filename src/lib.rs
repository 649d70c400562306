// memovault - local persistence and hydration core for a voice-memo recorder.
//
// The UI layer records audio and builds an in-memory Memo; this crate owns
// getting that memo onto disk and back. Audio bytes live preferentially in a
// file-backed blob store, falling back to inline storage in the metadata
// database when the blob tier is unavailable. Loading reconstructs memos with
// fresh session-scoped playable handles.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod codec;
pub mod config;
pub mod db;
pub mod memo;
pub mod paths;
pub mod storage;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use codec::{BlobCodec, CodecError};
pub use config::StorageConfig;
pub use memo::{AudioClip, Memo, PlayableHandle};
pub use storage::{FsBlobStore, LibraryError, MemoLibrary};
