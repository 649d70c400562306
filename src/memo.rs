// In-memory data model for voice memos.
//
// A Memo is what the UI layer holds: metadata plus the encoded audio and a
// session-scoped playable handle. Only the metadata and audio bytes are ever
// persisted; handles are re-minted on every load.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

/// Encoded audio payload with its container/codec identifier.
///
/// This is the opaque audio object handed over by the recording layer. The
/// bytes are shared, not copied, when clips are cloned or handles are minted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    bytes: Arc<[u8]>,
    mime_type: String,
}

impl AudioClip {
    /// Create a clip from encoded audio bytes and a mime type
    /// (e.g. "audio/webm" or "audio/mp4").
    pub fn new(bytes: impl Into<Arc<[u8]>>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared reference to the underlying bytes.
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        self.bytes.clone()
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// True when the clip holds no audio data. An empty clip cannot be
    /// persisted or played; it typically means the source stream was
    /// consumed or invalidated before hand-off.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Session-scoped reference the playback UI uses to address audio bytes.
///
/// Handles are minted fresh on every load and at recording time; they are
/// deliberately not serializable and must never be written to storage. A
/// handle from a previous session is invalid by construction.
#[derive(Debug, Clone)]
pub struct PlayableHandle {
    uri: String,
    bytes: Arc<[u8]>,
    mime_type: String,
}

impl PlayableHandle {
    /// Mint a fresh handle over the given bytes.
    ///
    /// The URI embeds a random session token, so two mints for the same memo
    /// never compare equal across loads.
    pub fn mint(memo_id: &str, bytes: Arc<[u8]>, mime_type: &str) -> Self {
        let token = Uuid::new_v4();
        Self {
            uri: format!("memo://{}/{}", token, memo_id),
            bytes,
            mime_type: mime_type.to_string(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// One user recording: metadata, encoded audio, and a playable handle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    /// Unique identifier, stable for the memo's lifetime.
    pub id: String,
    /// Human-editable title. The only field mutable after creation.
    pub title: String,
    /// Recording length in seconds, from elapsed wall-clock time.
    pub duration_secs: f64,
    /// Creation timestamp in epoch milliseconds. Never mutated; primary
    /// sort key (newest first).
    pub created_at: i64,
    /// Encoded audio. Owned by the persistence layer, never serialized
    /// to the UI boundary.
    #[serde(skip)]
    pub audio: AudioClip,
    /// Session-scoped playback reference. Never serialized or persisted.
    #[serde(skip)]
    pub handle: PlayableHandle,
}

impl Memo {
    /// Create a new memo from a finished recording.
    ///
    /// Stamps a UUID v4 id and the current epoch-millisecond timestamp, and
    /// mints a playable handle for the current session.
    pub fn new(title: impl Into<String>, duration_secs: f64, audio: AudioClip) -> Self {
        let id = Uuid::new_v4().to_string();
        let handle = PlayableHandle::mint(&id, audio.shared_bytes(), audio.mime_type());
        Self {
            id,
            title: title.into(),
            duration_secs,
            created_at: chrono::Utc::now().timestamp_millis(),
            audio,
            handle,
        }
    }

    pub fn mime_type(&self) -> &str {
        self.audio.mime_type()
    }
}

/// Default title for the Nth new recording, given how many memos exist.
pub fn default_title(existing_count: usize) -> String {
    format!("New Recording {}", existing_count + 1)
}

/// Format a duration in seconds as "MM:SS".
///
/// Non-finite or negative inputs render as "00:00".
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }
    let total = seconds as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
#[path = "memo_test.rs"]
mod tests;
