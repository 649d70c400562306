// Three-tier audio resolution for stored memo records.
//
// A record's bytes may live in the blob store (current policy), inline on
// the record (fallback policy), or in the legacy direct-object column
// (v1 policy). Hydration tries the tiers in that fixed order and reports
// which one answered, so records written under any historical save policy
// load without migration.

use crate::db::MemoRecord;

/// Where a record's audio bytes were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// Bytes fetched from the blob store.
    External(Vec<u8>),
    /// Fallback bytes stored inline on the metadata record.
    Inline(Vec<u8>),
    /// Bytes from the v1 direct-object column.
    Legacy(Vec<u8>),
}

impl AudioSource {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            AudioSource::External(bytes)
            | AudioSource::Inline(bytes)
            | AudioSource::Legacy(bytes) => bytes,
        }
    }

    /// Tier name for log messages.
    pub fn tier(&self) -> &'static str {
        match self {
            AudioSource::External(_) => "blob store",
            AudioSource::Inline(_) => "inline",
            AudioSource::Legacy(_) => "legacy",
        }
    }
}

/// Resolve a record's audio bytes, trying each storage tier in priority
/// order and stopping at the first tier holding non-empty bytes.
///
/// Returns None when no tier can supply bytes; such a record is
/// unrecoverable and must be dropped from load results, never surfaced
/// with an empty payload.
pub fn resolve_audio(record: &MemoRecord, external: Option<Vec<u8>>) -> Option<AudioSource> {
    if let Some(bytes) = external {
        if !bytes.is_empty() {
            return Some(AudioSource::External(bytes));
        }
    }

    if let Some(bytes) = &record.inline_audio {
        if !bytes.is_empty() {
            return Some(AudioSource::Inline(bytes.clone()));
        }
    }

    if let Some(bytes) = &record.legacy_audio {
        if !bytes.is_empty() {
            return Some(AudioSource::Legacy(bytes.clone()));
        }
    }

    None
}

#[cfg(test)]
#[path = "hydrate_test.rs"]
mod tests;
