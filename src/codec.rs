// BlobCodec - converts between an opaque audio clip and a plain byte buffer.
//
// The metadata database cannot hold rich binary-object types, so clips are
// flattened to byte sequences before inline storage and reconstituted (tagged
// with their mime type) on the way back out. Both directions are pure.

use crate::memo::AudioClip;

/// Error converting an audio clip to storable bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The source clip holds no readable data, typically because the
    /// underlying recording stream was consumed or invalidated.
    #[error("Audio source could not be read: {0}")]
    UnreadableSource(String),
}

/// Stateless codec between `AudioClip` and raw bytes.
pub struct BlobCodec;

impl BlobCodec {
    /// Flatten a clip to a byte buffer for inline storage.
    ///
    /// Fails with `CodecError::UnreadableSource` when the clip is empty;
    /// an empty payload would hydrate as an unplayable memo.
    pub fn to_bytes(clip: &AudioClip) -> Result<Vec<u8>, CodecError> {
        if clip.is_empty() {
            return Err(CodecError::UnreadableSource(
                "clip contains no audio data".to_string(),
            ));
        }
        Ok(clip.bytes().to_vec())
    }

    /// Reconstitute a clip from stored bytes, tagging it with the mime type
    /// so playback can select the correct decoder. Never fails.
    pub fn from_bytes(bytes: Vec<u8>, mime_type: &str) -> AudioClip {
        AudioClip::new(bytes, mime_type)
    }
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
