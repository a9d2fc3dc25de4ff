//! Audio clip value object

use crate::domain::error::UploadError;

/// MIME type attached to every clip sent to the model.
/// Uploads are constrained to M4A by convention only; no container
/// sniffing is performed.
pub const AUDIO_MIME_TYPE: &str = "audio/x-m4a";

/// Value object representing one uploaded audio clip.
#[derive(Debug, Clone)]
pub struct AudioClip {
    data: Vec<u8>,
}

impl AudioClip {
    /// Create a clip from raw bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Get the raw audio bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get the size in megabytes
    pub fn size_mb(&self) -> f64 {
        self.data.len() as f64 / (1024.0 * 1024.0)
    }

    /// Validate the clip against the configured size cap.
    /// Empty clips are rejected outright.
    pub fn validate(&self, max_mb: u64) -> Result<(), UploadError> {
        if self.data.is_empty() {
            return Err(UploadError::Empty);
        }
        if self.size_mb() > max_mb as f64 {
            return Err(UploadError::TooLarge {
                size_mb: self.size_mb(),
                max_mb,
            });
        }
        Ok(())
    }

    /// Encode the audio data as base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}
