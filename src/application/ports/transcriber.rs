//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::config::AppConfig;
use crate::domain::transcription::InstructionPrompt;

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe a base64-encoded audio payload to text.
    ///
    /// # Arguments
    /// * `audio_b64` - Base64-encoded audio bytes
    /// * `prompt` - The instruction sent alongside the audio
    /// * `config` - Generation parameters (model, temperature, token cap,
    ///   response MIME type)
    ///
    /// # Returns
    /// The transcribed text or an error
    async fn transcribe(
        &self,
        audio_b64: &str,
        prompt: &InstructionPrompt,
        config: &AppConfig,
    ) -> Result<String, TranscriptionError>;
}
