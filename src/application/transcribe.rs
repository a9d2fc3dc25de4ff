//! Transcribe clip use case

use thiserror::Error;

use crate::domain::config::AppConfig;
use crate::domain::error::UploadError;
use crate::domain::session::Session;
use crate::domain::transcription::{AudioClip, InstructionPrompt};

use super::ports::{Transcriber, TranscriptionError};

/// Errors from the transcribe use case
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("Error during transcription: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("Missing API key. Run 'telugu-scribe key set <key>' or pass --api-key")]
    MissingApiKey,
}

/// Input parameters for the transcribe use case
#[derive(Debug, Clone)]
pub struct TranscribeInput {
    /// The uploaded audio clip
    pub clip: AudioClip,
    /// Instruction text sent with the clip
    pub prompt: InstructionPrompt,
    /// Effective configuration (merged from defaults, file, and CLI)
    pub config: AppConfig,
}

/// Output from the transcribe use case
#[derive(Debug, Clone)]
pub struct TranscribeOutput {
    /// The transcribed text, verbatim
    pub text: String,
    /// Size of the uploaded clip in bytes
    pub audio_size_bytes: usize,
}

/// Callbacks for status updates
#[derive(Default)]
pub struct TranscribeCallbacks {
    /// Called when the remote call starts
    pub on_transcribing_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the remote call ends
    pub on_transcribing_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// One-shot transcription use case.
///
/// Gates the remote call on a ready credential and a validated upload;
/// every failure is terminal for the run.
pub struct TranscribeClipUseCase<T>
where
    T: Transcriber,
{
    transcriber: T,
}

impl<T> TranscribeClipUseCase<T>
where
    T: Transcriber,
{
    /// Create a new use case instance
    pub fn new(transcriber: T) -> Self {
        Self { transcriber }
    }

    /// Execute the transcription workflow
    pub async fn execute(
        &self,
        session: &mut Session,
        input: TranscribeInput,
        callbacks: TranscribeCallbacks,
    ) -> Result<TranscribeOutput, TranscribeError> {
        // No credential, no remote call
        if !session.ready || session.api_key.is_none() {
            return Err(TranscribeError::MissingApiKey);
        }

        // Validate before any encoding; oversize and empty clips abort here
        input
            .clip
            .validate(input.config.max_file_size_mb_or_default())?;

        let audio_size_bytes = input.clip.size_bytes();
        let audio_b64 = input.clip.to_base64();
        session.set_audio_payload(audio_b64.clone());

        if let Some(ref cb) = callbacks.on_transcribing_start {
            cb();
        }

        let result = self
            .transcriber
            .transcribe(&audio_b64, &input.prompt, &input.config)
            .await;

        if let Some(ref cb) = callbacks.on_transcribing_end {
            cb();
        }

        let text = result?;

        Ok(TranscribeOutput {
            text,
            audio_size_bytes,
        })
    }
}
