//! Transcription domain module

mod audio_clip;
mod prompt;

pub use audio_clip::{AudioClip, AUDIO_MIME_TYPE};
pub use prompt::InstructionPrompt;
