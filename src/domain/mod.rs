//! Domain layer - Core business logic
//!
//! Contains value objects, the session context, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod session;
pub mod transcription;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use session::Session;
pub use transcription::{AudioClip, InstructionPrompt, AUDIO_MIME_TYPE};
