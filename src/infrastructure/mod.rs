//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the Gemini API and the local filesystem.

pub mod config;
pub mod credentials;
pub mod transcription;

// Re-export adapters
pub use config::JsonConfigStore;
pub use credentials::FileCredentialStore;
pub use transcription::GeminiTranscriber;
