//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod credentials;
pub mod transcriber;

// Re-export common types
pub use config::ConfigStore;
pub use credentials::CredentialStore;
pub use transcriber::{Transcriber, TranscriptionError};
