//! Domain error types

use thiserror::Error;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}

/// Error when accessing the persisted credential store
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Failed to read credential store: {0}")]
    ReadError(String),

    #[error("Failed to write credential store: {0}")]
    WriteError(String),

    #[error("Failed to delete credential store: {0}")]
    DeleteError(String),
}

/// Error when validating an uploaded audio clip
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    #[error("File too large ({size_mb:.1} MB). Please upload a file smaller than {max_mb} MB.")]
    TooLarge { size_mb: f64, max_mb: u64 },

    #[error("Audio file is empty")]
    Empty,

    #[error("Failed to read audio file: {0}")]
    ReadError(String),
}
