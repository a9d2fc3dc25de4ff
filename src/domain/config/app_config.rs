//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Default cap on generated output tokens
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 512;

/// Default response MIME type requested from the model
pub const DEFAULT_RESPONSE_MIME_TYPE: &str = "text/plain";

/// Default maximum upload size in megabytes
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 25;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
/// The on-disk format is JSON; `MAX_FILE_SIZE_MB` keeps its legacy
/// upper-case key name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(rename = "MAX_FILE_SIZE_MB", skip_serializing_if = "Option::is_none")]
    pub max_file_size_mb: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            model_name: Some(DEFAULT_MODEL.to_string()),
            temperature: Some(DEFAULT_TEMPERATURE),
            max_output_tokens: Some(DEFAULT_MAX_OUTPUT_TOKENS),
            response_mime_type: Some(DEFAULT_RESPONSE_MIME_TYPE.to_string()),
            max_file_size_mb: Some(DEFAULT_MAX_FILE_SIZE_MB),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            model_name: other.model_name.or(self.model_name),
            temperature: other.temperature.or(self.temperature),
            max_output_tokens: other.max_output_tokens.or(self.max_output_tokens),
            response_mime_type: other.response_mime_type.or(self.response_mime_type),
            max_file_size_mb: other.max_file_size_mb.or(self.max_file_size_mb),
        }
    }

    /// Get the model identifier, or the default if not set
    pub fn model_or_default(&self) -> &str {
        self.model_name.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get the sampling temperature, or the default if not set
    pub fn temperature_or_default(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Get the output token cap, or the default if not set
    pub fn max_output_tokens_or_default(&self) -> u32 {
        self.max_output_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS)
    }

    /// Get the response MIME type, or the default if not set
    pub fn response_mime_type_or_default(&self) -> &str {
        self.response_mime_type
            .as_deref()
            .unwrap_or(DEFAULT_RESPONSE_MIME_TYPE)
    }

    /// Get the upload size cap in MB, or the default if not set
    pub fn max_file_size_mb_or_default(&self) -> u64 {
        self.max_file_size_mb.unwrap_or(DEFAULT_MAX_FILE_SIZE_MB)
    }
}
