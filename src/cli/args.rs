//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::config::AppConfig;

/// TeluguScribe - Telugu audio to English text converter
#[derive(Parser, Debug)]
#[command(name = "telugu-scribe")]
#[command(version)]
#[command(about = "Convert Telugu audio into English text using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to the audio file to transcribe (M4A format)
    #[arg(value_name = "AUDIO_FILE")]
    pub audio_file: Option<PathBuf>,

    /// File the transcription is written to
    #[arg(short = 'o', long, value_name = "FILE", default_value = "output.txt")]
    pub output: PathBuf,

    /// API key for this run only (not persisted)
    #[arg(
        long,
        value_name = "KEY",
        env = "GENAI_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Path to a JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to a plain-text instruction prompt file
    #[arg(long, value_name = "PATH")]
    pub prompt_file: Option<PathBuf>,

    /// Model identifier
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(long, value_name = "FLOAT")]
    pub temperature: Option<f64>,

    /// Maximum output tokens
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Maximum upload size in megabytes
    #[arg(long, value_name = "MB")]
    pub max_size_mb: Option<u64>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Build a partial config from the generation-related flags
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            model_name: self.model.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_tokens,
            response_mime_type: None,
            max_file_size_mb: self.max_size_mb,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigCmdAction,
    },
    /// Clear the session and remove the stored API key
    Reset,
}

/// API key actions
#[derive(Subcommand, Debug)]
pub enum KeyAction {
    /// Store an API key for future runs
    Set {
        /// The API key value
        key: String,
    },
    /// Show the stored API key (masked)
    Show,
    /// Show the key store path
    Path,
}

/// Config inspection actions
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCmdAction {
    /// Show the effective configuration
    Show,
    /// Show the config file path
    Path,
}
