//! Main app runner for the one-shot transcription flow

use std::path::Path;
use std::process::ExitCode;

use tokio::fs;

use crate::application::ports::{ConfigStore, CredentialStore};
use crate::application::{TranscribeCallbacks, TranscribeClipUseCase, TranscribeInput};
use crate::domain::config::AppConfig;
use crate::domain::error::UploadError;
use crate::domain::session::Session;
use crate::domain::transcription::{AudioClip, InstructionPrompt};
use crate::infrastructure::{FileCredentialStore, GeminiTranscriber, JsonConfigStore};

use super::args::Cli;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the one-shot transcription
pub async fn run_transcribe(cli: Cli) -> ExitCode {
    let presenter = Presenter::new();

    let Some(audio_path) = cli.audio_file.clone() else {
        presenter.error("No audio file given. Usage: telugu-scribe <AUDIO_FILE>");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    // Session context for this run
    let mut session = Session::new();

    // Resolve credential: session value first, then the persisted store
    let store = FileCredentialStore::new();
    resolve_credential(&mut session, cli.api_key.clone(), &store, &presenter).await;

    if !session.ready {
        presenter.warn("Please enter your GenAI API key to use the service.");
        presenter.error(
            "Missing API key. Run 'telugu-scribe key set <key>' or pass --api-key",
        );
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    // Merge config: defaults < file < cli
    let config_store = match cli.config.as_ref() {
        Some(path) => JsonConfigStore::with_path(path),
        None => JsonConfigStore::new(),
    };
    let config = load_merged_config(cli.to_config(), &config_store, &presenter).await;

    // Load the instruction prompt
    let prompt = load_prompt(cli.prompt_file.as_deref()).await;

    // Read the upload
    let clip = match fs::read(&audio_path).await {
        Ok(bytes) => AudioClip::new(bytes),
        Err(e) => {
            let err = UploadError::ReadError(format!("'{}': {}", audio_path.display(), e));
            presenter.error(&err.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // api_key is present because session.ready was checked above
    let api_key = session.api_key.clone().unwrap_or_default();
    let transcriber = match std::env::var("GENAI_API_BASE_URL") {
        Ok(base) if !base.is_empty() => GeminiTranscriber::with_base_url(api_key, base),
        _ => GeminiTranscriber::new(api_key),
    };
    let use_case = TranscribeClipUseCase::new(transcriber);

    let input = TranscribeInput {
        clip,
        prompt,
        config,
    };

    // The use case drives the spinner over its callbacks; the handle is
    // cloned into the closures and cleared once the remote call returns
    let spinner = Presenter::spinner("Transcribing... Please wait.");
    let started = spinner.clone();
    let finished = spinner.clone();
    let callbacks = TranscribeCallbacks {
        on_transcribing_start: Some(Box::new(move || Presenter::spinner_start(&started))),
        on_transcribing_end: Some(Box::new(move || finished.finish_and_clear())),
    };

    let result = use_case.execute(&mut session, input, callbacks).await;

    match result {
        Ok(output) => {
            presenter.success("Transcription complete");

            // Show the raw text verbatim
            presenter.output(&output.text);

            // Offer the result as a plain-text file
            if let Err(e) = fs::write(&cli.output, &output.text).await {
                presenter.error(&format!(
                    "Failed to write '{}': {}",
                    cli.output.display(),
                    e
                ));
                return ExitCode::from(EXIT_ERROR);
            }
            presenter.success(&format!("Saved transcription to {}", cli.output.display()));

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Fill the session credential from the CLI/env value or the persisted store.
/// Store read failures are logged and treated as absence.
pub async fn resolve_credential<S: CredentialStore>(
    session: &mut Session,
    cli_key: Option<String>,
    store: &S,
    presenter: &Presenter,
) {
    if let Some(key) = cli_key {
        session.set_api_key(key);
        return;
    }

    match store.load().await {
        Ok(Some(key)) => session.set_api_key(key),
        Ok(None) => {}
        Err(e) => presenter.warn(&format!("Could not read stored API key: {}", e)),
    }
}

/// Load and merge configuration from defaults, file, and CLI.
/// A broken config file is reported and skipped rather than fatal.
pub async fn load_merged_config<S: ConfigStore>(
    cli_config: AppConfig,
    store: &S,
    presenter: &Presenter,
) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Load the instruction prompt from the given file, the default prompt
/// file location, or the built-in instruction.
pub async fn load_prompt(path_override: Option<&Path>) -> InstructionPrompt {
    let default_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("~/.config"))
        .join("telugu-scribe")
        .join("prompt.txt");

    let path = path_override.unwrap_or(default_path.as_path());

    match fs::read_to_string(path).await {
        Ok(content) => InstructionPrompt::from_text(content),
        Err(_) => InstructionPrompt::default(),
    }
}
