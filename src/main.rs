//! TeluguScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use telugu_scribe::cli::{
    app::{run_transcribe, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    key_cmd::{handle_key_command, handle_reset},
    presenter::Presenter,
};
use telugu_scribe::domain::session::Session;
use telugu_scribe::infrastructure::{FileCredentialStore, JsonConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command.take() {
        Some(Commands::Key { action }) => {
            let store = FileCredentialStore::new();
            let mut session = Session::new();
            if let Err(e) = handle_key_command(action, &mut session, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Config { action }) => {
            let store = match cli.config.as_ref() {
                Some(path) => JsonConfigStore::with_path(path),
                None => JsonConfigStore::new(),
            };
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Reset) => {
            let store = FileCredentialStore::new();
            let mut session = Session::new();
            handle_reset(&mut session, &store, &presenter).await;
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    run_transcribe(cli).await
}
