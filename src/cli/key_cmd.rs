//! API key and reset command handlers

use crate::application::ports::CredentialStore;
use crate::domain::error::CredentialError;
use crate::domain::session::Session;

use super::args::KeyAction;
use super::presenter::Presenter;

/// Handle the key subcommand
pub async fn handle_key_command<S: CredentialStore>(
    action: KeyAction,
    session: &mut Session,
    store: &S,
    presenter: &Presenter,
) -> Result<(), CredentialError> {
    match action {
        KeyAction::Set { key } => handle_set(session, store, presenter, &key).await,
        KeyAction::Show => handle_show(store, presenter).await,
        KeyAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
    }
}

/// Submit a credential through the session, then persist it
async fn handle_set<S: CredentialStore>(
    session: &mut Session,
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), CredentialError> {
    if !session.submit_api_key(key) {
        return Err(CredentialError::WriteError(
            "API key must not be empty".to_string(),
        ));
    }

    store.save(key).await?;
    presenter.success(&format!("API key saved to {}", store.path().display()));
    Ok(())
}

async fn handle_show<S: CredentialStore>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), CredentialError> {
    match store.load().await? {
        Some(key) => presenter.output(&mask_api_key(&key)),
        None => presenter.output("(not set)"),
    }
    Ok(())
}

/// Reset: clear the session and remove the persisted key.
/// A failed deletion is reported but never fatal.
pub async fn handle_reset<S: CredentialStore>(
    session: &mut Session,
    store: &S,
    presenter: &Presenter,
) {
    session.clear();

    if let Err(e) = store.delete().await {
        presenter.warn(&format!("Could not remove stored API key: {}", e));
    }

    presenter.success("Session reset");
}

/// Mask API key for display (show first 4 and last 4 chars).
/// Counts characters, not bytes, so multibyte keys never split mid-char.
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
