//! Credential storage port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::error::CredentialError;

/// Port for the persisted single-key credential store.
///
/// `load` distinguishes "nothing stored" (`Ok(None)`) from a real read
/// failure (`Err`); callers decide whether a read failure blocks anything.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the persisted API key, if any.
    async fn load(&self) -> Result<Option<String>, CredentialError>;

    /// Persist the API key, replacing any previous value.
    async fn save(&self, key: &str) -> Result<(), CredentialError>;

    /// Remove the persisted API key. Deleting an absent key is a no-op.
    async fn delete(&self) -> Result<(), CredentialError>;

    /// Get the store location.
    fn path(&self) -> PathBuf;
}
