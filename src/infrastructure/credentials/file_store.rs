//! File-backed credential store adapter

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::CredentialStore;
use crate::domain::error::CredentialError;

/// Name of the single-value key file
const KEY_FILE_NAME: &str = "genai_api_key";

/// Persisted credential store holding one plaintext API key,
/// last write wins. Lives under the XDG config dir by default.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store at the default XDG location
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("telugu-scribe");

        Self {
            path: config_dir.join(KEY_FILE_NAME),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Option<String>, CredentialError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let key = content.trim().to_string();
                if key.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(key))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CredentialError::ReadError(e.to_string())),
        }
    }

    async fn save(&self, key: &str) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CredentialError::WriteError(e.to_string()))?;
        }

        fs::write(&self.path, key)
            .await
            .map_err(|e| CredentialError::WriteError(e.to_string()))
    }

    async fn delete(&self) -> Result<(), CredentialError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialError::DeleteError(e.to_string())),
        }
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> FileCredentialStore {
        FileCredentialStore::with_path(dir.path().join(KEY_FILE_NAME))
    }

    #[test]
    fn default_path_is_xdg() {
        let store = FileCredentialStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("telugu-scribe"));
        assert!(path.to_string_lossy().contains("genai_api_key"));
    }

    #[tokio::test]
    async fn load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.save("my-secret-key").await.unwrap();

        // Simulate a fresh session by creating a second store over the same path
        let fresh = FileCredentialStore::with_path(store.path());
        assert_eq!(fresh.load().await.unwrap(), Some("my-secret-key".to_string()));
    }

    #[tokio::test]
    async fn save_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.save("old-key").await.unwrap();
        store.save("new-key").await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some("new-key".to_string()));
    }

    #[tokio::test]
    async fn load_trims_whitespace() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.path(), "  key-with-newline\n").await.unwrap();

        assert_eq!(
            store.load().await.unwrap(),
            Some("key-with-newline".to_string())
        );
    }

    #[tokio::test]
    async fn blank_file_is_treated_as_absent() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.path(), "\n").await.unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_persisted_key() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.save("key").await.unwrap();
        store.delete().await.unwrap();

        assert_eq!(store.load().await.unwrap(), None);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn delete_of_absent_key_is_noop() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.delete().await.is_ok());
    }

    #[tokio::test]
    async fn load_where_path_is_a_directory_is_read_error() {
        let dir = tempdir().unwrap();
        let store = FileCredentialStore::with_path(dir.path());

        let result = store.load().await;
        assert!(matches!(result, Err(CredentialError::ReadError(_))));
    }
}
