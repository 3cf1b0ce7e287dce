//! Filesystem credential store.
//!
//! Stand-in for the platform keychain on hosts that lack one: the token
//! lives in a single file under a store directory, owner-only
//! permissions, written atomically through a temp file.

use async_trait::async_trait;
use shiori_core::{AuthToken, CredentialError, CredentialStoreEffects};
use std::fs::Permissions;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

const TOKEN_FILE: &str = "token";
const TEMP_FILE: &str = ".token.tmp";

/// Permission configuration for the store directory and token file.
#[derive(Debug, Clone)]
pub struct CredentialFileConfig {
    /// Token file mode. Owner read/write only.
    pub file_permissions: u32,
    /// Store directory mode. Owner only.
    pub dir_permissions: u32,
}

impl Default for CredentialFileConfig {
    fn default() -> Self {
        Self {
            file_permissions: 0o600,
            dir_permissions: 0o700,
        }
    }
}

/// Credential store backed by one file in an owner-only directory.
#[derive(Debug)]
pub struct FileCredentialStore {
    dir: PathBuf,
    config: CredentialFileConfig,
}

impl FileCredentialStore {
    /// Create a store under `dir` with default permissions, creating the
    /// directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CredentialError> {
        Self::with_config(dir, CredentialFileConfig::default())
    }

    /// Create a store under `dir` with explicit permissions.
    pub fn with_config(
        dir: impl Into<PathBuf>,
        config: CredentialFileConfig,
    ) -> Result<Self, CredentialError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        std::fs::set_permissions(&dir, Permissions::from_mode(config.dir_permissions))?;
        debug!(dir = %dir.display(), "initialized credential store");
        Ok(Self { dir, config })
    }

    /// Path of the token file.
    pub fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(TEMP_FILE)
    }

    async fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), CredentialError> {
        let temp = self.temp_path();
        fs::write(&temp, contents).await?;
        fs::set_permissions(&temp, Permissions::from_mode(self.config.file_permissions)).await?;
        fs::rename(&temp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl CredentialStoreEffects for FileCredentialStore {
    async fn store_token(&self, token: &AuthToken) -> Result<(), CredentialError> {
        self.write_atomic(&self.token_path(), token.as_str()).await?;
        debug!("stored token");
        Ok(())
    }

    async fn load_token(&self) -> Result<Option<AuthToken>, CredentialError> {
        match fs::read_to_string(self.token_path()).await {
            Ok(contents) => Ok(Some(AuthToken::new(contents))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn clear_token(&self) -> Result<(), CredentialError> {
        match fs::remove_file(self.token_path()).await {
            Ok(()) => {
                debug!("cleared token");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials")).unwrap();

        assert_eq!(store.load_token().await.unwrap(), None);

        store.store_token(&AuthToken::new("tok-1")).await.unwrap();
        assert_eq!(
            store.load_token().await.unwrap(),
            Some(AuthToken::new("tok-1"))
        );

        store.store_token(&AuthToken::new("tok-2")).await.unwrap();
        assert_eq!(
            store.load_token().await.unwrap(),
            Some(AuthToken::new("tok-2"))
        );

        store.clear_token().await.unwrap();
        assert_eq!(store.load_token().await.unwrap(), None);
        store.clear_token().await.unwrap();
    }

    #[tokio::test]
    async fn test_token_file_is_owner_only() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials")).unwrap();
        store.store_token(&AuthToken::new("tok")).await.unwrap();

        let mode = std::fs::metadata(store.token_path())
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);

        let dir_mode = std::fs::metadata(dir.path().join("credentials"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(dir_mode & 0o777, 0o700);
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials")).unwrap();
        store.store_token(&AuthToken::new("tok")).await.unwrap();

        assert!(!store.temp_path().exists());
        assert!(store.token_path().exists());
    }

    #[tokio::test]
    async fn test_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");

        let store = FileCredentialStore::new(&path).unwrap();
        store.store_token(&AuthToken::new("tok")).await.unwrap();
        drop(store);

        let reopened = FileCredentialStore::new(&path).unwrap();
        assert_eq!(
            reopened.load_token().await.unwrap(),
            Some(AuthToken::new("tok"))
        );
    }
}
