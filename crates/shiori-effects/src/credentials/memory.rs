//! In-memory credential store.

use async_trait::async_trait;
use shiori_core::{AuthToken, CredentialError, CredentialStoreEffects};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Credential store backed by process memory.
///
/// Holds the token for the lifetime of the process. Suits tests and
/// platforms where the frontend bridges to a real keychain itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    token: Arc<RwLock<Option<AuthToken>>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStoreEffects for MemoryCredentialStore {
    async fn store_token(&self, token: &AuthToken) -> Result<(), CredentialError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn load_token(&self) -> Result<Option<AuthToken>, CredentialError> {
        Ok(self.token.read().await.clone())
    }

    async fn clear_token(&self) -> Result<(), CredentialError> {
        *self.token.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.load_token().await.unwrap(), None);

        store.store_token(&AuthToken::new("tok-1")).await.unwrap();
        assert_eq!(
            store.load_token().await.unwrap(),
            Some(AuthToken::new("tok-1"))
        );

        // Overwrites, holds at most one token.
        store.store_token(&AuthToken::new("tok-2")).await.unwrap();
        assert_eq!(
            store.load_token().await.unwrap(),
            Some(AuthToken::new("tok-2"))
        );

        store.clear_token().await.unwrap();
        assert_eq!(store.load_token().await.unwrap(), None);

        // Clearing an empty store succeeds.
        store.clear_token().await.unwrap();
    }
}
