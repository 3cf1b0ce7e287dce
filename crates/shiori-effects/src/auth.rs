//! In-memory auth provider.

use async_trait::async_trait;
use shiori_core::{AuthProviderEffects, AuthProviderError, ProfileId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

struct Account {
    password: String,
    profile: ProfileId,
}

#[derive(Default)]
struct AuthState {
    /// Accounts keyed by email.
    accounts: HashMap<String, Account>,
    /// The signed-in profile, if any.
    current: Option<ProfileId>,
}

/// Auth provider held in process memory.
///
/// Registers accounts by email and tracks one signed-in profile, the
/// way the hosted provider does for a single device.
#[derive(Clone, Default)]
pub struct MemoryAuthProvider {
    state: Arc<RwLock<AuthState>>,
}

impl MemoryAuthProvider {
    /// Create a provider with no accounts.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthProviderEffects for MemoryAuthProvider {
    async fn create_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProfileId, AuthProviderError> {
        let mut state = self.state.write().await;
        if state.accounts.contains_key(email) {
            return Err(AuthProviderError::rejected("email already registered"));
        }
        let profile = ProfileId::new();
        state.accounts.insert(
            email.to_string(),
            Account {
                password: password.to_string(),
                profile,
            },
        );
        state.current = Some(profile);
        debug!(profile = %profile, "registered auth account");
        Ok(profile)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<ProfileId, AuthProviderError> {
        let mut state = self.state.write().await;
        // One message for both unknown email and wrong password.
        let profile = match state.accounts.get(email) {
            Some(account) if account.password == password => account.profile,
            _ => return Err(AuthProviderError::rejected("invalid email or password")),
        };
        state.current = Some(profile);
        debug!(profile = %profile, "signed in");
        Ok(profile)
    }

    async fn sign_out(&self) -> Result<(), AuthProviderError> {
        self.state.write().await.current = None;
        debug!("signed out");
        Ok(())
    }

    async fn current_profile(&self) -> Result<Option<ProfileId>, AuthProviderError> {
        Ok(self.state.read().await.current)
    }
}
