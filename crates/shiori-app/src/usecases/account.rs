//! Account usecases: login, signup, logout.
//!
//! Each usecase owns the full side-effect sequence for one intent and
//! resolves to exactly one terminal outcome. The bearer token is always
//! persisted before the outcome is returned, so a success surfaced to a
//! screen implies the credential store already holds the token.

use std::sync::Arc;

use shiori_api::{ApiClient, LoginRequest, LogoutRequest, SignupRequest};
use shiori_core::{
    domain::{Profile, User},
    effects::{
        AuthProviderEffects, ChatStoreEffects, ClockEffects, CredentialStoreEffects,
        IconStoreEffects,
    },
    Result,
};

// =============================================================================
// Login
// =============================================================================

/// Signs an account in against the catalog server and the chat auth
/// provider.
#[derive(Clone)]
pub struct LoginUsecase {
    api: ApiClient,
    credentials: Arc<dyn CredentialStoreEffects>,
    auth_provider: Arc<dyn AuthProviderEffects>,
}

impl LoginUsecase {
    /// Create a login usecase over the given capabilities.
    pub fn new(
        api: ApiClient,
        credentials: Arc<dyn CredentialStoreEffects>,
        auth_provider: Arc<dyn AuthProviderEffects>,
    ) -> Self {
        Self {
            api,
            credentials,
            auth_provider,
        }
    }

    /// POST `/login`, persist the returned token, then sign in to the
    /// chat auth provider.
    ///
    /// The token is stored before this returns; a partial failure after
    /// the catalog accepted the credentials surfaces as an error with the
    /// token already persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let response = self.api.execute(&LoginRequest::new(email, password)).await?;
        let user = User::from(response.result);

        self.credentials.store_token(&user.token).await?;
        self.auth_provider.sign_in(email, password).await?;

        tracing::debug!(user = %user.id, "login completed");
        Ok(user)
    }
}

// =============================================================================
// Signup
// =============================================================================

/// Registers an account with the catalog server and provisions its chat
/// identity.
#[derive(Clone)]
pub struct SignupUsecase {
    api: ApiClient,
    credentials: Arc<dyn CredentialStoreEffects>,
    auth_provider: Arc<dyn AuthProviderEffects>,
    chat_store: Arc<dyn ChatStoreEffects>,
    icon_store: Arc<dyn IconStoreEffects>,
    clock: Arc<dyn ClockEffects>,
}

impl SignupUsecase {
    /// Create a signup usecase over the given capabilities.
    pub fn new(
        api: ApiClient,
        credentials: Arc<dyn CredentialStoreEffects>,
        auth_provider: Arc<dyn AuthProviderEffects>,
        chat_store: Arc<dyn ChatStoreEffects>,
        icon_store: Arc<dyn IconStoreEffects>,
        clock: Arc<dyn ClockEffects>,
    ) -> Self {
        Self {
            api,
            credentials,
            auth_provider,
            chat_store,
            icon_store,
            clock,
        }
    }

    /// POST `/sign_up`, persist the token, create the auth-provider
    /// account, upload the icon when one was picked, and create the chat
    /// profile.
    ///
    /// Every step runs at most once, all before this returns. A failure
    /// partway leaves the completed steps in place and surfaces the error.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
        icon: Option<Vec<u8>>,
    ) -> Result<User> {
        let response = self
            .api
            .execute(&SignupRequest::new(email, password))
            .await?;
        let user = User::from(response.result);

        self.credentials.store_token(&user.token).await?;
        let profile_id = self.auth_provider.create_user(email, password).await?;

        let icon_url = match icon {
            Some(bytes) => Some(self.icon_store.upload_icon(profile_id, &bytes).await?),
            None => None,
        };

        let profile = Profile {
            id: profile_id,
            name: name.to_string(),
            email: email.to_string(),
            icon_url,
            created_at: self.clock.now().await,
        };
        self.chat_store.create_profile(&profile).await?;

        tracing::debug!(user = %user.id, profile = %profile.id, "signup completed");
        Ok(user)
    }
}

// =============================================================================
// Logout
// =============================================================================

/// Signs the account out remotely, then discards local credentials.
#[derive(Clone)]
pub struct LogoutUsecase {
    api: ApiClient,
    credentials: Arc<dyn CredentialStoreEffects>,
    auth_provider: Arc<dyn AuthProviderEffects>,
}

impl LogoutUsecase {
    /// Create a logout usecase over the given capabilities.
    pub fn new(
        api: ApiClient,
        credentials: Arc<dyn CredentialStoreEffects>,
        auth_provider: Arc<dyn AuthProviderEffects>,
    ) -> Self {
        Self {
            api,
            credentials,
            auth_provider,
        }
    }

    /// DELETE `/logout`, then clear the stored token and sign out of the
    /// chat auth provider.
    ///
    /// A failed remote call leaves the token in place so the session can
    /// retry; nothing is cleared until the server confirmed the logout.
    pub async fn logout(&self) -> Result<()> {
        self.api.execute(&LogoutRequest::new()).await?;

        self.credentials.clear_token().await?;
        self.auth_provider.sign_out().await?;

        tracing::debug!("logout completed");
        Ok(())
    }
}
