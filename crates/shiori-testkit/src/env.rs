//! Assembled test environment.
//!
//! One `TestEnv` wires a scripted transport and working local handlers
//! into the shapes usecases are constructed from. Tests script the
//! transport, build their usecase over the env's handles, and assert
//! against the counting store and the chat backend.

use std::sync::Arc;

use shiori_api::{ApiClient, ApiConfig};
use shiori_core::{
    domain::Profile,
    effects::{AuthProviderEffects, ChatStoreEffects, ClockEffects, CredentialStoreEffects},
    types::{AuthToken, ProfileId},
};
use shiori_effects::{InProcessChatBackend, MemoryAuthProvider, MemoryIconStore};

use crate::mocks::{CountingCredentialStore, MockClock, MockTransport};

/// Base URL every test client points at; never resolved, the transport
/// is scripted.
pub const TEST_BASE_URL: &str = "https://api.test.invalid";

/// Milliseconds the mock clock starts at.
pub const TEST_EPOCH_MS: u64 = 1_700_000_000_000;

/// Scripted transport plus working local handlers, ready to construct
/// usecases from.
pub struct TestEnv {
    /// Scripted HTTP transport.
    pub transport: Arc<MockTransport>,
    /// Counting credential store.
    pub credentials: Arc<CountingCredentialStore>,
    /// Local auth provider.
    pub auth: Arc<MemoryAuthProvider>,
    /// In-process chat backend, on the env's clock.
    pub chat: Arc<InProcessChatBackend>,
    /// Local icon store.
    pub icons: Arc<MemoryIconStore>,
    /// Hand-advanced clock.
    pub clock: Arc<MockClock>,
}

impl TestEnv {
    /// Create a fresh environment.
    pub fn new() -> Self {
        let clock = Arc::new(MockClock::new(TEST_EPOCH_MS));
        Self {
            transport: Arc::new(MockTransport::new()),
            credentials: Arc::new(CountingCredentialStore::new()),
            auth: Arc::new(MemoryAuthProvider::new()),
            chat: Arc::new(InProcessChatBackend::new(clock.clone())),
            icons: Arc::new(MemoryIconStore::new()),
            clock,
        }
    }

    /// An API client over the env's transport and credential store.
    pub fn api(&self) -> ApiClient {
        let config = ApiConfig::new(TEST_BASE_URL).expect("test base url is valid");
        ApiClient::new(config, self.transport.clone(), self.credentials.clone())
    }

    /// Provision a signed-in identity: auth account, chat profile, and
    /// stored token. Returns the chat profile.
    pub async fn sign_in(&self, email: &str, name: &str) -> Profile {
        let profile_id = self
            .auth
            .create_user(email, "password")
            .await
            .expect("fresh account is accepted");
        let profile = Profile {
            id: profile_id,
            name: name.to_string(),
            email: email.to_string(),
            icon_url: None,
            created_at: self.clock.now().await,
        };
        self.chat
            .create_profile(&profile)
            .await
            .expect("profile creation succeeds");
        self.credentials
            .store_token(&AuthToken::from("test-token"))
            .await
            .expect("token store succeeds");
        profile
    }

    /// Add a directory-only profile, as another account's signup would.
    pub async fn register_partner(&self, email: &str, name: &str) -> Profile {
        let profile = Profile {
            id: ProfileId::new(),
            name: name.to_string(),
            email: email.to_string(),
            icon_url: None,
            created_at: self.clock.now().await,
        };
        self.chat
            .create_profile(&profile)
            .await
            .expect("profile creation succeeds");
        profile
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
