//! Mock effect handlers with scripted, observable behavior.
//!
//! Blocking `parking_lot` locks throughout: these run in single-test
//! contexts where contention is not a concern and a synchronous API
//! keeps assertions simple.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use shiori_api::{ApiError, HttpRequest, HttpResponse, HttpTransport};
use shiori_core::{
    effects::{ClockEffects, CredentialError, CredentialStoreEffects},
    types::{AuthToken, Timestamp},
};

// =============================================================================
// Transport
// =============================================================================

/// Scripted transport: answers with queued responses in order and
/// records every request it was asked to send.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Create a transport with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn push_response(&self, status: u16, body: Vec<u8>) {
        self.responses
            .lock()
            .push_back(Ok(HttpResponse { status, body }));
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_response(status, body.to_string().into_bytes());
    }

    /// Queue a transport-level failure.
    pub fn push_error(&self, error: ApiError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Every request sent so far, in order.
    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().clone()
    }

    /// Number of requests sent so far.
    pub fn sent_count(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::network("no scripted response left")))
    }
}

// =============================================================================
// Credential stores
// =============================================================================

/// In-memory credential store that counts every call, for asserting
/// that the token was persisted exactly once.
#[derive(Default)]
pub struct CountingCredentialStore {
    token: Mutex<Option<AuthToken>>,
    stores: AtomicUsize,
    loads: AtomicUsize,
    clears: AtomicUsize,
}

impl CountingCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `token`.
    pub fn with_token(token: AuthToken) -> Self {
        let store = Self::default();
        *store.token.lock() = Some(token);
        store
    }

    /// The currently held token.
    pub fn token(&self) -> Option<AuthToken> {
        self.token.lock().clone()
    }

    /// Number of `store_token` calls so far.
    pub fn store_count(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }

    /// Number of `load_token` calls so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of `clear_token` calls so far.
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialStoreEffects for CountingCredentialStore {
    async fn store_token(&self, token: &AuthToken) -> Result<(), CredentialError> {
        self.stores.fetch_add(1, Ordering::SeqCst);
        *self.token.lock() = Some(token.clone());
        Ok(())
    }

    async fn load_token(&self) -> Result<Option<AuthToken>, CredentialError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.token.lock().clone())
    }

    async fn clear_token(&self) -> Result<(), CredentialError> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        *self.token.lock() = None;
        Ok(())
    }
}

/// Credential store whose every call fails, for exercising storage
/// error paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCredentialStore;

impl FailingCredentialStore {
    /// Create the failing store.
    pub fn new() -> Self {
        Self
    }

    fn unavailable() -> CredentialError {
        CredentialError::io("credential store unavailable")
    }
}

#[async_trait]
impl CredentialStoreEffects for FailingCredentialStore {
    async fn store_token(&self, _token: &AuthToken) -> Result<(), CredentialError> {
        Err(Self::unavailable())
    }

    async fn load_token(&self) -> Result<Option<AuthToken>, CredentialError> {
        Err(Self::unavailable())
    }

    async fn clear_token(&self) -> Result<(), CredentialError> {
        Err(Self::unavailable())
    }
}

// =============================================================================
// Clock
// =============================================================================

/// Clock frozen at a settable instant, advanced by hand.
#[derive(Debug, Default)]
pub struct MockClock {
    millis: AtomicU64,
}

impl MockClock {
    /// Create a clock reading `start` milliseconds since the epoch.
    pub fn new(start: u64) -> Self {
        Self {
            millis: AtomicU64::new(start),
        }
    }

    /// Advance the clock by `delta` milliseconds.
    pub fn advance(&self, delta: u64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }

    /// Jump the clock to `millis` since the epoch.
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

#[async_trait]
impl ClockEffects for MockClock {
    async fn now(&self) -> Timestamp {
        Timestamp::from_millis(self.millis.load(Ordering::SeqCst))
    }
}
