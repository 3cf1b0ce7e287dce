//! Auth provider trait definition.
//!
//! Boundary to the chat side's account system (the role a hosted auth
//! SDK plays). The provider hands out the profile identifier that keys
//! everything in the chat store.

use crate::errors::AppError;
use crate::types::ProfileId;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for auth provider operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthProviderError {
    /// The provider rejected the credentials or the account request.
    #[error("auth provider rejected the request: {message}")]
    Rejected { message: String },
    /// The provider could not be reached.
    #[error("auth provider unavailable: {message}")]
    Unavailable { message: String },
}

impl AuthProviderError {
    /// Create a rejection error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create an unavailability error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

impl From<AuthProviderError> for AppError {
    fn from(err: AuthProviderError) -> Self {
        Self::auth(err.to_string())
    }
}

/// Remote authentication provider for the chat side.
///
/// Tracks at most one signed-in profile per handle.
#[async_trait]
pub trait AuthProviderEffects: Send + Sync {
    /// Register a new account and sign it in. Returns the new profile
    /// identifier.
    async fn create_user(&self, email: &str, password: &str)
        -> Result<ProfileId, AuthProviderError>;

    /// Sign in to an existing account. Returns its profile identifier.
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProfileId, AuthProviderError>;

    /// Sign out of the current account. Succeeds when already signed out.
    async fn sign_out(&self) -> Result<(), AuthProviderError>;

    /// The signed-in profile, if any.
    async fn current_profile(&self) -> Result<Option<ProfileId>, AuthProviderError>;
}
