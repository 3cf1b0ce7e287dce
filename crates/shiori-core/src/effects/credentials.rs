//! Credential store trait definition.
//!
//! The secure holder for the catalog server's bearer token, in the role
//! the original platform's keychain plays. Handlers live in
//! `shiori-effects`; tests use the counting store from `shiori-testkit`.

use crate::errors::AppError;
use crate::types::AuthToken;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for credential store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The backing store could not be read or written.
    #[error("credential store I/O failed: {message}")]
    Io { message: String },
    /// The caller may not access the store.
    #[error("credential store access denied: {message}")]
    AccessDenied { message: String },
}

impl CredentialError {
    /// Create an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an access-denied error.
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::AccessDenied {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for CredentialError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::access_denied(err.to_string()),
            _ => Self::io(err.to_string()),
        }
    }
}

impl From<CredentialError> for AppError {
    fn from(err: CredentialError) -> Self {
        Self::credential(err.to_string())
    }
}

/// Secure storage for the signed-in account's bearer token.
///
/// Holds at most one token. `store_token` overwrites any previous value.
#[async_trait]
pub trait CredentialStoreEffects: Send + Sync {
    /// Persist `token`, replacing any stored one.
    async fn store_token(&self, token: &AuthToken) -> Result<(), CredentialError>;

    /// Load the stored token, if any.
    async fn load_token(&self) -> Result<Option<AuthToken>, CredentialError>;

    /// Remove the stored token. Succeeds when none is stored.
    async fn clear_token(&self) -> Result<(), CredentialError>;
}
