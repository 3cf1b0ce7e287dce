//! Unified error handling.
//!
//! Every operation in the application core resolves into a single
//! [`AppError`] channel: transport failures, server-reported failures,
//! decode failures, and local validation failures all collapse into one
//! error per operation. Lower layers define their own error enums and
//! convert into `AppError` at the boundary.

use thiserror::Error;

/// Unified application error.
///
/// Carries a human-readable message per variant. Screens surface the
/// message as-is; nothing downstream branches on the variant except tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Local input validation failed before any call was made.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// The transport layer failed (connection, TLS, DNS).
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A response body could not be decoded.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// The credential store rejected an operation.
    #[error("Credential store error: {message}")]
    Credential { message: String },

    /// The chat backend rejected an operation.
    #[error("Chat store error: {message}")]
    Chat { message: String },

    /// The authentication provider rejected an operation.
    #[error("Auth provider error: {message}")]
    Auth { message: String },

    /// Local or remote object storage failed.
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Internal invariant violation.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a server error with its reported status code.
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a credential store error.
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    /// Create a chat store error.
    pub fn chat(message: impl Into<String>) -> Self {
        Self::Chat {
            message: message.into(),
        }
    }

    /// Create an auth provider error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The message carried by any variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Network { message }
            | Self::Server { message, .. }
            | Self::Decode { message }
            | Self::Credential { message }
            | Self::Chat { message }
            | Self::Auth { message }
            | Self::Storage { message }
            | Self::Internal { message } => message,
        }
    }
}

/// Result alias used across the application core.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::NotFound => Self::storage(format!("not found: {err}")),
            ErrorKind::PermissionDenied => Self::storage(format!("permission denied: {err}")),
            ErrorKind::ConnectionRefused | ErrorKind::ConnectionReset | ErrorKind::TimedOut => {
                Self::network(err.to_string())
            }
            _ => Self::storage(err.to_string()),
        }
    }
}
