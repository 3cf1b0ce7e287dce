//! Wire-layer error type.

use shiori_core::AppError;
use thiserror::Error;

/// Error type for catalog server requests.
///
/// Collapses at the application boundary into [`AppError`]; screens
/// never see which layer produced the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The transport failed before a response arrived.
    #[error("network failure: {message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("response decode failed: {message}")]
    Decode { message: String },

    /// Request parameters could not be encoded.
    #[error("request encode failed: {message}")]
    Encode { message: String },

    /// An authenticated request was made with no stored token.
    #[error("no stored token for an authenticated request")]
    MissingToken,

    /// The credential store failed while loading the token.
    #[error("credential lookup failed: {message}")]
    Credential { message: String },
}

impl ApiError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a server-status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
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

    /// Create an encode error.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Create a credential lookup error.
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network { message } => Self::network(message),
            ApiError::Status { status, message } => Self::server(status, message),
            ApiError::Decode { message } | ApiError::Encode { message } => Self::decode(message),
            ApiError::MissingToken => Self::credential("no stored token"),
            ApiError::Credential { message } => Self::credential(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_into_app_error() {
        assert_eq!(
            AppError::from(ApiError::status(500, "boom")),
            AppError::server(500, "boom")
        );
        assert_eq!(
            AppError::from(ApiError::network("refused")),
            AppError::network("refused")
        );
        assert!(matches!(
            AppError::from(ApiError::MissingToken),
            AppError::Credential { .. }
        ));
    }
}
