//! Bearer token issued by the catalog server at login/signup.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque bearer token for authenticated catalog requests.
///
/// The inner string is zeroized on drop and never appears in `Debug`
/// output. Only the credential store and the HTTP client read the raw
/// value.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token carries no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AuthToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let token = AuthToken::new("super-secret");
        assert_eq!(format!("{token:?}"), "AuthToken(<redacted>)");
    }

    #[test]
    fn test_value_round_trip() {
        let token = AuthToken::from("abc123");
        assert_eq!(token.as_str(), "abc123");
        assert!(!token.is_empty());
        assert!(AuthToken::new("").is_empty());
    }
}
