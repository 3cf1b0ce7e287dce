//! API client configuration.

use crate::error::ApiError;
use shiori_core::AppError;
use thiserror::Error;

/// Error type for configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is missing or malformed.
    #[error("invalid base URL: {message}")]
    InvalidBaseUrl { message: String },
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            message: message.into(),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::internal(err.to_string())
    }
}

/// Validated catalog server endpoint configuration.
///
/// Constructed once at startup and injected into [`ApiClient`]; there is
/// no process-global setup.
///
/// [`ApiClient`]: crate::client::ApiClient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL.
    ///
    /// The URL must be absolute with an `http` or `https` scheme and a
    /// host. A trailing slash is stripped so paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        if raw.trim().is_empty() {
            return Err(ConfigError::invalid("base URL must not be empty"));
        }
        let parsed = reqwest::Url::parse(&raw)
            .map_err(|err| ConfigError::invalid(format!("{raw:?}: {err}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::invalid(format!(
                "scheme must be http or https, got {:?}",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::invalid("base URL must carry a host"));
        }
        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` (leading slash) and a query string onto the base URL.
    pub(crate) fn endpoint(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<String, ApiError> {
        let mut url = reqwest::Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|err| ApiError::encode(format!("bad request path {path:?}: {err}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url.to_string())
    }
}
