//! Request trait for the catalog API.

use crate::error::ApiError;
use crate::transport::HttpMethod;
use serde::de::DeserializeOwned;

/// One typed request against the catalog server.
///
/// Implementations carry their parameters and declare method, path, and
/// whether the bearer token must be attached. The client resolves the
/// URL, sends, and decodes the associated `Response`.
pub trait ApiRequest: Send + Sync {
    /// Decoded response body type.
    type Response: DeserializeOwned;

    /// HTTP method to send with.
    fn method(&self) -> HttpMethod;

    /// Path below the base URL, with a leading slash.
    fn path(&self) -> String;

    /// Query parameters, in emission order.
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// JSON body, when the request carries one.
    fn body(&self) -> Result<Option<serde_json::Value>, ApiError> {
        Ok(None)
    }

    /// True when the bearer token must be attached.
    fn requires_auth(&self) -> bool {
        false
    }
}

/// Encode a parameters struct as a JSON body.
pub(crate) fn encode_body<P: serde::Serialize>(
    params: &P,
) -> Result<Option<serde_json::Value>, ApiError> {
    serde_json::to_value(params)
        .map(Some)
        .map_err(|err| ApiError::encode(err.to_string()))
}
