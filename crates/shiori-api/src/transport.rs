//! HTTP transport seam.
//!
//! The client speaks to the server through [`HttpTransport`] so tests
//! can script responses without a socket. [`ReqwestTransport`] is the
//! production handler. No retry, timeout, or backoff layer sits here;
//! one call maps to one request.

use crate::error::ApiError;
use async_trait::async_trait;
use std::fmt;

/// HTTP methods the catalog API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Canonical method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One outgoing request, fully resolved.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Method to send with.
    pub method: HttpMethod,
    /// Absolute URL including any query string.
    pub url: String,
    /// Bearer token for the `Authorization` header, when required.
    pub bearer: Option<String>,
    /// JSON body, when the request carries one.
    pub body: Option<serde_json::Value>,
}

/// One incoming response, body undecoded.
///
/// Non-success statuses are returned here, not as errors; the client
/// decides how to surface them.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport over which the client sends requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one request and return the raw response.
    ///
    /// Fails only when no response arrived at all; server-reported
    /// failures come back as an [`HttpResponse`].
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Production transport over a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with default client settings.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}
