//! Shiori API - Catalog Server Wire Layer
//!
//! Typed REST requests and the HTTP client for the catalog server:
//! login, signup, logout, and the paginated book catalog. JSON bodies
//! use camelCase keys and the `{ "status": ..., "result": ... }`
//! envelope; server failures arrive as `{ "status": ..., "message": ... }`
//! with a non-success status code.
//!
//! The client is injected with an [`HttpTransport`] (reqwest in
//! production, scripted in tests) and a credential store handle for the
//! bearer token. One `execute` is one request; no retries, no protocol
//! versioning, no batching.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// The API client.
pub mod client;

/// Endpoint configuration.
pub mod config;

/// Wire-layer error type.
pub mod error;

/// The request trait.
pub mod request;

/// Typed request definitions.
pub mod requests;

/// HTTP transport seam and the reqwest handler.
pub mod transport;

// === Public API Re-exports ===

pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use request::ApiRequest;
pub use requests::{
    AccountParams, AddBookRequest, BookListRequest, BookListResponse, BookParams, BookResponse,
    BookResult, EditBookRequest, EmptyResponse, LoginRequest, LogoutRequest, SignupRequest,
    UserResponse, UserResult, DEFAULT_PAGE_SIZE,
};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
