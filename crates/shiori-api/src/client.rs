//! The API client: resolves, authenticates, sends, and decodes requests.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::{HttpRequest, HttpTransport};
use serde::Deserialize;
use shiori_core::CredentialStoreEffects;
use std::sync::Arc;

/// Error body the server sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the catalog server.
///
/// Stateless apart from its injected handles: the transport to send
/// over and the credential store the bearer token is read from. One
/// `execute` call maps to exactly one transport call; there are no
/// retries and no timeout layer of its own.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStoreEffects>,
}

impl ApiClient {
    /// Build a client from a validated config and injected handles.
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialStoreEffects>,
    ) -> Self {
        Self {
            config,
            transport,
            credentials,
        }
    }

    /// The configured endpoint.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Execute one request: resolve the URL, attach the bearer token if
    /// the request needs one, send, and decode the response body.
    ///
    /// Authenticated requests fail with [`ApiError::MissingToken`] when
    /// no token is stored; nothing is sent in that case.
    pub async fn execute<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let path = request.path();
        let url = self.config.endpoint(&path, &request.query())?;

        let bearer = if request.requires_auth() {
            let token = self
                .credentials
                .load_token()
                .await
                .map_err(|err| ApiError::credential(err.to_string()))?
                .ok_or(ApiError::MissingToken)?;
            Some(token.as_str().to_string())
        } else {
            None
        };

        tracing::debug!(method = %request.method(), path = %path, "sending catalog request");

        let response = self
            .transport
            .send(HttpRequest {
                method: request.method(),
                url,
                bearer,
                body: request.body()?,
            })
            .await?;

        if !response.is_success() {
            let message = Self::server_message(&response.body);
            tracing::warn!(status = response.status, path = %path, "catalog request failed");
            return Err(ApiError::status(response.status, message));
        }

        serde_json::from_slice(&response.body).map_err(|err| ApiError::decode(err.to_string()))
    }

    /// Best-effort extraction of the server's error message.
    fn server_message(body: &[u8]) -> String {
        if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
            return parsed.message;
        }
        let raw = String::from_utf8_lossy(body);
        let raw = raw.trim();
        if raw.is_empty() {
            "request failed".to_string()
        } else {
            raw.to_string()
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::{BookListRequest, LoginRequest, LogoutRequest};
    use crate::transport::HttpResponse;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shiori_core::{AuthToken, CredentialError};
    use std::collections::VecDeque;

    /// Transport that pops scripted outcomes and records what was sent.
    #[derive(Default)]
    struct ScriptedTransport {
        script: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
        sent: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn push_json(&self, status: u16, json: &str) {
            self.script.lock().push_back(Ok(HttpResponse {
                status,
                body: json.as_bytes().to_vec(),
            }));
        }

        fn push_error(&self, error: ApiError) {
            self.script.lock().push_back(Err(error));
        }

        fn sent(&self) -> Vec<HttpRequest> {
            self.sent.lock().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.lock().push(request);
            self.script
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::network("script exhausted")))
        }
    }

    /// Minimal in-memory credential store for client tests.
    #[derive(Default)]
    struct TestStore {
        token: Mutex<Option<AuthToken>>,
    }

    #[async_trait]
    impl CredentialStoreEffects for TestStore {
        async fn store_token(&self, token: &AuthToken) -> Result<(), CredentialError> {
            *self.token.lock() = Some(token.clone());
            Ok(())
        }

        async fn load_token(&self) -> Result<Option<AuthToken>, CredentialError> {
            Ok(self.token.lock().clone())
        }

        async fn clear_token(&self) -> Result<(), CredentialError> {
            *self.token.lock() = None;
            Ok(())
        }
    }

    fn client_with(
        transport: Arc<ScriptedTransport>,
        store: Arc<TestStore>,
    ) -> ApiClient {
        let config = ApiConfig::new("https://api.example.com").unwrap();
        ApiClient::new(config, transport, store)
    }

    #[tokio::test]
    async fn test_execute_decodes_success_envelope() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.push_json(
            200,
            r#"{"status": 200, "result": {"id": 7, "email": "a@b.com", "token": "tok"}}"#,
        );
        let client = client_with(transport.clone(), Arc::new(TestStore::default()));

        let response = client
            .execute(&LoginRequest::new("a@b.com", "secret123"))
            .await
            .unwrap();
        assert_eq!(response.result.id, 7);

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "https://api.example.com/login");
        assert_eq!(sent[0].bearer, None);
        assert!(sent[0].body.is_some());
    }

    #[tokio::test]
    async fn test_execute_attaches_bearer_token() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.push_json(
            200,
            r#"{"status": 200, "result": [], "totalCount": 0, "totalPages": 0, "currentPage": 1, "limit": 20}"#,
        );
        let store = Arc::new(TestStore::default());
        *store.token.lock() = Some(AuthToken::new("tok-123"));
        let client = client_with(transport.clone(), store);

        client.execute(&BookListRequest::new(1)).await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].bearer.as_deref(), Some("tok-123"));
        assert_eq!(
            sent[0].url,
            "https://api.example.com/books?limit=20&page=1"
        );
    }

    #[tokio::test]
    async fn test_missing_token_fails_without_sending() {
        let transport = Arc::new(ScriptedTransport::default());
        let client = client_with(transport.clone(), Arc::new(TestStore::default()));

        let err = client.execute(&LogoutRequest::new()).await.unwrap_err();
        assert_matches!(err, ApiError::MissingToken);
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_surfaces_message() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.push_json(401, r#"{"status": 401, "message": "unauthorized"}"#);
        let client = client_with(transport.clone(), Arc::new(TestStore::default()));

        let err = client
            .execute(&LoginRequest::new("a@b.com", "wrong-pass"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::status(401, "unauthorized"));
    }

    #[tokio::test]
    async fn test_server_error_with_opaque_body() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.push_json(500, "");
        let client = client_with(transport.clone(), Arc::new(TestStore::default()));

        let err = client
            .execute(&LoginRequest::new("a@b.com", "secret123"))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::status(500, "request failed"));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.push_error(ApiError::network("connection refused"));
        let client = client_with(transport.clone(), Arc::new(TestStore::default()));

        let err = client
            .execute(&LoginRequest::new("a@b.com", "secret123"))
            .await
            .unwrap_err();
        assert_matches!(err, ApiError::Network { .. });
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_decode_error() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.push_json(200, r#"{"status": 200}"#);
        let client = client_with(transport.clone(), Arc::new(TestStore::default()));

        let err = client
            .execute(&LoginRequest::new("a@b.com", "secret123"))
            .await
            .unwrap_err();
        assert_matches!(err, ApiError::Decode { .. });
    }
}
