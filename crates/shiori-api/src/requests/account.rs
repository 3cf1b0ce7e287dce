//! Account requests: login, signup, logout.

use crate::error::ApiError;
use crate::request::{encode_body, ApiRequest};
use crate::transport::HttpMethod;
use serde::{Deserialize, Serialize};
use shiori_core::{AuthToken, User, UserId};

/// Credentials submitted by login and signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountParams {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Account payload inside a user response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserResult {
    /// Server-assigned account identifier.
    pub id: u64,
    /// Registered email.
    pub email: String,
    /// Bearer token for authenticated requests.
    pub token: String,
}

/// Response body of login and signup.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    /// Server-reported status.
    pub status: u16,
    /// The signed-in account.
    pub result: UserResult,
}

impl From<UserResult> for User {
    fn from(result: UserResult) -> Self {
        Self {
            id: UserId::new(result.id),
            email: result.email,
            token: AuthToken::new(result.token),
        }
    }
}

/// Response body of requests that return no payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EmptyResponse {
    /// Server-reported status.
    pub status: u16,
}

/// POST `/login` with email and password.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    params: AccountParams,
}

impl LoginRequest {
    /// Build a login request.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            params: AccountParams {
                email: email.into(),
                password: password.into(),
            },
        }
    }
}

impl ApiRequest for LoginRequest {
    type Response = UserResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self) -> String {
        "/login".to_string()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, ApiError> {
        encode_body(&self.params)
    }
}

/// POST `/sign_up` with email and password.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    params: AccountParams,
}

impl SignupRequest {
    /// Build a signup request.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            params: AccountParams {
                email: email.into(),
                password: password.into(),
            },
        }
    }
}

impl ApiRequest for SignupRequest {
    type Response = UserResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn path(&self) -> String {
        "/sign_up".to_string()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, ApiError> {
        encode_body(&self.params)
    }
}

/// DELETE `/logout`, authenticated.
#[derive(Debug, Clone, Default)]
pub struct LogoutRequest;

impl LogoutRequest {
    /// Build a logout request.
    pub fn new() -> Self {
        Self
    }
}

impl ApiRequest for LogoutRequest {
    type Response = EmptyResponse;

    fn method(&self) -> HttpMethod {
        HttpMethod::Delete
    }

    fn path(&self) -> String {
        "/logout".to_string()
    }

    fn requires_auth(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_shape() {
        let request = LoginRequest::new("a@b.com", "secret123");
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.path(), "/login");
        assert!(!request.requires_auth());

        let body = request.body().unwrap().unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "a@b.com", "password": "secret123"})
        );
    }

    #[test]
    fn test_signup_request_shape() {
        let request = SignupRequest::new("a@b.com", "secret123");
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.path(), "/sign_up");
    }

    #[test]
    fn test_logout_request_shape() {
        let request = LogoutRequest::new();
        assert_eq!(request.method(), HttpMethod::Delete);
        assert_eq!(request.path(), "/logout");
        assert!(request.requires_auth());
        assert_eq!(request.body().unwrap(), None);
    }

    #[test]
    fn test_user_response_decodes_and_maps() {
        let json = r#"{
            "status": 200,
            "result": {"id": 1, "email": "a@b.com", "token": "token-1"}
        }"#;
        let response: UserResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, 200);

        let user = User::from(response.result);
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.token.as_str(), "token-1");
    }
}
