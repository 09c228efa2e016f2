//! API utilities for frontend-backend communication
//!
//! Provides the shared error type and helpers that send JSON requests and
//! unwrap the platform response envelope.

use contracts::shared::envelope::{ApiEnvelope, ApiErrorBody};
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::session::SessionProvider;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the server in `params.errmsg`, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server {
                message: Some(msg), ..
            } => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Server message when present, otherwise the caller's default
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Origin of the current page, e.g. "https://portal.example.org"
///
/// Empty string if window is not available.
pub fn page_origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Attach the bearer token of the current session, if there is one
pub fn with_auth(builder: RequestBuilder, session: &dyn SessionProvider) -> RequestBuilder {
    match session.access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Send `body` as JSON and unwrap the `result` of the response envelope
pub async fn send_json<B, T>(builder: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = builder
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_envelope(response).await
}

/// Send a request without a body and unwrap the `result` of the envelope
pub async fn send_empty<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_envelope(response).await
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(server_error(status, &body));
    }

    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.result)
}

/// Build a `Server` error from a failed response body
pub fn server_error(status: u16, body: &str) -> ApiError {
    let message = ApiErrorBody::parse(body).and_then(|b| b.message());
    ApiError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_extraction() {
        let err = server_error(400, r#"{"params":{"errmsg":"User not found in registry"}}"#);
        assert_eq!(err.server_message(), Some("User not found in registry"));
        assert_eq!(err.user_message("fallback"), "User not found in registry");
    }

    #[test]
    fn test_fallback_message() {
        let err = server_error(502, "<html>Bad gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message("Could not fetch profile"), "Could not fetch profile");

        let transport = ApiError::Transport("offline".to_string());
        assert_eq!(transport.user_message("default"), "default");
    }
}
