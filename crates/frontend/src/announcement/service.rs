//! Announcement API glue
//!
//! The inbox has no live endpoint yet: `inbox_announcement_stub` returns a
//! fixed envelope and never touches the network.

use contracts::announcement::{AnnouncementListResult, CreateAnnouncementRequest, OutboxRequest};
use contracts::shared::envelope::{ApiEnvelope, ApiRequest};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::shared::api_utils::{send_empty, send_json, with_auth, ApiError};
use crate::shared::config::AppConfig;
use crate::system::session::SessionProvider;

const INBOX_STUB: &str = include_str!("inbox_stub.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Attachment label shown next to a file: PDF, PNG, or JPEG for anything else
pub fn file_extension(mime_type: &str) -> &'static str {
    match mime_type {
        "application/pdf" => "PDF",
        "application/png" => "PNG",
        _ => "JPEG",
    }
}

/// The hardcoded inbox envelope
pub fn inbox_announcement_stub() -> ApiEnvelope<AnnouncementListResult> {
    serde_json::from_str(INBOX_STUB).unwrap_or_else(|e| {
        log::error!("Inbox stub payload is invalid: {}", e);
        ApiEnvelope {
            id: None,
            ver: None,
            ts: None,
            params: Default::default(),
            response_code: None,
            result: AnnouncementListResult::default(),
        }
    })
}

/// A fully described request: method, url, extra headers, optional JSON body
#[derive(Clone, Debug, PartialEq)]
pub struct HttpCall {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpCall {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    fn builder(&self) -> RequestBuilder {
        let builder = match self.method {
            HttpMethod::Get => Request::get(&self.url),
            HttpMethod::Post => Request::post(&self.url),
            HttpMethod::Put => Request::put(&self.url),
            HttpMethod::Delete => Request::delete(&self.url),
        };
        self.headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name, value))
    }
}

pub struct AnnouncementService<'a> {
    config: &'a AppConfig,
    session: &'a dyn SessionProvider,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(config: &'a AppConfig, session: &'a dyn SessionProvider) -> Self {
        Self { config, session }
    }

    /// Send `call` with the session's bearer token and unwrap the envelope result
    pub async fn http_call<T: DeserializeOwned>(&self, call: &HttpCall) -> Result<T, ApiError> {
        let builder = with_auth(call.builder(), self.session);
        log::debug!("{:?} {}", call.method, call.url);

        match &call.body {
            Some(body) => send_json(builder, body).await,
            None => send_empty(builder).await,
        }
    }

    pub fn outbox_call(&self, user_id: &str) -> Result<HttpCall, ApiError> {
        if user_id.is_empty() {
            return Err(ApiError::NotAuthenticated);
        }
        HttpCall::new(
            HttpMethod::Post,
            self.config.api_url(&self.config.api.announcement_outbox),
        )
        .header("Content-Type", "application/json")
        .json(&ApiRequest::new(OutboxRequest {
            user_id: user_id.to_string(),
        }))
    }

    pub async fn get_outbox_announcement_list(
        &self,
        user_id: &str,
    ) -> Result<AnnouncementListResult, ApiError> {
        let call = self.outbox_call(user_id)?;
        self.http_call(&call).await
    }

    pub fn inbox_announcement_stub(&self) -> ApiEnvelope<AnnouncementListResult> {
        inbox_announcement_stub()
    }

    /// The cancel endpoint is a GET
    pub fn cancel_call(&self, announcement_id: &str) -> HttpCall {
        HttpCall::new(HttpMethod::Get, cancel_url(self.config, announcement_id))
    }

    pub async fn delete_announcement(&self, announcement_id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.http_call(&self.cancel_call(announcement_id)).await?;
        Ok(())
    }

    /// Not wired to a backend; accepted and dropped.
    pub fn create_announcement(&self, request: &CreateAnnouncementRequest) -> Result<(), ApiError> {
        log::debug!("create_announcement is a no-op (title: {})", request.title);
        Ok(())
    }
}

fn cancel_url(config: &AppConfig, announcement_id: &str) -> String {
    format!(
        "{}/{}",
        config.api_url(&config.api.announcement_cancel),
        urlencoding::encode(announcement_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::load_config;
    use crate::system::session::FixedSession;
    use serde_json::json;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("application/pdf"), "PDF");
        assert_eq!(file_extension("application/png"), "PNG");
        assert_eq!(file_extension("text/plain"), "JPEG");
        assert_eq!(file_extension("image/png"), "JPEG");
    }

    #[test]
    fn test_inbox_stub_is_successful_envelope() {
        let envelope = inbox_announcement_stub();
        assert_eq!(envelope.response_code.as_deref(), Some("OK"));
        assert_eq!(envelope.params.status.as_deref(), Some("successful"));
        assert_eq!(envelope.params.error_message(), None);
        let announcements = &envelope.result.announcements;
        assert_eq!(announcements.len(), 4);
        assert_eq!(announcements[3].attachments.len(), 3);
        assert_eq!(
            file_extension(&announcements[0].attachments[0].mimetype),
            "PDF"
        );
    }

    #[test]
    fn test_cancel_url() {
        let config = load_config();
        assert_eq!(cancel_url(&config, "1"), "/api/v1/announcement/cancel/1");
        assert_eq!(
            cancel_url(&config, "a b"),
            "/api/v1/announcement/cancel/a%20b"
        );
    }

    #[test]
    fn test_outbox_is_json_post() {
        let config = load_config();
        let session = FixedSession::user("u-1");
        let service = AnnouncementService::new(&config, &session);

        let call = service.outbox_call("u-1").unwrap();
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.url, "/api/announcement/v1/user/outbox");
        assert_eq!(
            call.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        assert_eq!(call.body, Some(json!({"request": {"userId": "u-1"}})));

        assert_eq!(service.outbox_call(""), Err(ApiError::NotAuthenticated));
    }

    #[test]
    fn test_cancel_is_get_without_body() {
        let config = load_config();
        let session = FixedSession::default();
        let service = AnnouncementService::new(&config, &session);

        let call = service.cancel_call("a-42");
        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.url, "/api/v1/announcement/cancel/a-42");
        assert!(call.headers.is_empty());
        assert_eq!(call.body, None);
    }

    #[test]
    fn test_create_is_noop() {
        let config = load_config();
        let session = FixedSession::user("u-1");
        let service = AnnouncementService::new(&config, &session);
        assert!(service
            .create_announcement(&CreateAnnouncementRequest::default())
            .is_ok());
        assert_eq!(service.inbox_announcement_stub().result.announcements.len(), 4);
    }
}
