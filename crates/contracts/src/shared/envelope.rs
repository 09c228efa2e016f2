use serde::{Deserialize, Serialize};

/// Request wrapper expected by the platform APIs: `{"request": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRequest<T> {
    pub request: T,
}

impl<T> ApiRequest<T> {
    pub fn new(request: T) -> Self {
        Self { request }
    }
}

/// Status block shared by successful and failed responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseParams {
    #[serde(default)]
    pub resmsgid: Option<String>,
    #[serde(default)]
    pub msgid: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub errmsg: Option<serde_json::Value>,
}

impl ResponseParams {
    /// Server-supplied error message, only when it is a non-empty string.
    pub fn error_message(&self) -> Option<&str> {
        match &self.errmsg {
            Some(serde_json::Value::String(msg)) if !msg.trim().is_empty() => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Standard response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub ver: Option<String>,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub params: ResponseParams,
    #[serde(default)]
    pub response_code: Option<String>,
    pub result: T,
}

/// Body of a failed call. `result` is usually empty, so only `params` is kept.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub params: ResponseParams,
    #[serde(default)]
    pub response_code: Option<String>,
}

impl ApiErrorBody {
    /// Parses an error body, tolerating anything that is not an envelope.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn message(&self) -> Option<String> {
        self.params.error_message().map(str::to_string)
    }
}
