//! # Request Errors
//!
//! Every failed call to the remote service ends up as one `RequestError`
//! carrying a single human-readable message. The message is resolved from
//! the error response body when it has one, otherwise from the status code.

use serde_json::Value;
use thiserror::Error;

/// Message used when a call failed without any HTTP response to inspect
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

/// Body of a non-2xx response, as received
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// Raw text, which may still contain serialized JSON
    Text(String),
    /// Body already decoded as JSON
    Json(Value),
}

impl ErrorPayload {
    /// Classify a response body. JSON content types are decoded eagerly;
    /// anything else (or JSON that fails to decode) stays raw text.
    /// An empty body carries no payload.
    pub fn classify(content_type: Option<&str>, body: &[u8]) -> Option<Self> {
        if body.is_empty() {
            return None;
        }

        if content_type.is_some_and(is_json_content_type) {
            if let Ok(value) = serde_json::from_slice::<Value>(body) {
                return Some(Self::Json(value));
            }
        }

        Some(Self::Text(String::from_utf8_lossy(body).into_owned()))
    }

    /// Message carried by the payload, if one can be found
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Text(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(value) => message_field(&value),
                Err(_) if raw.is_empty() => None,
                Err(_) => Some(raw.clone()),
            },
            Self::Json(value) => message_field(value),
        }
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

/// Read a truthy `message` field. Scalars are stringified; empty strings,
/// zero, `false`, null and nested values do not count as a message.
fn message_field(value: &Value) -> Option<String> {
    match value.get("message")? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// The single error kind produced by the users API client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    /// Error for a response that came back with a non-2xx status
    pub fn from_response(status: u16, payload: Option<&ErrorPayload>) -> Self {
        let message = payload
            .and_then(ErrorPayload::message)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self { message }
    }

    /// Error for a failure that produced no HTTP response
    pub fn unexpected() -> Self {
        Self {
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    /// Read the body of a failed response and resolve its message
    pub async fn from_http_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let payload = match response.bytes().await {
            Ok(body) => ErrorPayload::classify(content_type.as_deref(), &body),
            Err(e) => {
                tracing::debug!("Failed to read error response body: {e}");
                None
            }
        };

        tracing::debug!("Request failed with status {status}, payload: {payload:?}");
        Self::from_response(status, payload.as_ref())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        tracing::debug!("Transport failure: {err}");
        match err.status() {
            Some(status) => Self::from_response(status.as_u16(), None),
            None => Self::unexpected(),
        }
    }
}
