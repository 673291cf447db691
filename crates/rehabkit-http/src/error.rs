//! Error taxonomy and response classification

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Semantic category of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Transport-level failure, including timeout
    Network,
    /// HTTP 401
    Authentication,
    /// HTTP 4xx other than 401
    Validation,
    /// HTTP 5xx
    Server,
    /// Anything else, including unusable responses
    Unknown,
}

/// Error delivered for every failed request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status, 0 when the transport failed before a status was available
    pub status_code: u16,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code,
        }
    }
}

/// Maps a transport outcome to a typed [`ApiError`].
///
/// `status_code` is `None` when the transport produced no usable response.
/// The response body is consulted for a `message` or `error` string field;
/// bodies that fail to parse fall back to the per-status default silently.
pub fn classify(transport_succeeded: bool, status_code: Option<u16>, body: &str) -> ApiError {
    if !transport_succeeded {
        return ApiError::new(ErrorKind::Network, "Network request failed", 0);
    }

    let Some(status) = status_code else {
        return ApiError::new(ErrorKind::Unknown, "Invalid response", 0);
    };

    let (kind, fallback) = match status {
        401 => (
            ErrorKind::Authentication,
            "Authentication failed. Please check your API key.".to_string(),
        ),
        400..=499 => (ErrorKind::Validation, format!("Client error: {status}")),
        500.. => (ErrorKind::Server, format!("Server error: {status}")),
        _ => (ErrorKind::Unknown, format!("Unknown error: {status}")),
    };

    let message = extract_message(body).unwrap_or(fallback);
    ApiError::new(kind, message, status)
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    for field in ["message", "error"] {
        if let Some(text) = object.get(field).and_then(|v| v.as_str()) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}
