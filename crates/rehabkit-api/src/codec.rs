//! Serialization bridge between typed structures and wire JSON
//!
//! The transport only ever sees text; these two functions are the sole
//! crossing point. Failures surface as `Unknown` API errors rather than
//! panics or separate error types.

use serde::de::DeserializeOwned;
use serde::Serialize;

use rehabkit_http::{ApiError, ErrorKind, Result};

/// Encode a typed request into JSON text
pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|error| {
        ApiError::new(
            ErrorKind::Unknown,
            format!("Failed to encode request: {error}"),
            0,
        )
    })
}

/// Decode JSON text into a typed response
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|error| {
        ApiError::new(
            ErrorKind::Unknown,
            format!("Failed to decode response: {error}"),
            0,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LoginRequest;

    #[test]
    fn test_encode_login_request() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        };
        let text = encode(&request).unwrap();
        assert_eq!(text, r#"{"email":"a@b.com","password":"x"}"#);
    }

    #[test]
    fn test_decode_failure_is_unknown_error() {
        let result: Result<LoginRequest> = decode("not json");
        let error = result.unwrap_err();
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert_eq!(error.status_code, 0);
        assert!(error.message.starts_with("Failed to decode response"));
    }
}
