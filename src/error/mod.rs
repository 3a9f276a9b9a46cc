//! Error Types
//!
//! Error taxonomy and response classification.
//!
//! Every failed operation produces exactly one [`AuthError`] variant. Non-2xx
//! responses run through [`classify_error_response`], which tries the known
//! error shapes in a fixed priority order: OAuth protocol error first, then
//! the generic structured API error, then a status-code fallback carrying the
//! raw body.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Result type for protocol-client operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Root error type for the protocol client.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid client configuration or endpoint URL.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Network-level failure; the request may not have reached the server.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Structured OAuth protocol error from the server, surfaced untouched.
    #[error("oauth protocol error: {0}")]
    OAuth(OAuthError),

    /// Structured server API error, surfaced untouched.
    #[error("api error: {0}")]
    Api(ServerError),

    /// Non-2xx response matching neither known error shape.
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// 2xx response whose body failed to parse into the expected type.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Blocking-bridge failure: runtime setup failed or the async operation
    /// was dropped without signaling completion.
    #[error("sync bridge error: {message}")]
    Bridge { message: String },
}

impl AuthError {
    /// Stable error code for telemetry.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "AUTH_CONFIG",
            Self::Transport(_) => "AUTH_TRANSPORT",
            Self::OAuth(_) => "AUTH_OAUTH",
            Self::Api(_) => "AUTH_API",
            Self::UnexpectedStatus { .. } => "AUTH_STATUS",
            Self::Decode { .. } => "AUTH_DECODE",
            Self::Bridge { .. } => "AUTH_BRIDGE",
        }
    }
}

/// Network/transport error.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("unexpected redirect to {location}")]
    UnexpectedRedirect { location: String },

    #[error("response too large: {size} bytes")]
    ResponseTooLarge { size: usize },

    #[error("failed to read response body: {message}")]
    BodyRead { message: String },
}

/// OAuth protocol error body: `{"error": "...", "error_description"?: "..."}`.
///
/// `error` is a plain string; this is what distinguishes the shape from the
/// generic API error, whose `error` field is a nested object.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OAuthError {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

impl std::fmt::Display for OAuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_description {
            Some(description) => write!(f, "{}: {}", self.error, description),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Generic structured API error: the object nested under `{"error": {…}}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Remaining server-provided detail.
    #[serde(flatten)]
    pub info: HashMap<String, serde_json::Value>,
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "{}: {}", code, message),
            (Some(code), None) => write!(f, "{}", code),
            (None, Some(message)) => write!(f, "{}", message),
            (None, None) => write!(f, "unknown server error"),
        }
    }
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ServerError,
}

/// Classify a non-2xx response body.
///
/// Priority order: OAuth protocol error shape, then generic API error shape,
/// then [`AuthError::UnexpectedStatus`] carrying the raw body (which may be
/// empty).
pub fn classify_error_response(status: u16, body: &str) -> AuthError {
    let error = if let Ok(oauth) = serde_json::from_str::<OAuthError>(body) {
        AuthError::OAuth(oauth)
    } else if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        AuthError::Api(envelope.error)
    } else {
        AuthError::UnexpectedStatus {
            status,
            body: body.to_string(),
        }
    };
    tracing::debug!(status, code = error.error_code(), "classified error response");
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_shape_classified_first() {
        let body = r#"{"error":"invalid_grant","error_description":"refresh token expired"}"#;
        match classify_error_response(400, body) {
            AuthError::OAuth(oauth) => {
                assert_eq!(oauth.error, "invalid_grant");
                assert_eq!(
                    oauth.error_description.as_deref(),
                    Some("refresh token expired")
                );
            }
            other => panic!("expected OAuth, got {:?}", other),
        }
    }

    #[test]
    fn test_oauth_shape_wins_even_with_extra_fields() {
        // Extra keys alongside a string `error` must not demote the body to
        // the generic API shape.
        let body = r#"{"error":"invalid_request","code":"X","message":"noise"}"#;
        assert!(matches!(
            classify_error_response(400, body),
            AuthError::OAuth(_)
        ));
    }

    #[test]
    fn test_nested_error_object_is_api_error() {
        let body = r#"{"error":{"code":"InvalidGrant","message":"grant is not usable"}}"#;
        match classify_error_response(400, body) {
            AuthError::Api(server) => {
                assert_eq!(server.code.as_deref(), Some("InvalidGrant"));
                assert_eq!(server.message.as_deref(), Some("grant is not usable"));
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_keeps_extra_detail() {
        let body = r#"{"error":{"code":"Invalid","message":"m","reason":"ValidationFailed"}}"#;
        match classify_error_response(400, body) {
            AuthError::Api(server) => {
                assert_eq!(
                    server.info.get("reason"),
                    Some(&serde_json::json!("ValidationFailed"))
                );
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_unclassifiable_body_falls_back_to_status() {
        match classify_error_response(500, "<html>oops</html>") {
            AuthError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "<html>oops</html>");
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        assert!(matches!(
            classify_error_response(503, ""),
            AuthError::UnexpectedStatus { status: 503, .. }
        ));
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            AuthError::Config {
                message: String::new(),
            },
            AuthError::Transport(TransportError::ConnectionFailed {
                message: String::new(),
            }),
            AuthError::OAuth(OAuthError {
                error: String::new(),
                error_description: None,
                error_uri: None,
            }),
            AuthError::UnexpectedStatus {
                status: 500,
                body: String::new(),
            },
            AuthError::Decode {
                message: String::new(),
            },
            AuthError::Bridge {
                message: String::new(),
            },
        ];
        let codes: std::collections::HashSet<_> =
            errors.iter().map(|e| e.error_code()).collect();
        assert_eq!(codes.len(), errors.len());
    }
}
