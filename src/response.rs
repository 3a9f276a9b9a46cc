//! Response Decoders
//!
//! Success-path decoding shared by every operation. Status is checked
//! first; non-2xx responses run through the error classifier, and a 2xx
//! body that fails to parse is a [`AuthError::Decode`], never silently
//! defaulted.

use serde::de::DeserializeOwned;

use crate::core::transport::HttpResponse;
use crate::error::{classify_error_response, AuthError, AuthResult};
use crate::types::ApiEnvelope;

/// Gate on the success status range, classifying failures.
pub fn expect_success(response: &HttpResponse) -> AuthResult<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(classify_error_response(response.status, &response.body))
    }
}

/// Decode a JSON body after the status gate.
pub fn json_body<T: DeserializeOwned>(response: &HttpResponse) -> AuthResult<T> {
    expect_success(response)?;
    serde_json::from_str(&response.body).map_err(|e| AuthError::Decode {
        message: e.to_string(),
    })
}

/// Decode a `{"result": …}`-enveloped JSON body.
pub fn enveloped_json_body<T: DeserializeOwned>(response: &HttpResponse) -> AuthResult<T> {
    let envelope: ApiEnvelope<T> = json_body(response)?;
    Ok(envelope.result)
}

/// Accept any 2xx response and ignore the body.
pub fn empty_body(response: &HttpResponse) -> AuthResult<()> {
    expect_success(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChallengeResponse;

    #[test]
    fn test_json_body_decode_failure_on_success_status() {
        let response = HttpResponse {
            status: 200,
            body: "not json".to_string(),
        };
        let error = json_body::<serde_json::Value>(&response).unwrap_err();
        assert!(matches!(error, AuthError::Decode { .. }));
    }

    #[test]
    fn test_json_body_classifies_failures_before_decoding() {
        let response = HttpResponse {
            status: 400,
            body: r#"{"error":"invalid_request"}"#.to_string(),
        };
        let error = json_body::<serde_json::Value>(&response).unwrap_err();
        assert!(matches!(error, AuthError::OAuth(_)));
    }

    #[test]
    fn test_enveloped_json_body() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"result":{"token":"ch-1","expireAt":"2026-01-02T03:04:05Z"}}"#.to_string(),
        };
        let challenge: ChallengeResponse = enveloped_json_body(&response).unwrap();
        assert_eq!(challenge.token, "ch-1");
    }

    #[test]
    fn test_empty_body_accepts_any_2xx() {
        assert!(empty_body(&HttpResponse { status: 204, body: String::new() }).is_ok());
        assert!(empty_body(&HttpResponse { status: 500, body: String::new() }).is_err());
    }
}
