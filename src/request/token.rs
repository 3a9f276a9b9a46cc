//! Token-Request Builder
//!
//! Shapes token-endpoint requests for all eight grant types from a single
//! declarative field table, plus the biometric-setup specialization.

use base64::Engine;
use std::collections::HashMap;

use crate::core::transport::{HttpMethod, HttpRequest};
use crate::error::{AuthError, AuthResult};
use crate::types::{ClientConfig, DeviceInfo, EndpointMetadata, GrantType, TokenRequestParams};

/// Build a token-endpoint request.
///
/// `client_id` and `grant_type` are always emitted; every optional field is
/// emitted exactly when present and non-empty. The builder encodes whatever
/// the caller supplied and does not validate grant-type combinations. A
/// Bearer header is attached only when `access_token` is set.
pub fn build_token_request(
    metadata: &EndpointMetadata,
    config: &ClientConfig,
    params: &TokenRequestParams,
) -> AuthResult<HttpRequest> {
    let mut fields: Vec<(&'static str, String)> = vec![
        ("client_id", config.client_id.clone()),
        ("grant_type", params.grant_type.as_str().to_string()),
    ];

    let device_info = params
        .device_info
        .as_ref()
        .map(encode_device_info)
        .transpose()?;

    let optional: [(&'static str, Option<String>); 13] = [
        ("code", params.code.clone()),
        ("redirect_uri", params.redirect_uri.clone()),
        ("code_verifier", params.code_verifier.clone()),
        ("refresh_token", params.refresh_token.clone()),
        ("jwt", params.jwt.clone()),
        ("scope", params.scope.as_ref().map(|s| s.join(" "))),
        ("audience", params.audience.clone()),
        ("subject_token", params.subject_token.clone()),
        ("subject_token_type", params.subject_token_type.clone()),
        ("actor_token", params.actor_token.clone()),
        ("actor_token_type", params.actor_token_type.clone()),
        ("device_secret", params.device_secret.clone()),
        ("x_device_info", device_info),
    ];

    for (name, value) in optional {
        match value {
            Some(v) if !v.is_empty() => fields.push((name, v)),
            _ => {}
        }
    }

    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: metadata.token_endpoint.clone(),
        headers: form_headers(params.access_token.as_deref()),
        body: Some(encode_form(&fields)),
        timeout: Some(config.timeout),
    })
}

/// Build a biometric-setup request: registers a signed device-key assertion
/// against the session identified by `access_token`.
pub fn build_biometric_setup_request(
    metadata: &EndpointMetadata,
    config: &ClientConfig,
    access_token: &str,
    jwt: &str,
) -> HttpRequest {
    let fields = vec![
        ("client_id", config.client_id.clone()),
        ("grant_type", GrantType::Biometric.as_str().to_string()),
        ("jwt", jwt.to_string()),
    ];

    HttpRequest {
        method: HttpMethod::Post,
        url: metadata.token_endpoint.clone(),
        headers: form_headers(Some(access_token)),
        body: Some(encode_form(&fields)),
        timeout: Some(config.timeout),
    }
}

/// Headers for a form-encoded POST, with an optional Bearer credential.
pub(crate) fn form_headers(bearer: Option<&str>) -> HashMap<String, String> {
    let mut headers = HashMap::from([
        (
            "content-type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        ),
        ("accept".to_string(), "application/json".to_string()),
    ]);
    if let Some(token) = bearer {
        headers.insert("authorization".to_string(), format!("Bearer {}", token));
    }
    headers
}

/// Percent-encode a form body, preserving field order.
pub(crate) fn encode_form(fields: &[(&str, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in fields {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

fn encode_device_info(info: &DeviceInfo) -> AuthResult<String> {
    let json = serde_json::to_vec(info).map_err(|e| AuthError::Decode {
        message: format!("failed to encode device info: {}", e),
    })?;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json))
}
