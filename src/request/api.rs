//! Auxiliary Endpoint Builders
//!
//! User-info, revocation, challenge, app-session-token and WeChat-callback
//! requests. Endpoints without a discovery entry are resolved by path
//! against the authorization endpoint's origin.

use std::collections::HashMap;
use url::Url;

use crate::core::transport::{HttpMethod, HttpRequest};
use crate::error::{AuthError, AuthResult};
use crate::request::token::{encode_form, form_headers};
use crate::types::{ChallengePurpose, ClientConfig, EndpointMetadata, PLATFORM};

/// Challenge issuance path.
pub const CHALLENGE_PATH: &str = "/oauth2/challenge";
/// App-session-token exchange path.
pub const APP_SESSION_TOKEN_PATH: &str = "/oauth2/app_session_token";
/// WeChat callback relay path.
pub const WECHAT_CALLBACK_PATH: &str = "/sso/wechat/callback";

/// Resolve `path` against the authorization endpoint's origin.
pub(crate) fn resolve_against_origin(
    metadata: &EndpointMetadata,
    path: &str,
) -> AuthResult<Url> {
    let mut url = Url::parse(&metadata.authorization_endpoint).map_err(|e| AuthError::Config {
        message: format!("invalid authorization endpoint: {}", e),
    })?;
    if url.cannot_be_a_base() {
        return Err(AuthError::Config {
            message: format!(
                "authorization endpoint has no origin: {}",
                metadata.authorization_endpoint
            ),
        });
    }
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Build a user-info request: GET with only a Bearer header.
pub fn build_user_info_request(
    metadata: &EndpointMetadata,
    config: &ClientConfig,
    access_token: &str,
) -> AuthResult<HttpRequest> {
    let endpoint = metadata.userinfo_endpoint.as_ref().ok_or_else(|| {
        AuthError::Config {
            message: "userinfo endpoint not advertised by the discovery document".to_string(),
        }
    })?;

    Ok(HttpRequest {
        method: HttpMethod::Get,
        url: endpoint.clone(),
        headers: HashMap::from([
            ("accept".to_string(), "application/json".to_string()),
            (
                "authorization".to_string(),
                format!("Bearer {}", access_token),
            ),
        ]),
        body: None,
        timeout: Some(config.timeout),
    })
}

/// Build a revocation request: form-encoded `{token}`.
pub fn build_revocation_request(
    metadata: &EndpointMetadata,
    config: &ClientConfig,
    token: &str,
) -> AuthResult<HttpRequest> {
    let endpoint = metadata.revocation_endpoint.as_ref().ok_or_else(|| {
        AuthError::Config {
            message: "revocation endpoint not advertised by the discovery document".to_string(),
        }
    })?;

    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: endpoint.clone(),
        headers: form_headers(None),
        body: Some(encode_form(&[("token", token.to_string())])),
        timeout: Some(config.timeout),
    })
}

/// Build a challenge-issuance request: JSON `{purpose}`.
pub fn build_challenge_request(
    metadata: &EndpointMetadata,
    config: &ClientConfig,
    purpose: ChallengePurpose,
) -> AuthResult<HttpRequest> {
    let url = resolve_against_origin(metadata, CHALLENGE_PATH)?;
    let body = serde_json::json!({ "purpose": purpose.as_str() }).to_string();

    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: url.into(),
        headers: json_headers(),
        body: Some(body),
        timeout: Some(config.timeout),
    })
}

/// Build an app-session-token exchange request: JSON `{refresh_token}`.
pub fn build_app_session_token_request(
    metadata: &EndpointMetadata,
    config: &ClientConfig,
    refresh_token: &str,
) -> AuthResult<HttpRequest> {
    let url = resolve_against_origin(metadata, APP_SESSION_TOKEN_PATH)?;
    let body = serde_json::json!({ "refresh_token": refresh_token }).to_string();

    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: url.into(),
        headers: json_headers(),
        body: Some(body),
        timeout: Some(config.timeout),
    })
}

/// Build a WeChat callback relay request: form-encoded `{code, state,
/// x_platform}`.
pub fn build_wechat_callback_request(
    metadata: &EndpointMetadata,
    config: &ClientConfig,
    code: &str,
    state: &str,
) -> AuthResult<HttpRequest> {
    let url = resolve_against_origin(metadata, WECHAT_CALLBACK_PATH)?;
    let fields = [
        ("code", code.to_string()),
        ("state", state.to_string()),
        ("x_platform", PLATFORM.to_string()),
    ];

    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: url.into(),
        headers: form_headers(None),
        body: Some(encode_form(&fields)),
        timeout: Some(config.timeout),
    })
}

fn json_headers() -> HashMap<String, String> {
    HashMap::from([
        ("content-type".to_string(), "application/json".to_string()),
        ("accept".to_string(), "application/json".to_string()),
    ])
}
