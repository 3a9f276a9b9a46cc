//! Token Types
//!
//! Grant types, token-request parameters and the token response.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Grant type selecting which token-issuance variant a request uses.
///
/// Closed enumeration; the wire representation lives in [`GrantType::as_str`]
/// so protocol strings never appear at call sites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GrantType {
    /// Exchange an authorization code.
    #[default]
    AuthorizationCode,
    /// Refresh an existing session.
    RefreshToken,
    /// Promote or create an anonymous user.
    Anonymous,
    /// Authenticate with a device-bound biometric key.
    Biometric,
    /// Re-authenticate with a previously issued ID token.
    IdToken,
    /// App-to-app authorization handoff.
    App2App,
    /// Authenticate for a settings action.
    SettingsAction,
    /// Exchange one token for another.
    TokenExchange,
}

impl GrantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization_code",
            Self::RefreshToken => "refresh_token",
            Self::Anonymous => "anonymous",
            Self::Biometric => "biometric",
            Self::IdToken => "id_token",
            Self::App2App => "app2app",
            Self::SettingsAction => "settings_action",
            Self::TokenExchange => "token_exchange",
        }
    }

    /// Every grant type, in declaration order.
    pub const ALL: [GrantType; 8] = [
        Self::AuthorizationCode,
        Self::RefreshToken,
        Self::Anonymous,
        Self::Biometric,
        Self::IdToken,
        Self::App2App,
        Self::SettingsAction,
        Self::TokenExchange,
    ];
}

/// Parameters for a token-endpoint request.
///
/// Only `grant_type` is required. Callers populate the fields meaningful to
/// the selected grant type; the builder encodes whatever is present and does
/// not validate combinations. Empty strings are treated as absent.
#[derive(Clone, Debug, Default)]
pub struct TokenRequestParams {
    /// Grant type.
    pub grant_type: GrantType,
    /// Authorization code (authorization_code).
    pub code: Option<String>,
    /// Redirect URI used in the authorization request.
    pub redirect_uri: Option<String>,
    /// PKCE code verifier.
    pub code_verifier: Option<String>,
    /// Refresh token (refresh_token).
    pub refresh_token: Option<String>,
    /// Signed key assertion (anonymous, biometric, app2app).
    pub jwt: Option<String>,
    /// Requested scopes, space-joined on the wire.
    pub scope: Option<Vec<String>>,
    /// Target audience (token_exchange).
    pub audience: Option<String>,
    /// Subject token (token_exchange).
    pub subject_token: Option<String>,
    /// Subject token type (token_exchange).
    pub subject_token_type: Option<String>,
    /// Actor token (token_exchange).
    pub actor_token: Option<String>,
    /// Actor token type (token_exchange).
    pub actor_token_type: Option<String>,
    /// Device secret bound to the session.
    pub device_secret: Option<String>,
    /// Device description, JSON-serialized then base64url-encoded into a
    /// single `x_device_info` field.
    pub device_info: Option<DeviceInfo>,
    /// Access token. Never placed in the body; when present a
    /// `Authorization: Bearer` header is attached (re-auth flows).
    pub access_token: Option<String>,
}

/// Device description attached to token requests.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
}

/// Token response from the token endpoint.
///
/// Every field is optional: different grant types return different subsets.
#[derive(Clone, Deserialize)]
pub struct OidcTokenResponse {
    /// ID token (OIDC).
    #[serde(default)]
    pub id_token: Option<String>,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Access token.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Refresh token.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Device secret bound to the session.
    #[serde(default)]
    pub device_secret: Option<String>,
    /// Authorization code (app2app).
    #[serde(default)]
    pub code: Option<String>,
    /// Additional fields.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl std::fmt::Debug for OidcTokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            if value.is_some() {
                "[REDACTED]"
            } else {
                "None"
            }
        }
        f.debug_struct("OidcTokenResponse")
            .field("id_token", &redact(&self.id_token))
            .field("token_type", &self.token_type)
            .field("access_token", &redact(&self.access_token))
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &redact(&self.refresh_token))
            .field("device_secret", &redact(&self.device_secret))
            .field("code", &redact(&self.code))
            .finish()
    }
}
