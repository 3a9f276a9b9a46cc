//! Auxiliary API Types
//!
//! User-info, challenge and app-session-token payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Envelope wrapping auxiliary endpoint payloads: `{"result": …}`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub result: T,
}

/// OIDC user-info response.
///
/// Claims keep their verbatim wire names (standard OIDC snake_case);
/// anything else lands in `extra`.
#[derive(Clone, Debug, Deserialize)]
pub struct UserInfo {
    /// Subject identifier.
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone_number_verified: Option<bool>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    /// Non-standard claims.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Purpose of an out-of-band challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengePurpose {
    /// Signing an anonymous-user key assertion.
    AnonymousRequest,
    /// Signing a biometric key assertion.
    BiometricRequest,
    /// Signing an app-to-app key assertion.
    App2appRequest,
}

impl ChallengePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnonymousRequest => "anonymous_request",
            Self::BiometricRequest => "biometric_request",
            Self::App2appRequest => "app2app_request",
        }
    }
}

/// One-time challenge issued for key-assertion signing.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResponse {
    /// Opaque challenge token, embedded into the signed assertion.
    pub token: String,
    /// When the challenge stops being accepted.
    pub expire_at: DateTime<Utc>,
}

/// Short-lived token used to carry an app session into a web view.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSessionTokenResponse {
    /// Opaque session token.
    pub app_session_token: String,
    /// When the token expires.
    pub expire_at: DateTime<Utc>,
}

impl std::fmt::Debug for AppSessionTokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSessionTokenResponse")
            .field("app_session_token", &"[REDACTED]")
            .field("expire_at", &self.expire_at)
            .finish()
    }
}
