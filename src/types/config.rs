//! Configuration Types
//!
//! Client configuration for the protocol client.

use std::time::Duration;

/// Configuration for an [`AuthApiClient`](crate::client::AuthApiClient).
///
/// `issuer` is the authorization server origin, e.g.
/// `https://auth.example.com`. The discovery document is fetched from
/// `{issuer}/.well-known/openid-configuration`.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Authorization server origin.
    pub issuer: String,
    /// OAuth2 client identifier (public client).
    pub client_id: String,
    /// HTTP timeout applied to every request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            issuer: String::new(),
            client_id: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Platform tag sent as `x_platform` on authorization URLs and the WeChat
/// callback relay.
pub const PLATFORM: &str = "rust";
