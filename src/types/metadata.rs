//! Endpoint Metadata
//!
//! The subset of the OIDC discovery document this client consumes.

use serde::{Deserialize, Serialize};

/// OIDC discovery document, decoded from
/// `{issuer}/.well-known/openid-configuration`.
///
/// Immutable once fetched; the [`EndpointCache`](crate::core::EndpointCache)
/// stores one instance per client for the client's whole lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EndpointMetadata {
    /// Issuer identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Authorization endpoint URL. Auxiliary endpoint paths are resolved
    /// against this URL's origin.
    pub authorization_endpoint: String,
    /// Token endpoint URL.
    pub token_endpoint: String,
    /// OIDC userinfo endpoint (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userinfo_endpoint: Option<String>,
    /// Token revocation endpoint (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revocation_endpoint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_parsing() {
        let json = r#"{
            "issuer": "https://auth.example.com",
            "authorization_endpoint": "https://auth.example.com/oauth2/authorize",
            "token_endpoint": "https://auth.example.com/oauth2/token",
            "userinfo_endpoint": "https://auth.example.com/oauth2/userinfo",
            "revocation_endpoint": "https://auth.example.com/oauth2/revoke",
            "jwks_uri": "https://auth.example.com/oauth2/jwks"
        }"#;

        let metadata: EndpointMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.issuer.as_deref(), Some("https://auth.example.com"));
        assert_eq!(
            metadata.token_endpoint,
            "https://auth.example.com/oauth2/token"
        );
        assert_eq!(
            metadata.revocation_endpoint.as_deref(),
            Some("https://auth.example.com/oauth2/revoke")
        );
    }

    #[test]
    fn test_metadata_missing_token_endpoint_is_an_error() {
        let json = r#"{"authorization_endpoint": "https://auth.example.com/oauth2/authorize"}"#;
        assert!(serde_json::from_str::<EndpointMetadata>(json).is_err());
    }
}
