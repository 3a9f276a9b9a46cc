//! Configuration Builder
//!
//! Fluent builder for client configuration.

use std::time::Duration;
use url::Url;

use crate::error::{AuthError, AuthResult};
use crate::types::ClientConfig;

/// Client configuration builder.
#[derive(Default)]
pub struct ClientConfigBuilder {
    issuer: Option<String>,
    client_id: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Create new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the authorization server origin.
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the client identifier.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set the HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> AuthResult<ClientConfig> {
        let issuer = self
            .issuer
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AuthError::Config {
                message: "missing required field: issuer".to_string(),
            })?;
        Url::parse(&issuer).map_err(|e| AuthError::Config {
            message: format!("invalid issuer URL: {}", e),
        })?;

        let client_id = self
            .client_id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AuthError::Config {
                message: "missing required field: client_id".to_string(),
            })?;

        Ok(ClientConfig {
            issuer: issuer.trim_end_matches('/').to_string(),
            client_id,
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
        })
    }
}

/// Create a new configuration builder.
pub fn auth_config() -> ClientConfigBuilder {
    ClientConfigBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_complete_config() {
        let config = auth_config()
            .issuer("https://auth.example.com/")
            .client_id("client-1")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(config.issuer, "https://auth.example.com");
        assert_eq!(config.client_id, "client-1");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_issuer() {
        let error = auth_config().client_id("client-1").build().unwrap_err();
        assert!(matches!(error, AuthError::Config { .. }));
    }

    #[test]
    fn test_missing_client_id() {
        let error = auth_config()
            .issuer("https://auth.example.com")
            .build()
            .unwrap_err();
        assert!(matches!(error, AuthError::Config { .. }));
    }

    #[test]
    fn test_invalid_issuer_url() {
        let error = auth_config()
            .issuer("not a url")
            .client_id("client-1")
            .build()
            .unwrap_err();
        assert!(matches!(error, AuthError::Config { .. }));
    }
}
