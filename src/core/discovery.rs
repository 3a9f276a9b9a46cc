//! OIDC Discovery
//!
//! Single-fetch-then-cache-forever endpoint metadata.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::core::transport::{HttpMethod, HttpRequest, HttpTransport};
use crate::error::{AuthError, AuthResult};
use crate::response;
use crate::types::{ClientConfig, EndpointMetadata};

/// Endpoint metadata cache scoped to one client instance.
///
/// The discovery document is fetched on first use, stored on success and
/// returned without network I/O from then on. A failed fetch leaves the
/// cache empty so the next call retries from scratch; failures are never
/// cached and no backoff is applied. Two callers racing the first fetch may
/// both issue the (idempotent) GET; the first successful write wins and
/// later successes observe the stored value.
#[derive(Default)]
pub struct EndpointCache {
    cached: RwLock<Option<EndpointMetadata>>,
}

impl EndpointCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery URL for an issuer.
    pub fn discovery_url(issuer: &str) -> String {
        format!(
            "{}/.well-known/openid-configuration",
            issuer.trim_end_matches('/')
        )
    }

    /// Return the cached metadata, fetching it first if absent.
    pub async fn get<T: HttpTransport + ?Sized>(
        &self,
        transport: &T,
        config: &ClientConfig,
    ) -> AuthResult<EndpointMetadata> {
        if let Some(metadata) = self.cached.read().unwrap().clone() {
            tracing::trace!("endpoint metadata cache hit");
            return Ok(metadata);
        }

        let url = Self::discovery_url(&config.issuer);
        tracing::debug!(%url, "fetching endpoint metadata");

        let request = HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: HashMap::from([("accept".to_string(), "application/json".to_string())]),
            body: None,
            timeout: Some(config.timeout),
        };

        let http_response = transport.send(request).await?;
        let metadata: EndpointMetadata = response::json_body(&http_response)?;

        if metadata.authorization_endpoint.is_empty() || metadata.token_endpoint.is_empty() {
            return Err(AuthError::Decode {
                message: "discovery document missing required endpoints".to_string(),
            });
        }

        let mut slot = self.cached.write().unwrap();
        match &*slot {
            // Another caller won the race; keep its document.
            Some(existing) => Ok(existing.clone()),
            None => {
                *slot = Some(metadata.clone());
                Ok(metadata)
            }
        }
    }

    /// Whether metadata has been stored.
    pub fn is_populated(&self) -> bool {
        self.cached.read().unwrap().is_some()
    }
}
