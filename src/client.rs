//! Auth API Client
//!
//! High-level facade composing discovery, request builders, transport and
//! response classification into the public operation set.

use std::sync::Arc;
use url::Url;

use crate::core::{EndpointCache, HttpTransport, ReqwestHttpTransport};
use crate::error::AuthResult;
use crate::request;
use crate::response;
use crate::sync::SyncBridge;
use crate::types::{
    AppSessionTokenResponse, AuthorizationRequest, ChallengePurpose, ChallengeResponse,
    ClientConfig, EndpointMetadata, OidcTokenResponse, TokenRequestParams, UserInfo,
};

/// OAuth2/OIDC protocol client.
///
/// Every operation first ensures the endpoint metadata is available (fetched
/// once per client lifetime), builds a request, executes it through the
/// transport and classifies/decodes the response. Operations may be invoked
/// concurrently; a discovery failure short-circuits the operation that
/// observed it and the next call retries discovery.
pub struct AuthApiClient<T: HttpTransport = ReqwestHttpTransport> {
    inner: Arc<ClientInner<T>>,
    bridge: SyncBridge,
}

struct ClientInner<T: HttpTransport> {
    config: ClientConfig,
    transport: Arc<T>,
    endpoints: EndpointCache,
}

impl AuthApiClient<ReqwestHttpTransport> {
    /// Create a new client with the default reqwest transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestHttpTransport::new())
    }
}

impl<T: HttpTransport> AuthApiClient<T> {
    /// Create a client with a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    /// Create a client sharing an existing transport handle.
    pub fn with_shared_transport(config: ClientConfig, transport: Arc<T>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                config,
                transport,
                endpoints: EndpointCache::new(),
            }),
            bridge: SyncBridge::new(),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Fetch (or return the cached) endpoint metadata.
    pub async fn fetch_metadata(&self) -> AuthResult<EndpointMetadata> {
        self.inner.metadata().await
    }

    /// Build the authorization URL for a user-interactive flow.
    pub async fn authorization_url(&self, request: AuthorizationRequest) -> AuthResult<Url> {
        self.inner.authorization_url(request).await
    }

    /// Request tokens from the token endpoint.
    pub async fn request_token(
        &self,
        params: TokenRequestParams,
    ) -> AuthResult<OidcTokenResponse> {
        self.inner.request_token(params).await
    }

    /// Register a signed biometric key assertion against an existing session.
    pub async fn setup_biometric(&self, access_token: &str, jwt: &str) -> AuthResult<()> {
        self.inner.setup_biometric(access_token, jwt).await
    }

    /// Fetch OIDC user info.
    pub async fn user_info(&self, access_token: &str) -> AuthResult<UserInfo> {
        self.inner.user_info(access_token).await
    }

    /// Revoke a token.
    pub async fn revoke_token(&self, token: &str) -> AuthResult<()> {
        self.inner.revoke_token(token).await
    }

    /// Request a one-time challenge for key-assertion signing.
    pub async fn request_challenge(
        &self,
        purpose: ChallengePurpose,
    ) -> AuthResult<ChallengeResponse> {
        self.inner.request_challenge(purpose).await
    }

    /// Exchange a refresh token for an app session token.
    pub async fn request_app_session_token(
        &self,
        refresh_token: &str,
    ) -> AuthResult<AppSessionTokenResponse> {
        self.inner.request_app_session_token(refresh_token).await
    }

    /// Relay a WeChat authorization callback to the server.
    pub async fn resolve_wechat_callback(&self, code: &str, state: &str) -> AuthResult<()> {
        self.inner.resolve_wechat_callback(code, state).await
    }
}

impl<T: HttpTransport + 'static> AuthApiClient<T> {
    /// Blocking view over the same operation set.
    ///
    /// See [`BlockingAuthApiClient`] for the calling-context precondition.
    pub fn blocking(&self) -> BlockingAuthApiClient<'_, T> {
        BlockingAuthApiClient { client: self }
    }
}

impl<T: HttpTransport> ClientInner<T> {
    async fn metadata(&self) -> AuthResult<EndpointMetadata> {
        self.endpoints.get(&*self.transport, &self.config).await
    }

    async fn authorization_url(&self, request: AuthorizationRequest) -> AuthResult<Url> {
        let metadata = self.metadata().await?;
        request::build_authorization_url(&metadata, &self.config, &request)
    }

    async fn request_token(&self, params: TokenRequestParams) -> AuthResult<OidcTokenResponse> {
        let metadata = self.metadata().await?;
        let http_request = request::build_token_request(&metadata, &self.config, &params)?;
        tracing::debug!(grant_type = params.grant_type.as_str(), "requesting token");
        let http_response = self.transport.send(http_request).await?;
        response::json_body(&http_response)
    }

    async fn setup_biometric(&self, access_token: &str, jwt: &str) -> AuthResult<()> {
        let metadata = self.metadata().await?;
        let http_request = request::token::build_biometric_setup_request(
            &metadata,
            &self.config,
            access_token,
            jwt,
        );
        let http_response = self.transport.send(http_request).await?;
        response::empty_body(&http_response)
    }

    async fn user_info(&self, access_token: &str) -> AuthResult<UserInfo> {
        let metadata = self.metadata().await?;
        let http_request =
            request::api::build_user_info_request(&metadata, &self.config, access_token)?;
        let http_response = self.transport.send(http_request).await?;
        response::json_body(&http_response)
    }

    async fn revoke_token(&self, token: &str) -> AuthResult<()> {
        let metadata = self.metadata().await?;
        let http_request = request::api::build_revocation_request(&metadata, &self.config, token)?;
        let http_response = self.transport.send(http_request).await?;
        response::empty_body(&http_response)
    }

    async fn request_challenge(
        &self,
        purpose: ChallengePurpose,
    ) -> AuthResult<ChallengeResponse> {
        let metadata = self.metadata().await?;
        let http_request =
            request::api::build_challenge_request(&metadata, &self.config, purpose)?;
        tracing::debug!(purpose = purpose.as_str(), "requesting challenge");
        let http_response = self.transport.send(http_request).await?;
        response::enveloped_json_body(&http_response)
    }

    async fn request_app_session_token(
        &self,
        refresh_token: &str,
    ) -> AuthResult<AppSessionTokenResponse> {
        let metadata = self.metadata().await?;
        let http_request =
            request::api::build_app_session_token_request(&metadata, &self.config, refresh_token)?;
        let http_response = self.transport.send(http_request).await?;
        response::enveloped_json_body(&http_response)
    }

    async fn resolve_wechat_callback(&self, code: &str, state: &str) -> AuthResult<()> {
        let metadata = self.metadata().await?;
        let http_request =
            request::api::build_wechat_callback_request(&metadata, &self.config, code, state)?;
        let http_response = self.transport.send(http_request).await?;
        response::empty_body(&http_response)
    }
}

/// Blocking view over [`AuthApiClient`].
///
/// Obtained via [`AuthApiClient::blocking`]. Every method mirrors its async
/// counterpart exactly: the operation runs on a dedicated bridge runtime and
/// the calling thread blocks until it completes. Must not be called from an
/// async context, where it would block a runtime worker thread.
pub struct BlockingAuthApiClient<'a, T: HttpTransport> {
    client: &'a AuthApiClient<T>,
}

impl<T: HttpTransport + 'static> BlockingAuthApiClient<'_, T> {
    /// Blocking [`AuthApiClient::fetch_metadata`].
    pub fn fetch_metadata(&self) -> AuthResult<EndpointMetadata> {
        let inner = self.client.inner.clone();
        self.client.bridge.run(async move { inner.metadata().await })
    }

    /// Blocking [`AuthApiClient::authorization_url`].
    pub fn authorization_url(&self, request: AuthorizationRequest) -> AuthResult<Url> {
        let inner = self.client.inner.clone();
        self.client
            .bridge
            .run(async move { inner.authorization_url(request).await })
    }

    /// Blocking [`AuthApiClient::request_token`].
    pub fn request_token(&self, params: TokenRequestParams) -> AuthResult<OidcTokenResponse> {
        let inner = self.client.inner.clone();
        self.client
            .bridge
            .run(async move { inner.request_token(params).await })
    }

    /// Blocking [`AuthApiClient::setup_biometric`].
    pub fn setup_biometric(&self, access_token: &str, jwt: &str) -> AuthResult<()> {
        let inner = self.client.inner.clone();
        let access_token = access_token.to_string();
        let jwt = jwt.to_string();
        self.client
            .bridge
            .run(async move { inner.setup_biometric(&access_token, &jwt).await })
    }

    /// Blocking [`AuthApiClient::user_info`].
    pub fn user_info(&self, access_token: &str) -> AuthResult<UserInfo> {
        let inner = self.client.inner.clone();
        let access_token = access_token.to_string();
        self.client
            .bridge
            .run(async move { inner.user_info(&access_token).await })
    }

    /// Blocking [`AuthApiClient::revoke_token`].
    pub fn revoke_token(&self, token: &str) -> AuthResult<()> {
        let inner = self.client.inner.clone();
        let token = token.to_string();
        self.client
            .bridge
            .run(async move { inner.revoke_token(&token).await })
    }

    /// Blocking [`AuthApiClient::request_challenge`].
    pub fn request_challenge(&self, purpose: ChallengePurpose) -> AuthResult<ChallengeResponse> {
        let inner = self.client.inner.clone();
        self.client
            .bridge
            .run(async move { inner.request_challenge(purpose).await })
    }

    /// Blocking [`AuthApiClient::request_app_session_token`].
    pub fn request_app_session_token(
        &self,
        refresh_token: &str,
    ) -> AuthResult<AppSessionTokenResponse> {
        let inner = self.client.inner.clone();
        let refresh_token = refresh_token.to_string();
        self.client
            .bridge
            .run(async move { inner.request_app_session_token(&refresh_token).await })
    }

    /// Blocking [`AuthApiClient::resolve_wechat_callback`].
    pub fn resolve_wechat_callback(&self, code: &str, state: &str) -> AuthResult<()> {
        let inner = self.client.inner.clone();
        let code = code.to_string();
        let state = state.to_string();
        self.client
            .bridge
            .run(async move { inner.resolve_wechat_callback(&code, &state).await })
    }
}
