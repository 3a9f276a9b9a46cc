//! OAuth2/OIDC Protocol Client
//!
//! The protocol core of an identity SDK: endpoint discovery, token-endpoint
//! requests for eight grant-type/extension flows, auxiliary endpoint calls
//! (user-info, revocation, biometric setup, challenge issuance,
//! app-session-token exchange, WeChat callback relay) and uniform response
//! classification. Every asynchronous operation has a blocking variant with
//! identical behavior.
//!
//! # Example
//!
//! ```rust,ignore
//! use oidc_auth_client::{auth_config, AuthApiClient, GrantType, TokenRequestParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = auth_config()
//!         .issuer("https://auth.example.com")
//!         .client_id("my-client-id")
//!         .build()?;
//!
//!     let client = AuthApiClient::new(config);
//!
//!     let tokens = client
//!         .request_token(TokenRequestParams {
//!             grant_type: GrantType::RefreshToken,
//!             refresh_token: Some("stored-refresh-token".to_string()),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("expires in: {:?}", tokens.expires_in);
//!     Ok(())
//! }
//! ```
//!
//! Blocking consumers (background-thread SDK integrations) use the same
//! operation set through [`AuthApiClient::blocking`]; the call blocks the
//! current thread and must not be made from an async context.
//!
//! # Architecture
//!
//! - `types`: protocol records and configuration
//! - `error`: error taxonomy and the three-tier response classifier
//! - `core`: transport adapter and the endpoint metadata cache
//! - `request`: pure request builders (authorization URL, token, auxiliary)
//! - `response`: success-path decoders
//! - `sync`: blocking bridge over the async operation set
//! - `builders`: fluent configuration builder
//! - `client`: the `AuthApiClient` facade

pub mod builders;
pub mod client;
pub mod core;
pub mod error;
pub mod request;
pub mod response;
pub mod sync;
pub mod types;

// Re-export main client
pub use client::{AuthApiClient, BlockingAuthApiClient};

// Re-export builders
pub use builders::{auth_config, ClientConfigBuilder};

// Re-export errors
pub use error::{
    classify_error_response, AuthError, AuthResult, OAuthError, ServerError, TransportError,
};

// Re-export types
pub use types::{
    // Config
    ClientConfig,
    // Metadata
    EndpointMetadata,
    // Authorization
    AuthorizationRequest, ColorScheme, Page, PkcePair, Prompt, ResponseType, SettingsAction,
    // Token
    DeviceInfo, GrantType, OidcTokenResponse, TokenRequestParams,
    // Auxiliary
    AppSessionTokenResponse, ChallengePurpose, ChallengeResponse, UserInfo,
};

// Re-export core components
pub use crate::core::{
    EndpointCache, HttpMethod, HttpRequest, HttpResponse, HttpTransport, MockHttpTransport,
    ReqwestHttpTransport,
};

// Re-export sync bridge primitives
pub use sync::Completion;
