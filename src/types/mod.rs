//! Protocol data types.

pub mod api;
pub mod auth;
pub mod config;
pub mod metadata;
pub mod token;

pub use api::{
    ApiEnvelope, AppSessionTokenResponse, ChallengePurpose, ChallengeResponse, UserInfo,
};
pub use auth::{
    AuthorizationRequest, ColorScheme, Page, PkcePair, Prompt, ResponseType, SettingsAction,
};
pub use config::{ClientConfig, PLATFORM};
pub use metadata::EndpointMetadata;
pub use token::{DeviceInfo, GrantType, OidcTokenResponse, TokenRequestParams};
