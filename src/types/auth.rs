//! Authorization Types
//!
//! Parameters for authorization-URL construction.

/// Parameters for building an authorization URL.
///
/// Only `redirect_uri` is required; every other field is appended to the
/// URL exactly when set. Construct with struct-update syntax:
///
/// ```rust,ignore
/// let request = AuthorizationRequest {
///     redirect_uri: "com.example.app://callback".to_string(),
///     scope: vec!["openid".to_string(), "offline_access".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default)]
pub struct AuthorizationRequest {
    /// Redirect URI the server sends the user back to.
    pub redirect_uri: String,
    /// Response type family.
    pub response_type: ResponseType,
    /// Requested scopes, space-joined on the wire.
    pub scope: Vec<String>,
    /// PKCE verifier/challenge pair. Only the challenge is sent.
    pub pkce: Option<PkcePair>,
    /// CSRF state value.
    pub state: Option<String>,
    /// SDK-internal state, forwarded verbatim as `x_state`.
    pub x_state: Option<String>,
    /// Prompt options, space-joined on the wire.
    pub prompt: Vec<Prompt>,
    /// Pre-filled user identity hint.
    pub login_hint: Option<String>,
    /// Previously issued ID token, for re-authentication.
    pub id_token_hint: Option<String>,
    /// Preferred UI locales, space-joined on the wire.
    pub ui_locales: Vec<String>,
    /// UI color scheme hint.
    pub color_scheme: Option<ColorScheme>,
    /// Maximum authentication age in seconds.
    pub max_age: Option<u64>,
    /// WeChat redirect override, sent as `x_wechat_redirect_uri`.
    pub wechat_redirect_uri: Option<String>,
    /// Which UI page to land on.
    pub page: Option<Page>,
    /// Settings action to perform after authentication.
    pub settings_action: Option<SettingsAction>,
    /// Response mode override (e.g. `query`).
    pub response_mode: Option<String>,
    /// App-initiated SSO token hint, sent as `x_app_sso_token`.
    pub app_sso_token: Option<String>,
    /// Whether the shared SSO session may be used. `Some(false)` emits the
    /// compatibility pair `x_sso_enabled=false` and
    /// `x_suppress_idp_session_cookie=true`; anything else emits neither.
    pub sso_enabled: Option<bool>,
}

/// Response type family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseType {
    /// Authorization code flow (`code`).
    #[default]
    Code,
    /// No credential issued by the front channel (`none`).
    None,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::None => "none",
        }
    }
}

/// Prompt behavior for authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// Do not display any authentication or consent UI.
    None,
    /// Force re-authentication.
    Login,
    /// Force consent screen.
    Consent,
    /// Force account selection.
    SelectAccount,
}

impl Prompt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Login => "login",
            Self::Consent => "consent",
            Self::SelectAccount => "select_account",
        }
    }
}

/// UI color scheme hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// UI page to open the authorization session on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }
}

/// Settings action opened after authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    ChangePassword,
    DeleteAccount,
}

impl SettingsAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChangePassword => "change_password",
            Self::DeleteAccount => "delete_account",
        }
    }
}

/// PKCE verifier/challenge pair supplied by the caller.
///
/// The client never derives one from the other; generation lives outside
/// this crate. The verifier goes into the token request, the challenge into
/// the authorization URL.
#[derive(Clone)]
pub struct PkcePair {
    /// Code verifier (keep secret).
    pub code_verifier: String,
    /// Code challenge (S256).
    pub code_challenge: String,
}

impl std::fmt::Debug for PkcePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PkcePair")
            .field("code_verifier", &"[REDACTED]")
            .field("code_challenge", &self.code_challenge)
            .finish()
    }
}
