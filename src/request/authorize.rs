//! Authorization-URL Builder

use url::Url;

use crate::error::{AuthError, AuthResult};
use crate::types::{AuthorizationRequest, ClientConfig, EndpointMetadata, PLATFORM};

/// Build the authorization URL the user agent is sent to.
///
/// `response_type`, `client_id`, `redirect_uri` and the platform tag are
/// always present; every other parameter is appended exactly when set, in
/// evaluation order. The server treats parameter order as insignificant.
pub fn build_authorization_url(
    metadata: &EndpointMetadata,
    config: &ClientConfig,
    request: &AuthorizationRequest,
) -> AuthResult<Url> {
    let mut url = Url::parse(&metadata.authorization_endpoint).map_err(|e| AuthError::Config {
        message: format!("invalid authorization endpoint: {}", e),
    })?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("response_type", request.response_type.as_str());
        query.append_pair("client_id", &config.client_id);
        query.append_pair("redirect_uri", &request.redirect_uri);
        query.append_pair("x_platform", PLATFORM);

        if !request.scope.is_empty() {
            query.append_pair("scope", &request.scope.join(" "));
        }
        if let Some(pkce) = &request.pkce {
            query.append_pair("code_challenge", &pkce.code_challenge);
            query.append_pair("code_challenge_method", "S256");
        }
        if let Some(state) = &request.state {
            query.append_pair("state", state);
        }
        if let Some(x_state) = &request.x_state {
            query.append_pair("x_state", x_state);
        }
        if !request.prompt.is_empty() {
            let prompt = request
                .prompt
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            query.append_pair("prompt", &prompt);
        }
        if let Some(hint) = &request.login_hint {
            query.append_pair("login_hint", hint);
        }
        if let Some(hint) = &request.id_token_hint {
            query.append_pair("id_token_hint", hint);
        }
        if !request.ui_locales.is_empty() {
            query.append_pair("ui_locales", &request.ui_locales.join(" "));
        }
        if let Some(scheme) = request.color_scheme {
            query.append_pair("x_color_scheme", scheme.as_str());
        }
        if let Some(max_age) = request.max_age {
            query.append_pair("max_age", &max_age.to_string());
        }
        if let Some(uri) = &request.wechat_redirect_uri {
            query.append_pair("x_wechat_redirect_uri", uri);
        }
        if let Some(page) = request.page {
            query.append_pair("x_page", page.as_str());
        }
        if let Some(action) = request.settings_action {
            query.append_pair("x_settings_action", action.as_str());
        }
        if let Some(mode) = &request.response_mode {
            query.append_pair("response_mode", mode);
        }
        if let Some(token) = &request.app_sso_token {
            query.append_pair("x_app_sso_token", token);
        }
        // Servers predating x_sso_enabled only understand the legacy cookie
        // flag; both are sent until the migration completes.
        if request.sso_enabled == Some(false) {
            query.append_pair("x_sso_enabled", "false");
            query.append_pair("x_suppress_idp_session_cookie", "true");
        }
    }

    Ok(url)
}
