//! End-to-end flows against a mock authorization server.

use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use oidc_auth_client::{
    auth_config, AuthApiClient, AuthError, AuthorizationRequest, ChallengePurpose, GrantType,
    TokenRequestParams,
};

fn discovery_document(server: &MockServer) -> serde_json::Value {
    serde_json::json!({
        "issuer": server.uri(),
        "authorization_endpoint": format!("{}/oauth2/authorize", server.uri()),
        "token_endpoint": format!("{}/oauth2/token", server.uri()),
        "userinfo_endpoint": format!("{}/oauth2/userinfo", server.uri()),
        "revocation_endpoint": format!("{}/oauth2/revoke", server.uri())
    })
}

async fn mount_discovery(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/.well-known/openid-configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(discovery_document(server)))
        .mount(server)
        .await;
}

fn test_client(server: &MockServer) -> AuthApiClient {
    AuthApiClient::new(
        auth_config()
            .issuer(server.uri())
            .client_id("c1")
            .build()
            .unwrap(),
    )
}

#[tokio::test]
async fn refresh_token_grant_end_to_end() {
    let server = MockServer::start().await;
    mount_discovery(&server).await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=r1"))
        .and(body_string_contains("client_id=c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "a1",
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = client
        .request_token(TokenRequestParams {
            grant_type: GrantType::RefreshToken,
            refresh_token: Some("r1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.access_token.as_deref(), Some("a1"));
    assert_eq!(response.token_type.as_deref(), Some("Bearer"));
    assert!(response.refresh_token.is_none());
    assert!(response.device_secret.is_none());
}

#[tokio::test]
async fn discovery_500_is_surfaced_then_retried() {
    let server = MockServer::start().await;

    // First discovery attempt fails with an unparseable body; the mock
    // stops matching after one hit so the remount below takes over.
    Mock::given(method("GET"))
        .and(path("/.well-known/openid-configuration"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_discovery(&server).await;

    let client = test_client(&server);

    match client.fetch_metadata().await.unwrap_err() {
        AuthError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "<html>oops</html>");
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }

    let metadata = client.fetch_metadata().await.unwrap();
    assert_eq!(
        metadata.token_endpoint,
        format!("{}/oauth2/token", server.uri())
    );
}

#[tokio::test]
async fn oauth_error_shape_from_token_endpoint() {
    let server = MockServer::start().await;
    mount_discovery(&server).await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "refresh token revoked"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client
        .request_token(TokenRequestParams {
            grant_type: GrantType::RefreshToken,
            refresh_token: Some("r1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    match error {
        AuthError::OAuth(oauth) => {
            assert_eq!(oauth.error, "invalid_grant");
            assert_eq!(
                oauth.error_description.as_deref(),
                Some("refresh token revoked")
            );
        }
        other => panic!("expected OAuth, got {:?}", other),
    }
}

#[tokio::test]
async fn challenge_is_requested_with_purpose_and_unwrapped() {
    let server = MockServer::start().await;
    mount_discovery(&server).await;

    Mock::given(method("POST"))
        .and(path("/oauth2/challenge"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"purpose": "biometric_request"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {"token": "ch-1", "expireAt": "2026-01-02T03:04:05Z"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let challenge = client
        .request_challenge(ChallengePurpose::BiometricRequest)
        .await
        .unwrap();

    assert_eq!(challenge.token, "ch-1");
}

#[tokio::test]
async fn user_info_sends_only_a_bearer_header() {
    let server = MockServer::start().await;
    mount_discovery(&server).await;

    Mock::given(method("GET"))
        .and(path("/oauth2/userinfo"))
        .and(header("authorization", "Bearer at-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sub": "user-1",
            "email_verified": true,
            "custom_attributes": {"plan": "pro"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let info = client.user_info("at-1").await.unwrap();

    assert_eq!(info.sub, "user-1");
    assert_eq!(info.email_verified, Some(true));
    assert!(info.extra.contains_key("custom_attributes"));
}

#[tokio::test]
async fn authorization_url_is_built_from_discovered_endpoint() {
    let server = MockServer::start().await;
    mount_discovery(&server).await;

    let client = test_client(&server);
    let url = client
        .authorization_url(AuthorizationRequest {
            redirect_uri: "com.example.app://callback".to_string(),
            scope: vec!["openid".to_string()],
            sso_enabled: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(url.as_str().starts_with(&format!("{}/oauth2/authorize?", server.uri())));
    let query: std::collections::HashMap<String, String> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(query.get("client_id").unwrap(), "c1");
    assert_eq!(query.get("x_sso_enabled").unwrap(), "false");
    assert_eq!(query.get("x_suppress_idp_session_cookie").unwrap(), "true");
}

#[tokio::test]
async fn revocation_posts_the_token_form_encoded() {
    let server = MockServer::start().await;
    mount_discovery(&server).await;

    Mock::given(method("POST"))
        .and(path("/oauth2/revoke"))
        .and(body_string_contains("token=r1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.revoke_token("r1").await.unwrap();
}
