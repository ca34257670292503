//! Tests for the auth module

use super::*;
use crate::config::Config;
use crate::error::{Error, ErrorKind};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::AUTH_HEADER;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(format!("{}/api/3.13", server.uri()))
        .build();
    HttpClient::with_config(config).unwrap()
}

fn credentials() -> Credentials {
    Credentials::new("user@meteor", "password", "testdev550928")
}

#[tokio::test]
async fn test_authenticate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.13/auth/signin"))
        .and(body_json(json!({
            "credentials": {
                "name": "user@meteor",
                "password": "password",
                "site": { "contentUrl": "testdev550928" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": {
                "site": { "id": "site-id-1", "contentUrl": "testdev550928" },
                "user": { "id": "user-id-1" },
                "token": "token-abc"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = SessionManager::authenticate(&client_for(&mock_server), &credentials())
        .await
        .unwrap();

    assert_eq!(session.token(), "token-abc");
    assert_eq!(session.site_id, "site-id-1");
    assert_eq!(session.site_content_url, "testdev550928");
    assert_eq!(session.user_id, "user-id-1");
}

#[tokio::test]
async fn test_authenticate_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.13/auth/signin"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = SessionManager::authenticate(&client_for(&mock_server), &credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Auth { .. }));
    assert_eq!(err.kind(), ErrorKind::Auth);
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_authenticate_undecodable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.13/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&mock_server)
        .await;

    let err = SessionManager::authenticate(&client_for(&mock_server), &credentials())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Auth { .. }));
}

#[tokio::test]
async fn test_authenticate_empty_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/3.13/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": {
                "site": { "id": "site-id-1" },
                "token": ""
            }
        })))
        .mount(&mock_server)
        .await;

    let err = SessionManager::authenticate(&client_for(&mock_server), &credentials())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("empty token"));
}

#[tokio::test]
async fn test_authenticate_transport_failure() {
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1/api/3.13")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = SessionManager::authenticate(&client, &credentials())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Auth);
}

#[test]
fn test_session_apply_stamps_header() {
    let session = Session::new("token-xyz", "site-1");
    let request = session.apply(RequestConfig::new());
    assert_eq!(
        request.headers.get(AUTH_HEADER),
        Some(&"token-xyz".to_string())
    );
}

#[test]
fn test_credentials_from_config() {
    let config = Config::new(
        "https://server.tableau.com",
        "3.13",
        "testdev550928",
        "user@meteor",
        "password",
    );
    let credentials = Credentials::from_config(&config);
    assert_eq!(credentials.username, "user@meteor");
    assert_eq!(credentials.site_content_url, "testdev550928");

    let payload = credentials.sign_in_payload();
    assert_eq!(payload["credentials"]["password"], "password");
    assert_eq!(payload["credentials"]["site"]["contentUrl"], "testdev550928");
}

#[test]
fn test_session_debug_redacts_token() {
    let session = Session::new("super-secret-token", "site-1");
    assert!(!format!("{session:?}").contains("super-secret-token"));
}
