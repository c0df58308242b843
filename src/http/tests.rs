//! Tests for the HTTP client module

use super::*;
use crate::auth::Credentials;
use crate::error::Error;
use crate::types::Params;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn creds() -> Credentials {
    Credentials::new("ak", "sk")
}

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::new(config, creds()).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("usabilla-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_build_url_joins_paths() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/v2")
        .build();
    let client = HttpClient::new(config, creds()).unwrap();

    assert_eq!(
        client.build_url("/live/apps").unwrap().as_str(),
        "https://api.example.com/v2/live/apps"
    );
    assert_eq!(
        client.build_url("live/apps/a1/feedback").unwrap().as_str(),
        "https://api.example.com/v2/live/apps/a1/feedback"
    );
}

#[test]
fn test_invalid_base_url() {
    let config = HttpClientConfig::builder().base_url("not a url").build();
    let err = HttpClient::new(config, creds()).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_rejects_empty_credentials() {
    let err = HttpClient::new(HttpClientConfig::default(), Credentials::new("", "secret"))
        .unwrap_err();
    assert!(matches!(err, Error::Auth { .. }));
}

#[tokio::test]
async fn test_get_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live/websites/button"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items":[]}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .get("/live/websites/button", &Params::new())
        .await
        .unwrap();

    assert_eq!(&body[..], br#"{"items":[]}"#);
}

#[tokio::test]
async fn test_get_sends_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live/apps"))
        .and(query_param("limit", "25"))
        .and(query_param("since", "1400000000000"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = Params::new().limit(25).since(1_400_000_000_000);
    client.get("/live/apps", &params).await.unwrap();
}

#[tokio::test]
async fn test_get_applies_auth_and_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live/email/button"))
        .and(header("X-Access-Key", "ak"))
        .and(header("X-Secret-Key", "sk"))
        .and(header("X-Trace", "on"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Trace", "on")
        .build();
    let client = HttpClient::new(config, creds()).unwrap();

    client
        .get("/live/email/button", &Params::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_status_carries_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live/apps"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/live/apps", &Params::new()).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "unauthorized");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/live/apps"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/live/apps", &Params::new()).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    // Nothing listens on the discard port
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build();
    let client = HttpClient::new(config, creds()).unwrap();

    let err = client.get("/live/apps", &Params::new()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
