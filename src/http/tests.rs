//! Tests for the HTTP executor

use super::*;
use crate::types::Method;
use pretty_assertions::assert_eq;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url_of(server: &MockServer, path: &str) -> Url {
    Url::parse(&format!("{}{path}", server.uri())).unwrap()
}

#[test]
fn test_executor_config_default() {
    let config = ExecutorConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(
        config.default_headers.get("accept"),
        Some(&"application/json".to_string())
    );
    assert!(config.user_agent.starts_with("blockdb-client/"));
}

#[tokio::test]
async fn test_executor_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blockchains"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_embedded": { "blockchains": [] }
        })))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new();
    let response = executor
        .execute(Method::GET, url_of(&server, "/blockchains"), &[], None)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let json: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert!(json["_embedded"]["blockchains"].is_array());
}

#[tokio::test]
async fn test_executor_passes_status_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new();
    let response = executor
        .execute(Method::GET, url_of(&server, "/missing"), &[], None)
        .await
        .unwrap();

    // status interpretation is the caller's concern
    assert_eq!(response.status, 404);
}

#[tokio::test]
async fn test_executor_post_json_body() {
    let server = MockServer::start().await;
    let body = serde_json::json!({ "wallet_id": "w-1", "device_id": "d-1" });

    Mock::given(method("POST"))
        .and(path("/subscriptions"))
        .and(body_json(&body))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "subscription_id": "s-1" })),
        )
        .mount(&server)
        .await;

    let executor = HttpExecutor::new();
    let response = executor
        .execute(
            Method::POST,
            url_of(&server, "/subscriptions"),
            &[],
            Some(&body),
        )
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_executor_extra_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("x-request-source", "test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let executor = HttpExecutor::new();
    let headers = vec![("x-request-source".to_string(), "test".to_string())];
    let response = executor
        .execute(Method::GET, url_of(&server, "/ping"), &headers, None)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_executor_connection_error_is_submission() {
    // unroutable port: transport failure, not a status
    let executor = HttpExecutor::with_config(ExecutorConfig {
        timeout: Duration::from_millis(500),
        ..ExecutorConfig::default()
    });
    let url = Url::parse("http://127.0.0.1:1/blockchains").unwrap();

    let err = executor
        .execute(Method::GET, url, &[], None)
        .await
        .unwrap_err();

    assert!(matches!(err, crate::error::QueryError::Submission(_)));
}
