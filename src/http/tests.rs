//! Tests for the HTTP transport module

use super::*;
use crate::auth::Credentials;
use crate::error::Error;
use crate::types::{BackoffType, Params};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .build();
    HttpClient::with_config(config).unwrap()
}

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, MAINNET_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.recv_window, 5000);
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .testnet()
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .recv_window(20_000)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .header("X-Referer", "bot")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, TESTNET_URL);
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.recv_window, 20_000);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.max_backoff, Duration::from_secs(30));
    assert_eq!(
        config.default_headers.get("X-Referer"),
        Some(&"bot".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_encode_query_is_sorted_and_escaped() {
    let query = encode_query(&params(&[
        ("limit", "20"),
        ("category", "linear"),
        ("cursor", "a=b&c"),
    ]));
    assert_eq!(query, "category=linear&cursor=a%3Db%26c&limit=20");
    assert_eq!(encode_query(&Params::new()), "");
}

#[tokio::test]
async fn test_get_sends_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/asset/delivery-record"))
        .and(query_param("category", "option"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "retCode": 0,
            "retMsg": "OK",
            "result": {"list": [], "nextPageCursor": ""}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value = client
        .get(
            "/v5/asset/delivery-record",
            &params(&[("category", "option"), ("limit", "2")]),
        )
        .await
        .unwrap();

    assert_eq!(value["retMsg"], "OK");
}

#[tokio::test]
async fn test_signed_get_carries_bapi_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/asset/transfer/query-asset-info"))
        .and(header("X-BAPI-API-KEY", "my-key"))
        .and(header("X-BAPI-RECV-WINDOW", "5000"))
        .and(header_exists("X-BAPI-TIMESTAMP"))
        .and(header_exists("X-BAPI-SIGN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "retCode": 0, "retMsg": "success", "result": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client =
        HttpClient::with_credentials(config, Credentials::new("my-key", "my-secret")).unwrap();
    assert!(client.is_authenticated());

    client
        .get(
            "/v5/asset/transfer/query-asset-info",
            &params(&[("accountType", "SPOT")]),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v5/order/create"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"category": "spot", "symbol": "BTCUSDT"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "retCode": 0,
            "retMsg": "OK",
            "result": {"orderId": "1", "orderLinkId": ""}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value = client
        .post(
            "/v5/order/create",
            &json!({"category": "spot", "symbol": "BTCUSDT"}),
        )
        .await
        .unwrap();

    assert_eq!(value["result"]["orderId"], "1");
}

#[tokio::test]
async fn test_non_zero_ret_code_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/asset/settlement-record"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "retCode": 10001,
            "retMsg": "params error: category",
            "result": {}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get("/v5/asset/settlement-record", &Params::new())
        .await
        .unwrap_err();

    match err {
        Error::Api { ret_code, ret_msg } => {
            assert_eq!(ret_code, 10001);
            assert_eq!(ret_msg, "params error: category");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/v5/missing", &Params::new()).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_http_client_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v5/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"retCode": 0})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value = client.get("/v5/flaky", &Params::new()).await.unwrap();

    assert_eq!(value["retCode"], 0);
}

#[tokio::test]
async fn test_http_client_retries_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v5/down"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service unavailable"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(2)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client.get("/v5/down", &Params::new()).await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[test]
fn test_calculate_backoff_constant() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(100),
            Duration::from_secs(10),
        )
        .build();

    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(5), Duration::from_millis(100));
}

#[test]
fn test_calculate_backoff_linear() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(100),
            Duration::from_secs(10),
        )
        .build();

    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(300));
}

#[test]
fn test_calculate_backoff_exponential_capped() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Exponential,
            Duration::from_millis(100),
            Duration::from_millis(500),
        )
        .build();

    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(2), Duration::from_millis(400));
    assert_eq!(client.calculate_backoff(10), Duration::from_millis(500));
}

#[test]
fn test_http_client_debug_hides_secret() {
    let client = HttpClient::with_credentials(
        HttpClientConfig::default(),
        Credentials::new("visible-key", "hidden-secret"),
    )
    .unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("authenticated: true"));
    assert!(!debug_str.contains("hidden-secret"));
}
