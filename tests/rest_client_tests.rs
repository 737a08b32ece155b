//! Integration tests for the REST client.
//!
//! These tests verify client construction, version selection, path
//! normalisation on the wire and error mapping.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopify_admin_rest::clients::rest::{RestClient, RestError};
use shopify_admin_rest::clients::{HttpError, HttpMethod};
use shopify_admin_rest::{AccessToken, ApiVersion, HostUrl, Session, ShopDomain, ShopifyConfig};

/// Creates a test session with the given shop domain.
fn create_test_session(shop: &str, access_token: &str) -> Session {
    Session::new(
        ShopDomain::new(shop).unwrap(),
        AccessToken::new(access_token).unwrap(),
    )
}

fn mock_config(server: &MockServer, version: ApiVersion) -> ShopifyConfig {
    ShopifyConfig::builder()
        .api_version(version)
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build()
}

// ============================================================================
// RestClient Construction Tests
// ============================================================================

#[test]
fn test_rest_client_creates_with_default_version() {
    let session = create_test_session("test-shop", "test-token");
    let client = RestClient::new(&session, None).unwrap();

    assert_eq!(client.api_version(), &ApiVersion::latest());
    assert_eq!(client.http_client().base_path(), "/admin/api/2025-10");
}

#[test]
fn test_rest_client_with_version_override() {
    let session = create_test_session("test-shop", "test-token");
    let config = ShopifyConfig::builder()
        .api_version(ApiVersion::V2025_07)
        .build();
    let client = RestClient::with_version(&session, Some(&config), ApiVersion::V2024_10).unwrap();

    assert_eq!(client.api_version(), &ApiVersion::V2024_10);
    assert_eq!(client.http_client().base_path(), "/admin/api/2024-10");
}

#[test]
fn test_multiple_clients_for_different_shops() {
    let client1 = RestClient::new(&create_test_session("shop-one", "token-1"), None).unwrap();
    let client2 = RestClient::new(&create_test_session("shop-two", "token-2"), None).unwrap();

    assert_eq!(client1.http_client().base_uri(), "https://shop-one.myshopify.com");
    assert_eq!(client2.http_client().base_uri(), "https://shop-two.myshopify.com");
}

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_paths_are_normalised_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-07/customers/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .expect(3)
        .mount(&server)
        .await;

    let session = create_test_session("test-shop", "test-token");
    let client = RestClient::new(&session, Some(&mock_config(&server, ApiVersion::V2025_07))).unwrap();

    for raw in ["customers/count", "/customers/count.json", "customers/count.json"] {
        let response = client
            .request(HttpMethod::Get, raw, None, Vec::new())
            .await
            .unwrap();
        assert_eq!(response.body["count"], 1);
    }
}

#[tokio::test]
async fn test_query_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/customers.json"))
        .and(query_param("since_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customers": []})))
        .expect(1)
        .mount(&server)
        .await;

    let session = create_test_session("test-shop", "test-token");
    let client = RestClient::new(&session, Some(&mock_config(&server, ApiVersion::V2025_10))).unwrap();

    client
        .request(
            HttpMethod::Get,
            "customers",
            None,
            vec![("since_id".to_string(), "42".to_string())],
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_empty_path_is_rejected() {
    let session = create_test_session("test-shop", "test-token");
    let client = RestClient::new(&session, None).unwrap();

    let result = client.request(HttpMethod::Get, "/.json", None, Vec::new()).await;

    assert!(matches!(result, Err(RestError::InvalidPath { path }) if path == "/.json"));
}

#[tokio::test]
async fn test_non_2xx_becomes_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/customers/1.json"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "abc-123")
                .set_body_json(json!({"errors": "Not Found"})),
        )
        .mount(&server)
        .await;

    let session = create_test_session("test-shop", "test-token");
    let client = RestClient::new(&session, Some(&mock_config(&server, ApiVersion::V2025_10))).unwrap();

    let result = client.request(HttpMethod::Get, "customers/1", None, Vec::new()).await;

    let Err(RestError::Http(HttpError::Response(error))) = result else {
        panic!("expected a response error");
    };
    assert_eq!(error.code, 404);
    assert_eq!(error.error_reference.as_deref(), Some("abc-123"));
    assert_eq!(error.errors_value(), Some(json!("Not Found")));
    assert!(error.message.contains("abc-123"));
}
