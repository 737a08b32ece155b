//! Integration tests for the HTTP client.
//!
//! These tests verify the client configuration, request building, headers
//! on the wire and response parsing.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopify_admin_rest::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError, SDK_VERSION,
};
use shopify_admin_rest::{AccessToken, HostUrl, Session, ShopDomain, ShopifyConfig};

fn create_test_session(shop: &str, access_token: &str) -> Session {
    Session::new(
        ShopDomain::new(shop).unwrap(),
        AccessToken::new(access_token).unwrap(),
    )
}

fn mock_client(server: &MockServer, prefix: Option<&str>) -> HttpClient {
    let mut builder = ShopifyConfig::builder().api_host(HostUrl::new(server.uri()).unwrap());
    if let Some(prefix) = prefix {
        builder = builder.user_agent_prefix(prefix);
    }
    let config = builder.build();
    HttpClient::new(
        "/admin/api/2025-10",
        &create_test_session("test-shop", "test-token"),
        Some(&config),
    )
    .unwrap()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_full_workflow_session_to_client_to_request() {
    let session = create_test_session("test-shop", "test-token");
    let client = HttpClient::new("/admin/api/2025-10", &session, None).unwrap();

    assert_eq!(client.base_uri(), "https://test-shop.myshopify.com");
    assert_eq!(client.base_path(), "/admin/api/2025-10");
    assert_eq!(
        client.default_headers().get("X-Shopify-Access-Token").map(String::as_str),
        Some("test-token")
    );

    let request = HttpRequest::builder(HttpMethod::Get, "customers.json")
        .query_param("limit", "50")
        .build()
        .unwrap();
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.query, vec![("limit".to_string(), "50".to_string())]);
}

#[test]
fn test_invalid_requests_are_rejected_by_builder() {
    let missing = HttpRequest::builder(HttpMethod::Put, "customers/1.json").build();
    assert!(matches!(missing, Err(InvalidHttpRequestError::MissingBody { .. })));

    let unexpected = HttpRequest::builder(HttpMethod::Delete, "customers/1.json")
        .body(json!({"customer": {}}))
        .build();
    assert!(matches!(unexpected, Err(InvalidHttpRequestError::UnexpectedBody { .. })));
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    let user_agent = format!(
        "MyApp/1.0 | Shopify Admin REST v{SDK_VERSION} | Rust {}",
        env!("CARGO_PKG_RUST_VERSION")
    );
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/customers/count.json"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .and(header("User-Agent", user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server, Some("MyApp/1.0"));
    let request = HttpRequest::builder(HttpMethod::Get, "customers/count.json")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_json_body_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/customers.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"customer": {"email": "a@example.com"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"customer": {"id": 1}})))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Post, "customers.json")
        .body(json!({"customer": {"email": "a@example.com"}}))
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);
    assert_eq!(response.body["customer"]["id"], 1);
}

#[tokio::test]
async fn test_response_headers_are_lowercased_and_exposed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/customers.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "req-1")
                .insert_header("X-Shopify-API-Deprecated-Reason", "https://shopify.dev/changelog")
                .set_body_json(json!({"customers": []})),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Get, "customers.json")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert!(response.headers.contains_key("x-request-id"));
    assert_eq!(response.request_id(), Some("req-1"));
    assert_eq!(
        response.deprecation_reason(),
        Some("https://shopify.dev/changelog")
    );
}

#[tokio::test]
async fn test_empty_body_parses_as_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-10/customers/1.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Delete, "customers/1.json")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_server_error_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/customers.json"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Get, "customers.json")
        .build()
        .unwrap();
    let result = client.request(request).await;

    let Err(HttpError::Response(error)) = result else {
        panic!("expected a response error");
    };
    assert_eq!(error.code, 502);
}

#[tokio::test]
async fn test_non_json_success_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/customers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = mock_client(&server, None);
    let request = HttpRequest::builder(HttpMethod::Get, "customers.json")
        .build()
        .unwrap();
    let result = client.request(request).await;

    assert!(matches!(result, Err(HttpError::InvalidJson(_))));
}
