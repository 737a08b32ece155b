//! The transport underneath every REST call.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// Crate version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends authenticated requests to one shop.
///
/// Requests go to `{base_uri}{base_path}/{path}` where `base_uri` is
/// `https://{shop}` unless the config supplies an `api_host`. Every request
/// carries `User-Agent`, `Accept: application/json` and
/// `X-Shopify-Access-Token`. Non-2xx responses become
/// [`HttpError::Response`]. Failed requests are not retried.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::{AccessToken, Session, ShopDomain};
/// use shopify_admin_rest::clients::HttpClient;
///
/// let session = Session::new(
///     ShopDomain::new("my-store").unwrap(),
///     AccessToken::new("shpat_abc").unwrap(),
/// );
/// let client = HttpClient::new("/admin/api/2025-10", &session, None).unwrap();
///
/// assert_eq!(client.base_uri(), "https://my-store.myshopify.com");
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client rooted at `base_path` for `session`'s shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be
    /// initialised.
    pub fn new(
        base_path: impl Into<String>,
        session: &Session,
        config: Option<&ShopifyConfig>,
    ) -> Result<Self, HttpError> {
        let api_host = config.and_then(ShopifyConfig::api_host);
        let base_uri = api_host.map_or_else(
            || format!("https://{}", session.shop()),
            crate::config::HostUrl::base_uri,
        );

        let user_agent_prefix = config
            .and_then(ShopifyConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Admin REST v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            session.access_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path: base_path.into(),
            default_headers,
        })
    }

    /// Returns the scheme and authority requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the path prefix, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `request` and returns the parsed response.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Network`] on connection failure
    /// - [`HttpError::Response`] for any non-2xx status
    /// - [`HttpError::InvalidJson`] for a 2xx response whose body is not JSON
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);
        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(code, &body_text).map_err(|e| {
            tracing::debug!(
                status = code,
                path = %request.path,
                error = %e,
                "undecodable response body"
            );
            HttpError::InvalidJson(e)
        })?;

        let response = HttpResponse::new(code, headers, body);
        tracing::debug!(
            status = code,
            request_id = response.request_id().unwrap_or_default(),
            "received response"
        );

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// An empty body is `{}`. A 2xx body must be valid JSON; error bodies that
    /// are not JSON become `{"raw_body": ..}` for 5xx and `{}` otherwise.
    fn parse_body(code: u16, text: &str) -> Result<serde_json::Value, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(serde_json::json!({}));
        }
        match serde_json::from_str(text) {
            Ok(body) => Ok(body),
            Err(e) if (200..300).contains(&code) => Err(e),
            Err(_) if code >= 500 => Ok(serde_json::json!({ "raw_body": text })),
            Err(_) => Ok(serde_json::json!({})),
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result
                .entry(name.as_str().to_lowercase())
                .or_default()
                .push(value);
        }
        result
    }

    /// Collects `errors`, `error` and `error_description` from the body into a
    /// JSON object, adding an `error_reference` sentence for the request id.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }
        if response.body.get("error").is_some() {
            if let Some(desc) = response.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }
        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}
