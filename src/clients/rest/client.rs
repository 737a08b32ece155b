//! [`RestClient`]: versioned, path-normalising access to the Admin REST API.

use crate::auth::Session;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};

/// Sends requests under `/admin/api/{version}/` for one shop.
///
/// Paths are normalised before sending: leading slashes are dropped and the
/// `.json` suffix is added when missing, so `"/customers"`, `"customers"` and
/// `"customers.json"` all address the same endpoint.
///
/// Typed access (envelope decoding, query options, error mapping) lives on
/// the [`ResourceClient`](crate::rest::ResourceClient) trait, which
/// `RestClient` implements.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::{AccessToken, ApiVersion, RestClient, Session, ShopDomain};
///
/// let session = Session::new(
///     ShopDomain::new("my-store").unwrap(),
///     AccessToken::new("shpat_abc").unwrap(),
/// );
/// let client = RestClient::with_version(&session, None, ApiVersion::V2025_01).unwrap();
///
/// assert_eq!(client.api_version(), &ApiVersion::V2025_01);
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client using the config's API version, or the latest one.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn new(session: &Session, config: Option<&ShopifyConfig>) -> Result<Self, RestError> {
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());
        Self::create_client(session, config, api_version)
    }

    /// Creates a client pinned to `version`, ignoring the config's version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn with_version(
        session: &Session,
        config: Option<&ShopifyConfig>,
        version: ApiVersion,
    ) -> Result<Self, RestError> {
        if let Some(cfg_version) = config.map(ShopifyConfig::api_version) {
            if &version == cfg_version {
                tracing::debug!(
                    "Rest client has a redundant API version override to the default {}",
                    cfg_version
                );
            } else {
                tracing::debug!(
                    "Rest client overriding default API version {} with {}",
                    cfg_version,
                    version
                );
            }
        }
        Self::create_client(session, config, version)
    }

    fn create_client(
        session: &Session,
        config: Option<&ShopifyConfig>,
        api_version: ApiVersion,
    ) -> Result<Self, RestError> {
        let http_client = HttpClient::new(api_version.base_path(), session, config)?;
        Ok(Self {
            http_client,
            api_version,
        })
    }

    /// Returns the API version in use.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a raw request.
    ///
    /// `body` must be `Some` for POST and PUT and `None` otherwise.
    ///
    /// # Errors
    ///
    /// - [`RestError::InvalidPath`] if `path` is empty after normalisation
    /// - [`RestError::Http`] for request validation, network and non-2xx
    ///   failures, and for a 2xx body that is not JSON
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path).query(query);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        Ok(self.http_client.request(request).await?)
    }
}

/// Strips leading slashes and ensures a single `.json` suffix.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(format!("{trimmed}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ShopDomain};

    fn session() -> Session {
        Session::new(
            ShopDomain::new("test-shop").unwrap(),
            AccessToken::new("test-access-token").unwrap(),
        )
    }

    #[test]
    fn test_normalize_path_variants() {
        for input in ["customers", "/customers", "customers.json", "//customers.json"] {
            assert_eq!(normalize_path(input).unwrap(), "customers.json", "{input:?}");
        }
        assert_eq!(
            normalize_path("customers/42/metafields/count").unwrap(),
            "customers/42/metafields/count.json"
        );
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        for input in ["", "/", ".json", "/.json"] {
            assert!(
                matches!(normalize_path(input), Err(RestError::InvalidPath { path }) if path == input),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_uses_config_version() {
        let config = ShopifyConfig::builder()
            .api_version(ApiVersion::V2025_04)
            .build();
        let client = RestClient::new(&session(), Some(&config)).unwrap();

        assert_eq!(client.api_version(), &ApiVersion::V2025_04);
        assert_eq!(client.http_client().base_path(), "/admin/api/2025-04");
    }

    #[test]
    fn test_new_without_config_uses_latest() {
        let client = RestClient::new(&session(), None).unwrap();
        assert_eq!(client.api_version(), &ApiVersion::latest());
    }

    #[test]
    fn test_with_version_overrides_config() {
        let config = ShopifyConfig::builder()
            .api_version(ApiVersion::V2025_04)
            .build();
        let client =
            RestClient::with_version(&session(), Some(&config), ApiVersion::Unstable).unwrap();

        assert_eq!(client.http_client().base_path(), "/admin/api/unstable");
    }

    #[tokio::test]
    async fn test_request_rejects_empty_path_before_sending() {
        let client = RestClient::new(&session(), None).unwrap();
        let result = client
            .request(HttpMethod::Get, "/", None, Vec::new())
            .await;
        assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    }

    #[tokio::test]
    async fn test_request_rejects_post_without_body() {
        let client = RestClient::new(&session(), None).unwrap();
        let result = client
            .request(HttpMethod::Post, "customers", None, Vec::new())
            .await;
        assert!(matches!(result, Err(RestError::Http(_))));
    }
}
