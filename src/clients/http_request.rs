//! A single Admin API request, validated before it is sent.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// The HTTP methods the Admin REST API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read.
    Get,
    /// Create.
    Post,
    /// Update.
    Put,
    /// Delete.
    Delete,
}

impl HttpMethod {
    const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        })
    }
}

/// A request relative to the client's base path.
///
/// Bodies are always JSON. Query parameters keep their insertion order.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Put, "customers/7.json")
///     .body(json!({"customer": {"id": 7, "note": "vip"}}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.http_method, HttpMethod::Put);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// Path relative to the base path, e.g. `customers.json`.
    pub path: String,
    /// JSON body for POST and PUT.
    pub body: Option<serde_json::Value>,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Starts building a request.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Checks that the body matches the method.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a POST or PUT
    /// without a body, and [`InvalidHttpRequestError::UnexpectedBody`] for a
    /// GET or DELETE with one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method.requires_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Appends query parameters.
    #[must_use]
    pub fn query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// See [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_without_body_is_valid() {
        let request = HttpRequest::builder(HttpMethod::Get, "customers.json")
            .query_param("limit", "50")
            .query([("fields", "id,email")])
            .build()
            .unwrap();

        assert_eq!(request.path, "customers.json");
        assert_eq!(
            request.query,
            vec![
                ("limit".to_string(), "50".to_string()),
                ("fields".to_string(), "id,email".to_string()),
            ]
        );
    }

    #[test]
    fn test_post_and_put_require_body() {
        for method in [HttpMethod::Post, HttpMethod::Put] {
            let result = HttpRequest::builder(method, "price_rules.json").build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { method: m }) if m == method.to_string()
            ));
        }
    }

    #[test]
    fn test_get_and_delete_reject_body() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let result = HttpRequest::builder(method, "customers/1.json")
                .body(json!({}))
                .build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::UnexpectedBody { .. })
            ));
        }
    }

    #[test]
    fn test_method_display_is_lowercase() {
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
        assert_eq!(HttpMethod::Post.to_string(), "post");
    }
}
