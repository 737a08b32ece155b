//! Raw responses as returned by [`HttpClient`](super::HttpClient).

use std::collections::HashMap;

/// A response with its status, headers and JSON body.
///
/// Header names are lower-cased; a header that appeared more than once keeps
/// every value in arrival order. An empty body is stored as `{}`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// Parsed JSON body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for a 2xx status.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in pairs {
            map.entry((*k).to_string()).or_default().push((*v).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_covers_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(201, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(302, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(422, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive_and_takes_first() {
        let response = HttpResponse::new(
            200,
            headers(&[("link", "<a>; rel=\"next\""), ("link", "<b>; rel=\"next\"")]),
            json!({}),
        );
        assert_eq!(response.header("Link"), Some("<a>; rel=\"next\""));
        assert!(response.header("x-missing").is_none());
    }

    #[test]
    fn test_request_id_and_deprecation() {
        let response = HttpResponse::new(
            200,
            headers(&[
                ("x-request-id", "req-42"),
                ("x-shopify-api-deprecated-reason", "use GraphQL"),
            ]),
            json!({}),
        );
        assert_eq!(response.request_id(), Some("req-42"));
        assert_eq!(response.deprecation_reason(), Some("use GraphQL"));
    }
}
