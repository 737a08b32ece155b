//! [`ResourceResponse<T>`]: decoded data plus the response headers it came
//! with.
//!
//! The wrapper derefs to `T`, so fields of the decoded value are reachable
//! directly:
//!
//! ```rust,ignore
//! let response = client
//!     .get_with_headers::<serde_json::Value, _>("customers", None::<&ListOptions>)
//!     .await?;
//! println!("{}", response["customers"]);
//! if let Some(link) = response.link_header() {
//!     let pagination = extract_pagination(link)?;
//! }
//! ```

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::clients::HttpResponse;

/// Decoded data together with the headers of the response that carried it.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::rest::ResourceResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("link".to_string(), vec![r#"<https://x/c.json?page_info=a>; rel="next""#.to_string()]);
/// headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
///
/// let response = ResourceResponse::new(vec![1, 2, 3], headers);
/// assert_eq!(response.len(), 3);
/// assert_eq!(response.request_id(), Some("req-1"));
/// assert!(response.link_header().unwrap().contains("page_info=a"));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    headers: HashMap<String, Vec<String>>,
}

impl<T> ResourceResponse<T> {
    /// Wraps `data` with lower-cased, multi-valued `headers`.
    #[must_use]
    pub const fn new(data: T, headers: HashMap<String, Vec<String>>) -> Self {
        Self { data, headers }
    }

    pub(crate) fn from_parts(data: T, response: HttpResponse) -> Self {
        Self::new(data, response.headers)
    }

    /// Consumes the response, returning the data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns the data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns every response header.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
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

    /// Returns the `Link` header used for cursor pagination.
    #[must_use]
    pub fn link_header(&self) -> Option<&str> {
        self.header("link")
    }

    /// Transforms the data, keeping the headers.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            headers: self.headers,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
