//! Transport-level error types.
//!
//! - [`HttpResponseError`]: the server answered with a non-2xx status
//! - [`InvalidHttpRequestError`]: the request was rejected before sending
//! - [`HttpError`]: either of the above, or a network failure

use thiserror::Error;

/// A non-2xx response.
///
/// `message` is a JSON object holding whichever of `errors`, `error` and
/// `error_description` the response body carried, plus an `error_reference`
/// sentence when the response had an `X-Request-Id`.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 422,
///     message: r#"{"errors":{"email":["is invalid"]}}"#.to_string(),
///     error_reference: Some("req-1".to_string()),
/// };
///
/// assert_eq!(error.errors_value().unwrap()["email"][0], "is invalid");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// HTTP status code.
    pub code: u16,
    /// Serialized error object.
    pub message: String,
    /// The `X-Request-Id` of the failed response, if present.
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Returns the `errors` member of the serialized message, if any.
    #[must_use]
    pub fn errors_value(&self) -> Option<serde_json::Value> {
        let mut parsed: serde_json::Value = serde_json::from_str(&self.message).ok()?;
        parsed.get_mut("errors").map(serde_json::Value::take)
    }
}

/// A request that failed validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A GET or DELETE request carried a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },

    /// A POST or PUT request had no body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Any error raised by [`HttpClient`](super::HttpClient).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 2xx response whose body is not valid JSON.
    #[error("Invalid JSON in response body: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Connection, TLS or body-read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
    }

    #[test]
    fn test_errors_value_absent_or_unparseable() {
        let no_errors = HttpResponseError {
            code: 500,
            message: r#"{"error":"boom"}"#.to_string(),
            error_reference: None,
        };
        assert!(no_errors.errors_value().is_none());

        let not_json = HttpResponseError {
            code: 502,
            message: "<html>".to_string(),
            error_reference: None,
        };
        assert!(not_json.errors_value().is_none());
    }

    #[test]
    fn test_missing_body_message() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
    }

    #[test]
    fn test_http_error_wraps_invalid_request() {
        let error: HttpError = InvalidHttpRequestError::UnexpectedBody {
            method: "get".to_string(),
        }
        .into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
        assert_eq!(error.to_string(), "Cannot send data with get.");
    }
}
