//! Errors returned by every resource service.
//!
//! Non-2xx responses are mapped to semantic variants where one exists:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`]
//! - anything else: [`ResourceError::Rest`], unchanged
//!
//! Link header parse failures surface as [`ResourceError::ResponseDecoding`]
//! or, for a non-numeric `limit`, [`ResourceError::InvalidPageLimit`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin_rest::rest::ResourceError;
//!
//! match customers.get(42, None).await {
//!     Ok(customer) => println!("{:?}", customer.email),
//!     Err(ResourceError::NotFound { path, .. }) => println!("nothing at {path}"),
//!     Err(ResourceError::ValidationFailed { errors, .. }) => println!("{errors:?}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::collections::HashMap;
use std::num::ParseIntError;

use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Message for a `Link` entry that does not have the `<url>; rel="..."` shape.
pub const MALFORMED_LINK_HEADER: &str = "could not extract pagination link header";
/// Message for a `Link` entry whose URL cannot be parsed.
pub const INVALID_LINK_URL: &str = "pagination does not contain a valid URL";
/// Message for a `Link` entry without a usable `page_info` parameter.
pub const MISSING_PAGE_INFO: &str = "page_info is missing";

/// A resource operation failure.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The server answered 404.
    #[error("Resource not found at {path}")]
    NotFound {
        /// The request path.
        path: String,
        /// The `X-Request-Id` of the response.
        request_id: Option<String>,
    },

    /// The server answered 422.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Field name to messages. Unkeyed messages are stored under `base`.
        errors: HashMap<String, Vec<String>>,
        /// The `X-Request-Id` of the response.
        request_id: Option<String>,
    },

    /// An operation that addresses an existing record was given one without
    /// an ID.
    #[error("Cannot {operation} {resource} without an id")]
    MissingId {
        /// Resource name, e.g. `customer`.
        resource: &'static str,
        /// Operation name, e.g. `update`.
        operation: &'static str,
    },

    /// A response header could not be decoded.
    #[error("{message}")]
    ResponseDecoding {
        /// One of [`MALFORMED_LINK_HEADER`], [`INVALID_LINK_URL`] or
        /// [`MISSING_PAGE_INFO`].
        message: &'static str,
    },

    /// A `limit` parameter in a `Link` URL was not an integer.
    #[error(transparent)]
    InvalidPageLimit(#[from] ParseIntError),

    /// A body or query could not be encoded, or a response body was not JSON
    /// or did not match the expected envelope.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Transport failure that did not go through the REST client.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Any other REST client failure, including non-2xx statuses other than
    /// 404 and 422.
    #[error(transparent)]
    Rest(RestError),
}

impl ResourceError {
    pub(crate) const fn decoding(message: &'static str) -> Self {
        Self::ResponseDecoding { message }
    }

    /// Maps a REST client failure for `path` onto a resource error.
    #[must_use]
    pub fn from_rest(error: RestError, path: &str) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) => Self::from_response(response, path),
            RestError::Http(HttpError::InvalidJson(e)) => Self::Serialization(e),
            other => Self::Rest(other),
        }
    }

    fn from_response(response: HttpResponseError, path: &str) -> Self {
        match response.code {
            404 => Self::NotFound {
                path: path.to_string(),
                request_id: response.error_reference,
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(response.errors_value().as_ref()),
                request_id: response.error_reference,
            },
            _ => Self::Rest(RestError::Http(HttpError::Response(response))),
        }
    }

    /// Returns the `X-Request-Id` of the failed response, if there was one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. } | Self::ValidationFailed { request_id, .. } => {
                request_id.as_deref()
            }
            Self::Http(HttpError::Response(e))
            | Self::Rest(RestError::Http(HttpError::Response(e))) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        Self::from_rest(error, "")
    }
}

/// Reads Shopify's `errors` member in any of its three shapes:
///
/// - `{"title": ["can't be blank"], "code": "taken"}`
/// - `["Title can't be blank"]` (stored under `base`)
/// - `"Required parameter missing"` (stored under `base`)
fn parse_validation_errors(errors: Option<&serde_json::Value>) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    match errors {
        Some(serde_json::Value::Object(map)) => {
            for (field, messages) in map {
                result.insert(field.clone(), messages_of(messages));
            }
        }
        Some(value @ serde_json::Value::Array(_)) => {
            let msgs = messages_of(value);
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        Some(serde_json::Value::String(s)) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

fn messages_of(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(|v| v.as_str().map_or_else(|| v.to_string(), ToString::to_string))
            .collect(),
        serde_json::Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_error(code: u16, body: &serde_json::Value) -> RestError {
        RestError::Http(HttpError::Response(HttpResponseError {
            code,
            message: body.to_string(),
            error_reference: Some("req-9".to_string()),
        }))
    }

    #[test]
    fn test_404_maps_to_not_found_with_path() {
        let error = ResourceError::from_rest(
            response_error(404, &json!({"errors": "Not Found"})),
            "customers/1.json",
        );
        assert!(matches!(
            &error,
            ResourceError::NotFound { path, request_id }
                if path == "customers/1.json" && request_id.as_deref() == Some("req-9")
        ));
        assert_eq!(error.request_id(), Some("req-9"));
    }

    #[test]
    fn test_422_object_errors() {
        let error = ResourceError::from_rest(
            response_error(422, &json!({"errors": {"email": ["has already been taken"], "phone": "is invalid"}})),
            "customers.json",
        );
        let ResourceError::ValidationFailed { errors, .. } = error else {
            panic!("expected ValidationFailed");
        };
        assert_eq!(errors["email"], vec!["has already been taken"]);
        assert_eq!(errors["phone"], vec!["is invalid"]);
    }

    #[test]
    fn test_422_array_and_string_errors_go_to_base() {
        let array = ResourceError::from_rest(
            response_error(422, &json!({"errors": ["Title can't be blank"]})),
            "price_rules.json",
        );
        assert!(matches!(
            array,
            ResourceError::ValidationFailed { errors, .. } if errors["base"] == vec!["Title can't be blank"]
        ));

        let string = ResourceError::from_rest(
            response_error(422, &json!({"errors": "Required parameter missing"})),
            "price_rules.json",
        );
        assert!(matches!(
            string,
            ResourceError::ValidationFailed { errors, .. } if errors["base"] == vec!["Required parameter missing"]
        ));
    }

    #[test]
    fn test_other_statuses_pass_through() {
        let error = ResourceError::from_rest(
            response_error(500, &json!({"errors": "Internal"})),
            "customers.json",
        );
        assert!(matches!(
            error,
            ResourceError::Rest(RestError::Http(HttpError::Response(HttpResponseError { code: 500, .. })))
        ));
    }

    #[test]
    fn test_invalid_path_passes_through() {
        let error: ResourceError = RestError::InvalidPath {
            path: String::new(),
        }
        .into();
        assert!(matches!(error, ResourceError::Rest(RestError::InvalidPath { .. })));
    }

    #[test]
    fn test_decoding_messages() {
        assert_eq!(
            ResourceError::decoding(MISSING_PAGE_INFO).to_string(),
            "page_info is missing"
        );
        assert_eq!(
            ResourceError::decoding(MALFORMED_LINK_HEADER).to_string(),
            "could not extract pagination link header"
        );
    }

    #[test]
    fn test_missing_id_message() {
        let error = ResourceError::MissingId {
            resource: "customer",
            operation: "update",
        };
        assert_eq!(error.to_string(), "Cannot update customer without an id");
    }

    #[test]
    fn test_invalid_page_limit_is_transparent() {
        let parse_error = "abc".parse::<u32>().unwrap_err();
        let expected = parse_error.to_string();
        let error: ResourceError = parse_error.into();
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_invalid_success_body_maps_to_serialization() {
        let json_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = ResourceError::from_rest(
            RestError::Http(HttpError::InvalidJson(json_error)),
            "customers.json",
        );
        assert!(matches!(error, ResourceError::Serialization(_)));
    }
}
