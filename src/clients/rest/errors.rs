//! Errors raised by [`RestClient`](super::RestClient).

use crate::clients::HttpError;
use thiserror::Error;

/// A REST request failure.
#[derive(Debug, Error)]
pub enum RestError {
    /// The path was empty after normalisation.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as given by the caller.
        path: String,
    },

    /// Transport failure.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_path_message() {
        let error = RestError::InvalidPath {
            path: "/".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid REST API path: /");
    }

    #[test]
    fn test_http_error_is_transparent() {
        let error: RestError = HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        })
        .into();

        assert!(matches!(error, RestError::Http(HttpError::Response(_))));
        assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
    }
}
