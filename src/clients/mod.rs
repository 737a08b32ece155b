//! Transport layer.
//!
//! - [`HttpClient`]: authenticated requests against one shop
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: a validated request
//! - [`HttpResponse`]: status, headers and JSON body
//! - [`HttpError`]: transport failures
//! - [`rest::RestClient`]: path normalisation on top of [`HttpClient`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin_rest::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new("/admin/api/2025-10", &session, None)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "customers/count.json").build()?;
//! let response = client.request(request).await?;
//! println!("{}", response.body["count"]);
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};
