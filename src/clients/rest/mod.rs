//! REST client for the Shopify Admin API.
//!
//! [`RestClient`] adds the versioned base path and path normalisation on top
//! of [`HttpClient`](crate::clients::HttpClient):
//!
//! - leading slashes are stripped: `/customers` -> `customers.json`
//! - `.json` is stripped and re-added: `customers.json` -> `customers.json`
//! - an empty path is rejected with [`RestError::InvalidPath`]

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
