//! Resource layer over the Admin REST API.
//!
//! - [`ResourceClient`]: typed GET/POST/PUT/DELETE/count primitives, implemented
//!   for [`RestClient`](crate::RestClient)
//! - [`ResourceResponse<T>`]: decoded data plus response headers
//! - [`extract_pagination`]: `Link` header cursors as [`ListOptions`]
//! - [`ResourceError`]: semantic errors (404, 422, missing IDs, bad cursors)
//! - [`resources`]: Customer, PriceRule, Metafield and Order services
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin_rest::rest::resources::{CustomerService, CustomerServiceOp};
//! use shopify_admin_rest::rest::ListOptions;
//! use shopify_admin_rest::{RestClient, Session};
//!
//! let client = RestClient::new(&session, None)?;
//! let customers = CustomerServiceOp::new(&client);
//!
//! let (first_page, pagination) = customers
//!     .list_with_pagination(Some(&ListOptions { limit: Some(2), ..Default::default() }))
//!     .await?;
//! if let Some(next) = pagination.next_page_options {
//!     let (second_page, _) = customers.list_with_pagination(Some(&next)).await?;
//! }
//! ```

mod errors;
mod options;
mod pagination;
mod resource_client;
mod response;

pub mod resources;

pub use errors::{ResourceError, INVALID_LINK_URL, MALFORMED_LINK_HEADER, MISSING_PAGE_INFO};
pub use options::{
    CountOptions, CustomerSearchOptions, GetOptions, ListOptions, MetafieldListOptions,
};
pub use pagination::{extract_pagination, Pagination};
pub use resource_client::{serialize_to_query, ResourceClient};
pub use response::ResourceResponse;
