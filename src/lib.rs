//! # Shopify Admin REST bindings
//!
//! Typed bindings for the Shopify Admin REST API customer and price-rule
//! endpoints, with cursor pagination and metafield access.
//!
//! ## Overview
//!
//! - Configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Validated newtypes for the shop domain and access token
//! - [`RestClient`]: authenticated JSON requests against one shop
//! - [`rest::ResourceClient`]: typed CRUD primitives the services build on
//! - [`rest::resources`]: Customer, PriceRule and Metafield services
//! - [`rest::extract_pagination`]: `Link` header cursors
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_admin_rest::{AccessToken, ApiVersion, Session, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::latest())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! let session = Session::new(
//!     ShopDomain::new("my-store").unwrap(),
//!     AccessToken::new("shpat_example").unwrap(),
//! );
//! assert_eq!(session.shop().as_ref(), "my-store.myshopify.com");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use shopify_admin_rest::rest::resources::{
//!     Customer, CustomerService, CustomerServiceOp, PriceRuleService, PriceRuleServiceOp,
//! };
//! use shopify_admin_rest::RestClient;
//!
//! let client = RestClient::new(&session, Some(&config))?;
//!
//! let customers = CustomerServiceOp::new(&client);
//! let created = customers
//!     .create(&Customer { email: Some("kari@example.com".into()), ..Default::default() })
//!     .await?;
//!
//! let price_rules = PriceRuleServiceOp::new(&client);
//! let total = price_rules.count(None).await?;
//! ```
//!
//! ## Paging Through Results
//!
//! ```rust,ignore
//! use shopify_admin_rest::rest::ListOptions;
//!
//! let mut options = Some(ListOptions { limit: Some(250), ..Default::default() });
//! while let Some(page) = options.take() {
//!     let (batch, pagination) = customers.list_with_pagination(Some(&page)).await?;
//!     process(batch);
//!     options = pagination.next_page_options;
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and sessions are passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: clients and services are `Send + Sync`
//! - **One request per call**: no caching or retries

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use auth::Session;
pub use config::{AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, RestError,
};

pub use rest::{extract_pagination, Pagination, ResourceClient, ResourceError, ResourceResponse};
