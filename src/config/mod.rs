//! Client configuration.
//!
//! - [`ShopifyConfig`] / [`ShopifyConfigBuilder`]: API version, host override
//!   and user agent prefix
//! - [`AccessToken`], [`ShopDomain`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the `/admin/api/{version}` segment
//!
//! # Example
//!
//! ```rust
//! use shopify_admin_rest::{ApiVersion, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::V2025_07)
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! assert_eq!(config.api_version(), &ApiVersion::V2025_07);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

/// Settings shared by every client built from it.
///
/// `ShopifyConfig` is cheap to clone and is `Send + Sync`.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// Returns the API version used in request paths.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host that replaces `https://{shop}`, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ShopifyConfig {
    fn default() -> Self {
        ShopifyConfigBuilder::new().build()
    }
}

// Verify ShopifyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest()`]
/// - `api_host`: `None` (requests go to `https://{shop}`)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::{HostUrl, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .api_host(HostUrl::new("http://127.0.0.1:9000").unwrap())
///     .build();
///
/// assert_eq!(config.api_host().unwrap().base_uri(), "http://127.0.0.1:9000");
/// ```
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates a builder with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests to `host` instead of the shop's own domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Prepends `prefix` to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> ShopifyConfig {
        ShopifyConfig {
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
