//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper checks its input once on construction, so the rest of the
//! crate can treat the value as well-formed.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// An Admin API access token, sent as `X-Shopify-Access-Token`.
///
/// The `Debug` output never contains the token itself.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::AccessToken;
///
/// let token = AccessToken::new("shpat_abc123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_abc123");
/// assert_eq!(format!("{token:?}"), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or
    /// only whitespace.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A shop's `*.myshopify.com` domain.
///
/// A bare shop name such as `my-store` is expanded to
/// `my-store.myshopify.com`. Serializes as the full domain string.
///
/// ```rust
/// use shopify_admin_rest::ShopDomain;
///
/// let domain = ShopDomain::new("My-Store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the name is empty, has a
    /// foreign suffix, or contains characters other than lowercase letters,
    /// digits and inner hyphens.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        let full_domain = match domain.strip_suffix(Self::SUFFIX) {
            Some(_) => domain.clone(),
            None if domain.contains('.') => return Err(ConfigError::InvalidShopDomain { domain }),
            None => format!("{domain}{}", Self::SUFFIX),
        };
        let shop_name_end = full_domain.len() - Self::SUFFIX.len();

        if !Self::is_valid_shop_name(&full_domain[..shop_name_end]) {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        Ok(Self {
            full_domain,
            shop_name_end,
        })
    }

    /// Returns the shop name without the `.myshopify.com` suffix.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    fn is_valid_shop_name(name: &str) -> bool {
        !name.is_empty()
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// An absolute `http` or `https` URL that replaces the shop's own origin.
///
/// Used to route requests through a proxy or to a local mock server. Only
/// the scheme, host and port are kept; any path is ignored.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::HostUrl;
///
/// let host = HostUrl::new("http://127.0.0.1:8080/ignored").unwrap();
/// assert_eq!(host.scheme(), "http");
/// assert_eq!(host.host_name(), Some("127.0.0.1"));
/// assert_eq!(host.base_uri(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(Url);

impl HostUrl {
    /// Parses and validates a host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the value is not an
    /// absolute `http`/`https` URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into().trim().to_string();
        let parsed = Url::parse(&raw).map_err(|_| ConfigError::InvalidHostUrl { url: raw.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidHostUrl { url: raw });
        }
        Ok(Self(parsed))
    }

    /// Returns the URL scheme, `http` or `https`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns `scheme://host[:port]` with no trailing slash.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.0.origin().ascii_serialization()
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
