//! Resource types that can own metafields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of resource a metafield hangs off.
///
/// Serializes as the singular name Shopify uses in `owner_resource`; the
/// collection path segment is available from [`path_segment`](Self::path_segment).
///
/// ```rust
/// use shopify_admin_rest::rest::resources::MetafieldOwner;
///
/// assert_eq!(MetafieldOwner::Customer.path_segment(), "customers");
/// assert_eq!(MetafieldOwner::Customer.to_string(), "customer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetafieldOwner {
    Customer,
    Product,
    Variant,
    Order,
    Collection,
    Page,
    Blog,
    Article,
}

impl MetafieldOwner {
    /// Returns the plural path segment, e.g. `customers`.
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Customer => "customers",
            Self::Product => "products",
            Self::Variant => "variants",
            Self::Order => "orders",
            Self::Collection => "collections",
            Self::Page => "pages",
            Self::Blog => "blogs",
            Self::Article => "articles",
        }
    }
}

impl fmt::Display for MetafieldOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segment = self.path_segment();
        f.write_str(&segment[..segment.len() - 1])
    }
}
