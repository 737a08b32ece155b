//! The shop credentials attached to every request.

use crate::config::{AccessToken, ShopDomain};

/// An authenticated shop: which store to call and the token to call it with.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::{AccessToken, Session, ShopDomain};
///
/// let session = Session::new(
///     ShopDomain::new("my-store").unwrap(),
///     AccessToken::new("shpat_abc").unwrap(),
/// );
///
/// assert_eq!(session.shop().as_ref(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    shop: ShopDomain,
    access_token: AccessToken,
}

impl Session {
    /// Creates a session for `shop` authenticated by `access_token`.
    #[must_use]
    pub const fn new(shop: ShopDomain, access_token: AccessToken) -> Self {
        Self { shop, access_token }
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
