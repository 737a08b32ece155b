//! Cursor pagination from the `Link` response header.
//!
//! Shopify pages collections with opaque `page_info` cursors. Each page's
//! response carries a header such as
//!
//! ```text
//! Link: <https://shop.myshopify.com/admin/api/2025-10/customers.json?page_info=abc&limit=50>; rel="previous",
//!       <https://shop.myshopify.com/admin/api/2025-10/customers.json?page_info=def&limit=50>; rel="next"
//! ```
//!
//! [`extract_pagination`] turns that into a [`Pagination`] holding one
//! [`ListOptions`] cursor per direction.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::rest::errors::{INVALID_LINK_URL, MALFORMED_LINK_HEADER, MISSING_PAGE_INFO};
use crate::rest::{ListOptions, ResourceError};

static LINK_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^ *<([^>]+)>; rel="(previous|next)" *$"#).expect("Invalid regex")
});

/// The next and previous page cursors of a listing.
///
/// Each cursor has only `page_info` and (when the link carried one) `limit`
/// set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Cursor for the following page.
    pub next_page_options: Option<ListOptions>,
    /// Cursor for the preceding page.
    pub previous_page_options: Option<ListOptions>,
}

impl Pagination {
    /// Returns `true` when neither direction has a cursor.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.next_page_options.is_none() && self.previous_page_options.is_none()
    }
}

/// Parses a `Link` header value into a [`Pagination`].
///
/// An empty header yields an empty [`Pagination`]. Otherwise the value is split
/// on `,` and every entry must be exactly `<url>; rel="next"` or
/// `<url>; rel="previous"`, optionally padded with spaces. If two entries share
/// a relation the later one wins. Parsing stops at the first bad entry; no
/// partial result is returned.
///
/// # Errors
///
/// - [`ResourceError::ResponseDecoding`] with
///   `"could not extract pagination link header"` for a malformed entry
/// - [`ResourceError::ResponseDecoding`] with
///   `"pagination does not contain a valid URL"` if the URL does not parse
/// - [`ResourceError::ResponseDecoding`] with `"page_info is missing"` if the
///   URL has no non-empty `page_info` parameter
/// - [`ResourceError::InvalidPageLimit`] if `limit` is present but not an
///   integer
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::rest::extract_pagination;
///
/// let header = r#"<https://x.myshopify.com/admin/api/2025-10/customers.json?page_info=abc&limit=5>; rel="next""#;
/// let pagination = extract_pagination(header).unwrap();
///
/// let next = pagination.next_page_options.unwrap();
/// assert_eq!(next.page_info.as_deref(), Some("abc"));
/// assert_eq!(next.limit, Some(5));
/// assert!(pagination.previous_page_options.is_none());
/// ```
pub fn extract_pagination(link_header: &str) -> Result<Pagination, ResourceError> {
    let mut pagination = Pagination::default();
    if link_header.is_empty() {
        return Ok(pagination);
    }

    for entry in link_header.split(',') {
        let Some(captures) = LINK_ENTRY_RE.captures(entry) else {
            tracing::debug!(entry, "rejecting malformed Link header entry");
            return Err(ResourceError::decoding(MALFORMED_LINK_HEADER));
        };

        let cursor = cursor_from_url(&captures[1])?;
        match &captures[2] {
            "next" => pagination.next_page_options = Some(cursor),
            _ => pagination.previous_page_options = Some(cursor),
        }
    }

    Ok(pagination)
}

fn cursor_from_url(raw: &str) -> Result<ListOptions, ResourceError> {
    let url = Url::parse(raw).map_err(|e| {
        tracing::debug!(url = raw, error = %e, "rejecting Link header URL");
        ResourceError::decoding(INVALID_LINK_URL)
    })?;

    let param = |name: &str| {
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    };

    let page_info = param("page_info").ok_or_else(|| {
        tracing::debug!(url = raw, "Link header URL has no page_info");
        ResourceError::decoding(MISSING_PAGE_INFO)
    })?;
    let limit = param("limit").map(|l| l.parse::<u32>()).transpose()?;

    Ok(ListOptions::cursor(page_info, limit))
}
