//! Typed query options, one struct per kind of call.
//!
//! Every field is optional and omitted from the query string when `None`.
//! Array fields are sent comma-separated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filters and paging for collection GETs.
///
/// A cursor returned by [`extract_pagination`](crate::rest::extract_pagination)
/// is a `ListOptions` with only `page_info` and `limit` set, and can be passed
/// straight back to a `list_with_pagination` call.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::rest::ListOptions;
///
/// let options = ListOptions {
///     limit: Some(250),
///     fields: Some("id,email".to_string()),
///     ..Default::default()
/// };
/// assert!(options.page_info.is_none());
///
/// let cursor = ListOptions::cursor("eyJsYXN0X2lkIjo0fQ", Some(50));
/// assert_eq!(cursor.page_info.as_deref(), Some("eyJsYXN0X2lkIjo0fQ"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Opaque cursor from a `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
    /// Legacy page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only records with an ID greater than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Sort order, e.g. `updated_at desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Comma-separated field names to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Restrict to these IDs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
}

impl ListOptions {
    /// Builds a cursor descriptor: `page_info` plus an optional `limit`.
    #[must_use]
    pub fn cursor(page_info: impl Into<String>, limit: Option<u32>) -> Self {
        Self {
            page_info: Some(page_info.into()),
            limit,
            ..Self::default()
        }
    }
}

/// Filters for `count` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Field selection for single-record GETs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOptions {
    /// Comma-separated field names to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for `customers/search`.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::rest::{serialize_to_query, CustomerSearchOptions};
///
/// let options = CustomerSearchOptions {
///     query: Some("email:bob@example.com".to_string()),
///     limit: Some(5),
///     ..Default::default()
/// };
/// let query = serialize_to_query(&options).unwrap();
/// assert_eq!(query[1], ("query".to_string(), "email:bob@example.com".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Comma-separated field names to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Sort order, e.g. `last_order_date desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Free-form search text, e.g. `country:Canada`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// Filters for an owner's metafield collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetafieldListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Metafield type, e.g. `single_line_text_field`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::serialize_to_query;
    use chrono::TimeZone;

    #[test]
    fn test_default_options_produce_empty_query() {
        assert!(serialize_to_query(&ListOptions::default()).unwrap().is_empty());
        assert!(serialize_to_query(&CountOptions::default()).unwrap().is_empty());
        assert!(serialize_to_query(&CustomerSearchOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn test_list_options_encode_dates_and_ids() {
        let options = ListOptions {
            created_at_min: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            ids: Some(vec![10, 20]),
            ..Default::default()
        };
        let query = serialize_to_query(&options).unwrap();

        assert_eq!(
            query,
            vec![
                ("created_at_min".to_string(), "2024-01-02T03:04:05Z".to_string()),
                ("ids".to_string(), "10,20".to_string()),
            ]
        );
    }

    #[test]
    fn test_cursor_sets_only_page_info_and_limit() {
        let cursor = ListOptions::cursor("abc", Some(5));
        assert_eq!(
            cursor,
            ListOptions {
                page_info: Some("abc".to_string()),
                limit: Some(5),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_metafield_type_is_renamed() {
        let options = MetafieldListOptions {
            namespace: Some("custom".to_string()),
            metafield_type: Some("boolean".to_string()),
            ..Default::default()
        };
        let query = serialize_to_query(&options).unwrap();
        assert!(query.contains(&("type".to_string(), "boolean".to_string())));
        assert!(query.contains(&("namespace".to_string(), "custom".to_string())));
    }
}
