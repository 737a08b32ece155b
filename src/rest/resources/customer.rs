//! Customers: the `customers` endpoints and their metafields.
//!
//! ```rust,ignore
//! use shopify_admin_rest::rest::resources::{CustomerService, CustomerServiceOp};
//! use shopify_admin_rest::rest::ListOptions;
//!
//! let customers = CustomerServiceOp::new(&client);
//!
//! let mut options = Some(ListOptions { limit: Some(50), ..Default::default() });
//! while let Some(page) = options.take() {
//!     let (batch, pagination) = customers.list_with_pagination(Some(&page)).await?;
//!     for customer in batch {
//!         println!("{:?}", customer.email);
//!     }
//!     options = pagination.next_page_options;
//! }
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{CustomerAddress, MetafieldOwner};
use super::metafield::{Metafield, MetafieldService, MetafieldServiceOp, MetafieldsService};
use super::order::{Order, OrdersEnvelope};
use crate::rest::{
    extract_pagination, CountOptions, CustomerSearchOptions, GetOptions, ListOptions,
    MetafieldListOptions, Pagination, ResourceClient, ResourceError,
};

const CUSTOMERS_BASE_PATH: &str = "customers";

/// Account state of a customer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CustomerState {
    /// No account has been created.
    Disabled,
    /// An account invitation was sent.
    Invited,
    /// The customer accepted the invitation.
    Enabled,
    /// The customer declined the invitation.
    Declined,
}

/// A customer record.
///
/// Unset fields are omitted from request bodies, so a `Customer` with only
/// `id` and `note` set updates just the note.
///
/// # Example
///
/// ```rust
/// use shopify_admin_rest::rest::resources::{Customer, CustomerAddress};
///
/// let home = CustomerAddress { id: Some(1), city: Some("Oslo".into()), ..Default::default() };
/// let customer = Customer {
///     email: Some("kari@example.com".to_string()),
///     tags: Some("wholesale, vip".to_string()),
///     addresses: Some(vec![home.clone()]),
///     default_address: Some(home),
///     ..Default::default()
/// };
/// assert!(customer.default_address_is_listed());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CustomerState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipass_identifier: Option<String>,
    /// Server-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    /// Server-assigned lifetime spend, sent as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Server-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_id: Option<u64>,
    /// Server-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<CustomerAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<CustomerAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,
}

impl Customer {
    /// Checks that the default address, if any, is one of `addresses` and
    /// that at most one address is flagged `default`.
    ///
    /// Addresses are matched by ID when the default has one, otherwise by
    /// value.
    #[must_use]
    pub fn default_address_is_listed(&self) -> bool {
        let addresses = self.addresses.as_deref().unwrap_or_default();
        let flagged = addresses.iter().filter(|a| a.default == Some(true)).count();
        if flagged > 1 {
            return false;
        }

        self.default_address.as_ref().map_or(true, |default| {
            addresses.iter().any(|a| match default.id {
                Some(id) => a.id == Some(id),
                None => a == default,
            })
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CustomerEnvelope<C> {
    pub(crate) customer: C,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomersEnvelope {
    pub(crate) customers: Vec<Customer>,
}

#[derive(Debug, Deserialize)]
struct CustomerTagsEnvelope {
    tags: Vec<String>,
}

/// Operations on the `customers` endpoints.
#[allow(async_fn_in_trait)]
pub trait CustomerService: MetafieldsService {
    /// Lists customers.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Customer>, ResourceError>;

    /// Lists customers and returns the cursors from the `Link` header.
    ///
    /// A response without a `Link` header yields an empty [`Pagination`].
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client, plus the
    /// [`extract_pagination`] errors for a malformed `Link` header.
    async fn list_with_pagination(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Customer>, Pagination), ResourceError>;

    /// Counts customers.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError>;

    /// Fetches one customer.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn get(
        &self,
        customer_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Customer, ResourceError>;

    /// Searches customers with Shopify's query syntax.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn search(
        &self,
        options: Option<&CustomerSearchOptions>,
    ) -> Result<Vec<Customer>, ResourceError>;

    /// Creates a customer and returns the stored record.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn create(&self, customer: &Customer) -> Result<Customer, ResourceError>;

    /// Updates the customer identified by `customer.id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when `customer.id` is `None`;
    /// otherwise propagates any [`ResourceError`] from the client.
    async fn update(&self, customer: &Customer) -> Result<Customer, ResourceError>;

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn delete(&self, customer_id: u64) -> Result<(), ResourceError>;

    /// Lists a customer's orders.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn list_orders(
        &self,
        customer_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Order>, ResourceError>;

    /// Lists the distinct tags used across all customers.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn list_tags(&self, options: Option<&ListOptions>) -> Result<Vec<String>, ResourceError>;
}

/// [`CustomerService`] over a [`ResourceClient`].
#[derive(Debug)]
pub struct CustomerServiceOp<'a, C> {
    client: &'a C,
}

impl<'a, C: ResourceClient> CustomerServiceOp<'a, C> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    const fn metafields(&self, customer_id: u64) -> MetafieldServiceOp<'a, C> {
        MetafieldServiceOp::new(self.client, MetafieldOwner::Customer, customer_id)
    }
}

impl<C: ResourceClient> CustomerService for CustomerServiceOp<'_, C> {
    async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Customer>, ResourceError> {
        let envelope: CustomersEnvelope = self.client.get(CUSTOMERS_BASE_PATH, options).await?;
        Ok(envelope.customers)
    }

    async fn list_with_pagination(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<(Vec<Customer>, Pagination), ResourceError> {
        let response = self
            .client
            .get_with_headers::<CustomersEnvelope, _>(CUSTOMERS_BASE_PATH, options)
            .await?;
        let pagination = extract_pagination(response.link_header().unwrap_or_default())?;
        Ok((response.into_inner().customers, pagination))
    }

    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        self.client
            .count(&format!("{CUSTOMERS_BASE_PATH}/count"), options)
            .await
    }

    async fn get(
        &self,
        customer_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Customer, ResourceError> {
        let path = format!("{CUSTOMERS_BASE_PATH}/{customer_id}");
        let envelope: CustomerEnvelope<Customer> = self.client.get(&path, options).await?;
        Ok(envelope.customer)
    }

    async fn search(
        &self,
        options: Option<&CustomerSearchOptions>,
    ) -> Result<Vec<Customer>, ResourceError> {
        let path = format!("{CUSTOMERS_BASE_PATH}/search");
        let envelope: CustomersEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.customers)
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, ResourceError> {
        let envelope: CustomerEnvelope<Customer> = self
            .client
            .post(CUSTOMERS_BASE_PATH, &CustomerEnvelope { customer })
            .await?;
        Ok(envelope.customer)
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, ResourceError> {
        let id = customer.id.ok_or(ResourceError::MissingId {
            resource: "customer",
            operation: "update",
        })?;
        let path = format!("{CUSTOMERS_BASE_PATH}/{id}");
        let envelope: CustomerEnvelope<Customer> =
            self.client.put(&path, &CustomerEnvelope { customer }).await?;
        Ok(envelope.customer)
    }

    async fn delete(&self, customer_id: u64) -> Result<(), ResourceError> {
        self.client
            .delete(&format!("{CUSTOMERS_BASE_PATH}/{customer_id}"))
            .await
    }

    async fn list_orders(
        &self,
        customer_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Order>, ResourceError> {
        let path = format!("{CUSTOMERS_BASE_PATH}/{customer_id}/orders");
        let envelope: OrdersEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.orders)
    }

    async fn list_tags(&self, options: Option<&ListOptions>) -> Result<Vec<String>, ResourceError> {
        let path = format!("{CUSTOMERS_BASE_PATH}/tags");
        let envelope: CustomerTagsEnvelope = self.client.get(&path, options).await?;
        Ok(envelope.tags)
    }
}

impl<C: ResourceClient> MetafieldsService for CustomerServiceOp<'_, C> {
    async fn list_metafields(
        &self,
        resource_id: u64,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError> {
        self.metafields(resource_id).list(options).await
    }

    async fn count_metafields(
        &self,
        resource_id: u64,
        options: Option<&CountOptions>,
    ) -> Result<u64, ResourceError> {
        self.metafields(resource_id).count(options).await
    }

    async fn get_metafield(
        &self,
        resource_id: u64,
        metafield_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Metafield, ResourceError> {
        self.metafields(resource_id).get(metafield_id, options).await
    }

    async fn create_metafield(
        &self,
        resource_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        self.metafields(resource_id).create(metafield).await
    }

    async fn update_metafield(
        &self,
        resource_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        self.metafields(resource_id).update(metafield).await
    }

    async fn delete_metafield(
        &self,
        resource_id: u64,
        metafield_id: u64,
    ) -> Result<(), ResourceError> {
        self.metafields(resource_id).delete(metafield_id).await
    }
}
