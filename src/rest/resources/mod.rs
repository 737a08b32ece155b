//! Typed Admin REST resources and the services that operate on them.
//!
//! Each resource module holds the model, its JSON envelopes and a service
//! trait with a `*ServiceOp` implementation over any
//! [`ResourceClient`](crate::rest::ResourceClient):
//!
//! - [`customer`]: customers, their orders, tags and metafields
//! - [`price_rule`]: discount price rules
//! - [`metafield`]: metafields of any owning resource
//! - [`order`]: the order read model returned for a customer
//!
//! ```rust,ignore
//! use shopify_admin_rest::rest::resources::{CustomerService, CustomerServiceOp};
//!
//! let customers = CustomerServiceOp::new(&client);
//! let customer = customers.get(207119551, None).await?;
//! let tier = customers.list_metafields(207119551, None).await?;
//! ```

pub mod common;
pub mod customer;
pub mod metafield;
pub mod order;
pub mod price_rule;

pub use common::{CustomerAddress, MetafieldOwner};
pub use customer::{Customer, CustomerService, CustomerServiceOp, CustomerState};
pub use metafield::{Metafield, MetafieldService, MetafieldServiceOp, MetafieldsService};
pub use order::{Order, OrderCustomer};
pub use price_rule::{
    PriceRule, PriceRuleAllocationMethod, PriceRuleCustomerSelection, PriceRuleService,
    PriceRuleServiceOp, PriceRuleTargetSelection, PriceRuleTargetType, PriceRuleValueType,
};
