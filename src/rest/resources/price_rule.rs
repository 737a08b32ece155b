//! Price rules: the discount policies behind discount codes.
//!
//! Single price rules travel under the `price_rules` key, the same key the
//! collection endpoint uses. Shopify documents it that way and accepts it, so
//! [`PriceRuleEnvelope`] keeps that key for create, update and get.
//!
//! ```rust,ignore
//! use shopify_admin_rest::rest::resources::{
//!     PriceRule, PriceRuleService, PriceRuleServiceOp, PriceRuleValueType,
//! };
//!
//! let price_rules = PriceRuleServiceOp::new(&client);
//! let rule = price_rules
//!     .create(&PriceRule {
//!         title: Some("SUMMERSALE10".to_string()),
//!         value_type: Some(PriceRuleValueType::Percentage),
//!         value: Some("-10.0".parse()?),
//!         starts_at: Some(chrono::Utc::now()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::{CountOptions, ListOptions, ResourceClient, ResourceError};

const PRICE_RULES_BASE_PATH: &str = "price_rules";

/// What the rule discounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleTargetType {
    LineItem,
    ShippingLine,
}

/// Which targets the rule applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleTargetSelection {
    /// Every line item or shipping line.
    All,
    /// Only the entitled products, variants or collections.
    Entitled,
}

/// How the value is spread over the targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleAllocationMethod {
    /// The full value applies to each target.
    Each,
    /// The value is split across the targets.
    Across,
}

/// How `value` is interpreted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleValueType {
    FixedAmount,
    Percentage,
}

/// Which customers may use the rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceRuleCustomerSelection {
    All,
    Prerequisite,
}

/// A discount policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PriceRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<PriceRuleTargetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selection: Option<PriceRuleTargetSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<PriceRuleAllocationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<PriceRuleValueType>,
    /// Discount value, negative for a reduction (e.g. `-10.0`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_selection: Option<PriceRuleCustomerSelection>,
    /// Total number of uses across all customers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    /// Times the discount applies per order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub once_per_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PriceRule {
    /// Whether the rule is active at `at`: started, and not yet ended.
    ///
    /// A rule without `starts_at` is never active.
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.starts_at.is_some_and(|start| start <= at)
            && self.ends_at.map_or(true, |end| at < end)
    }
}

/// Single price-rule envelope. Keyed `price_rules` on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PriceRuleEnvelope<P> {
    #[serde(rename = "price_rules")]
    pub(crate) price_rule: P,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceRulesEnvelope {
    pub(crate) price_rules: Vec<PriceRule>,
}

/// Operations on the `price_rules` endpoints.
#[allow(async_fn_in_trait)]
pub trait PriceRuleService {
    /// Creates a price rule.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn create(&self, price_rule: &PriceRule) -> Result<PriceRule, ResourceError>;

    /// Updates the price rule identified by `price_rule.id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when `price_rule.id` is `None`;
    /// otherwise propagates any [`ResourceError`] from the client.
    async fn update(&self, price_rule: &PriceRule) -> Result<PriceRule, ResourceError>;

    /// Lists price rules.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<PriceRule>, ResourceError>;

    /// Fetches one price rule.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn get(&self, price_rule_id: u64) -> Result<PriceRule, ResourceError>;

    /// Fetches the stored version of `price_rule`, looked up by its ID.
    ///
    /// Issues the same request as [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when `price_rule.id` is `None`;
    /// otherwise propagates any [`ResourceError`] from the client.
    async fn get_for(&self, price_rule: &PriceRule) -> Result<PriceRule, ResourceError> {
        let id = price_rule.id.ok_or(ResourceError::MissingId {
            resource: "price rule",
            operation: "get",
        })?;
        self.get(id).await
    }

    /// Deletes a price rule.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn delete(&self, price_rule_id: u64) -> Result<(), ResourceError>;

    /// Counts price rules.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError>;
}

/// [`PriceRuleService`] over a [`ResourceClient`].
#[derive(Debug)]
pub struct PriceRuleServiceOp<'a, C> {
    client: &'a C,
}

impl<'a, C: ResourceClient> PriceRuleServiceOp<'a, C> {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }
}

impl<C: ResourceClient> PriceRuleService for PriceRuleServiceOp<'_, C> {
    async fn create(&self, price_rule: &PriceRule) -> Result<PriceRule, ResourceError> {
        let envelope: PriceRuleEnvelope<PriceRule> = self
            .client
            .post(PRICE_RULES_BASE_PATH, &PriceRuleEnvelope { price_rule })
            .await?;
        Ok(envelope.price_rule)
    }

    async fn update(&self, price_rule: &PriceRule) -> Result<PriceRule, ResourceError> {
        let id = price_rule.id.ok_or(ResourceError::MissingId {
            resource: "price rule",
            operation: "update",
        })?;
        let path = format!("{PRICE_RULES_BASE_PATH}/{id}");
        let envelope: PriceRuleEnvelope<PriceRule> = self
            .client
            .put(&path, &PriceRuleEnvelope { price_rule })
            .await?;
        Ok(envelope.price_rule)
    }

    async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<PriceRule>, ResourceError> {
        let envelope: PriceRulesEnvelope = self.client.get(PRICE_RULES_BASE_PATH, options).await?;
        Ok(envelope.price_rules)
    }

    async fn get(&self, price_rule_id: u64) -> Result<PriceRule, ResourceError> {
        let path = format!("{PRICE_RULES_BASE_PATH}/{price_rule_id}");
        let envelope: PriceRuleEnvelope<PriceRule> =
            self.client.get(&path, None::<&ListOptions>).await?;
        Ok(envelope.price_rule)
    }

    async fn delete(&self, price_rule_id: u64) -> Result<(), ResourceError> {
        self.client
            .delete(&format!("{PRICE_RULES_BASE_PATH}/{price_rule_id}"))
            .await
    }

    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        self.client
            .count(&format!("{PRICE_RULES_BASE_PATH}/count"), options)
            .await
    }
}
