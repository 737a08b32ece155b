//! Metafields: typed key/value annotations on another resource.
//!
//! [`MetafieldServiceOp`] addresses the metafields of one owner, e.g.
//! `customers/207119551/metafields`. Resources that own metafields implement
//! [`MetafieldsService`] by building one per call.
//!
//! ```rust,ignore
//! use shopify_admin_rest::rest::resources::{Metafield, MetafieldOwner, MetafieldService, MetafieldServiceOp};
//!
//! let metafields = MetafieldServiceOp::new(&client, MetafieldOwner::Customer, 207119551);
//! let created = metafields
//!     .create(&Metafield {
//!         namespace: Some("loyalty".to_string()),
//!         key: Some("tier".to_string()),
//!         value: Some("gold".into()),
//!         metafield_type: Some("single_line_text_field".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::MetafieldOwner;
use crate::rest::{CountOptions, GetOptions, MetafieldListOptions, ResourceClient, ResourceError};

/// A metafield.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Metafield {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Stored value. Shopify sends strings, numbers or booleans depending on
    /// the type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Legacy value type (`string`, `integer`, `json_string`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Metafield type, e.g. `single_line_text_field`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
    /// Singular owner name, e.g. `customer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct MetafieldEnvelope<M> {
    pub(crate) metafield: M,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetafieldsEnvelope {
    pub(crate) metafields: Vec<Metafield>,
}

/// Metafield operations scoped to a single owner.
#[allow(async_fn_in_trait)]
pub trait MetafieldService {
    /// Lists the owner's metafields.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn list(
        &self,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError>;

    /// Counts the owner's metafields.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError>;

    /// Fetches one metafield.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn get(
        &self,
        metafield_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Metafield, ResourceError>;

    /// Creates a metafield on the owner.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn create(&self, metafield: &Metafield) -> Result<Metafield, ResourceError>;

    /// Replaces a metafield. `metafield.id` must be set.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when `metafield.id` is `None`;
    /// otherwise propagates any [`ResourceError`] from the client.
    async fn update(&self, metafield: &Metafield) -> Result<Metafield, ResourceError>;

    /// Deletes a metafield.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn delete(&self, metafield_id: u64) -> Result<(), ResourceError>;
}

/// [`MetafieldService`] over a [`ResourceClient`], for one owner.
#[derive(Debug)]
pub struct MetafieldServiceOp<'a, C> {
    client: &'a C,
    owner: MetafieldOwner,
    owner_id: u64,
}

impl<'a, C: ResourceClient> MetafieldServiceOp<'a, C> {
    /// Addresses the metafields of `owner` number `owner_id`.
    #[must_use]
    pub const fn new(client: &'a C, owner: MetafieldOwner, owner_id: u64) -> Self {
        Self {
            client,
            owner,
            owner_id,
        }
    }

    fn collection_path(&self) -> String {
        format!(
            "{}/{}/metafields",
            self.owner.path_segment(),
            self.owner_id
        )
    }

    fn member_path(&self, metafield_id: u64) -> String {
        format!("{}/{metafield_id}", self.collection_path())
    }
}

impl<C: ResourceClient> MetafieldService for MetafieldServiceOp<'_, C> {
    async fn list(
        &self,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError> {
        let envelope: MetafieldsEnvelope = self.client.get(&self.collection_path(), options).await?;
        Ok(envelope.metafields)
    }

    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        let path = format!("{}/count", self.collection_path());
        self.client.count(&path, options).await
    }

    async fn get(
        &self,
        metafield_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Metafield, ResourceError> {
        let envelope: MetafieldEnvelope<Metafield> =
            self.client.get(&self.member_path(metafield_id), options).await?;
        Ok(envelope.metafield)
    }

    async fn create(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        let envelope: MetafieldEnvelope<Metafield> = self
            .client
            .post(&self.collection_path(), &MetafieldEnvelope { metafield })
            .await?;
        Ok(envelope.metafield)
    }

    async fn update(&self, metafield: &Metafield) -> Result<Metafield, ResourceError> {
        let id = metafield.id.ok_or(ResourceError::MissingId {
            resource: "metafield",
            operation: "update",
        })?;
        let envelope: MetafieldEnvelope<Metafield> = self
            .client
            .put(&self.member_path(id), &MetafieldEnvelope { metafield })
            .await?;
        Ok(envelope.metafield)
    }

    async fn delete(&self, metafield_id: u64) -> Result<(), ResourceError> {
        self.client.delete(&self.member_path(metafield_id)).await
    }
}

/// Metafield operations for a resource that owns metafields, keyed by the
/// owner's ID.
///
/// Each method builds a [`MetafieldServiceOp`] for the given owner and
/// forwards to it.
#[allow(async_fn_in_trait)]
pub trait MetafieldsService {
    /// Lists the metafields of `resource_id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn list_metafields(
        &self,
        resource_id: u64,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError>;

    /// Counts the metafields of `resource_id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn count_metafields(
        &self,
        resource_id: u64,
        options: Option<&CountOptions>,
    ) -> Result<u64, ResourceError>;

    /// Fetches one metafield of `resource_id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn get_metafield(
        &self,
        resource_id: u64,
        metafield_id: u64,
        options: Option<&GetOptions>,
    ) -> Result<Metafield, ResourceError>;

    /// Creates a metafield on `resource_id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn create_metafield(
        &self,
        resource_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError>;

    /// Replaces a metafield of `resource_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] when `metafield.id` is `None`;
    /// otherwise propagates any [`ResourceError`] from the client.
    async fn update_metafield(
        &self,
        resource_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError>;

    /// Deletes a metafield of `resource_id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the client.
    async fn delete_metafield(
        &self,
        resource_id: u64,
        metafield_id: u64,
    ) -> Result<(), ResourceError>;
}
