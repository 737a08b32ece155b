//! A read-only view of orders, as returned by `customers/{id}/orders`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The customer an order belongs to. Only the ID is kept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

/// An order placed by a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name, e.g. `#1001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<OrderCustomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrdersEnvelope {
    pub(crate) orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_deserializes_money_and_customer() {
        let envelope: OrdersEnvelope = serde_json::from_value(json!({
            "orders": [{
                "id": 450789469,
                "name": "#1001",
                "order_number": 1001,
                "total_price": "598.94",
                "subtotal_price": "597.00",
                "total_tax": "11.94",
                "currency": "USD",
                "financial_status": "paid",
                "fulfillment_status": null,
                "customer": {"id": 207119551, "email": "bob.norman@mail.example.com"},
                "created_at": "2008-01-10T11:00:00-05:00"
            }]
        }))
        .unwrap();

        let order = &envelope.orders[0];
        assert_eq!(order.total_price, Some(Decimal::from_str("598.94").unwrap()));
        assert_eq!(order.customer.and_then(|c| c.id), Some(207_119_551));
        assert!(order.fulfillment_status.is_none());
        assert_eq!(
            order.created_at.unwrap().to_rfc3339(),
            "2008-01-10T16:00:00+00:00"
        );
    }

    #[test]
    fn test_missing_money_fields_stay_none() {
        let order: Order = serde_json::from_value(json!({"id": 1})).unwrap();
        assert!(order.total_price.is_none());
        assert_eq!(serde_json::to_value(&order).unwrap(), json!({"id": 1}));
    }

    #[test]
    fn test_missing_orders_key_is_an_error() {
        assert!(serde_json::from_value::<OrdersEnvelope>(json!({"order": []})).is_err());
    }
}
