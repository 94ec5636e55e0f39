//! HTTP response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::orders::aggregate::Order;
use crate::domain::shared::Timestamp;

/// A line item as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResponse {
    /// Number of units.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// An order as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Order identifier.
    pub id: String,
    /// Line items, exactly as submitted at creation.
    pub items: Vec<LineItemResponse>,
    /// Total computed at creation.
    pub total_amount: Decimal,
    /// Current status.
    pub status: String,
    /// Creation time, RFC 3339.
    pub created_at: Timestamp,
}

impl OrderResponse {
    /// Render a domain order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id().as_str().to_string(),
            items: order
                .items()
                .iter()
                .map(|item| LineItemResponse {
                    quantity: item.quantity(),
                    unit_price: item.unit_price().amount(),
                })
                .collect(),
            total_amount: order.total_amount().amount(),
            status: order.status().to_string(),
            created_at: order.created_at(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::aggregate::{LineItem, NewOrder};
    use crate::domain::shared::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn order_response_from_order() {
        let order = Order::new(NewOrder {
            items: vec![
                LineItem::new(2, Money::new(dec!(10.0))),
                LineItem::new(1, Money::new(dec!(5.0))),
            ],
        });

        let resp = OrderResponse::from_order(&order);
        assert_eq!(resp.id, order.id().as_str());
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.total_amount, dec!(25.0));
        assert_eq!(resp.status, "CREATED");
        assert_eq!(resp.created_at, order.created_at());
    }

    #[test]
    fn order_response_uses_camel_case_wire_names() {
        let order = Order::new(NewOrder {
            items: vec![LineItem::new(1, Money::new(dec!(1.0)))],
        });

        let json = serde_json::to_string(&OrderResponse::from_order(&order)).unwrap();
        assert!(json.contains(r#""totalAmount""#));
        assert!(json.contains(r#""createdAt""#));
        assert!(json.contains(r#""unitPrice""#));
    }

    #[test]
    fn api_error_response_serde() {
        let resp = ApiErrorResponse {
            code: "ORDER_NOT_FOUND".to_string(),
            message: "Order not found: ord-123".to_string(),
        };

        let json = serde_json::to_string(&resp).unwrap();
        let parsed: ApiErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.code, "ORDER_NOT_FOUND");
    }
}
