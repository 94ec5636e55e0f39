//! HTTP request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::orders::aggregate::{LineItem, NewOrder, UpdateOrder};
use crate::domain::shared::Money;

use super::error::ApiError;

/// A line item in a new-order request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    /// Number of units. The contract requires a positive value.
    pub quantity: u32,
    /// Price per unit. The contract requires a non-negative value.
    pub unit_price: Decimal,
}

/// Request to create an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    /// Line items; the contract requires at least one.
    pub items: Vec<LineItemRequest>,
}

impl NewOrderRequest {
    /// Enforce the contract constraints serde cannot express.
    ///
    /// The core never re-validates; shape checking ends here.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] on an empty item list or a
    /// zero quantity.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.items.is_empty() {
            return Err(ApiError::Validation {
                message: "items must contain at least one entry".to_string(),
            });
        }
        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(ApiError::Validation {
                message: "item quantity must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Convert to the domain command.
    #[must_use]
    pub fn to_domain(&self) -> NewOrder {
        NewOrder {
            items: self
                .items
                .iter()
                .map(|item| LineItem::new(item.quantity, Money::new(item.unit_price)))
                .collect(),
        }
    }
}

/// Request to update an order.
///
/// The contract defines only a status replacement. An absent status is a
/// reported-success no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    /// Replacement status, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateOrderRequest {
    /// Convert to the domain payload.
    #[must_use]
    pub fn to_domain(&self) -> UpdateOrder {
        UpdateOrder {
            status: self.status.clone(),
        }
    }
}

/// Query parameters for listing orders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListOrdersParams {
    /// Optional status filter, matched case-insensitively.
    pub status: Option<String>,
}
