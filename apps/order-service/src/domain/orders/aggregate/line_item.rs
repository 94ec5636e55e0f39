//! Line item of an order.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// A single purchase line: a quantity of units at a unit price.
///
/// Line items are copied verbatim from the creation request and never
/// recomputed or revalidated after the order exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Number of units (positive per the external contract).
    quantity: u32,
    /// Price per unit (non-negative per the external contract).
    unit_price: Money,
}

impl LineItem {
    /// Create a new line item.
    #[must_use]
    pub const fn new(quantity: u32, unit_price: Money) -> Self {
        Self {
            quantity,
            unit_price,
        }
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the unit price.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Quantity x unit price for this line.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}
