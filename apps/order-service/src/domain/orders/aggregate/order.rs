//! Order Aggregate Root
//!
//! An order is created with a computed total and a free-text status, mutated
//! only by status replacement, and destroyed by deletion. There is no wider
//! lifecycle: status carries no semantics at this layer.

use serde::{Deserialize, Serialize};

use super::LineItem;
use crate::domain::shared::{Money, OrderId, Timestamp};

/// Status assigned to every freshly created order.
pub const INITIAL_STATUS: &str = "CREATED";

/// Command to create a new order.
///
/// Carries no identifier: the store generates one. Shape validation (non-empty
/// items, positive quantities) is the contract's job and happens upstream.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Line items, copied verbatim into the order.
    pub items: Vec<LineItem>,
}

/// Update payload for an existing order.
///
/// The external contract only defines a status replacement; a payload without
/// a status is a reported-success no-op. Broader update semantics must not be
/// inferred from this type.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrder {
    /// Replacement status, if any. Any string is accepted.
    pub status: Option<String>,
}

/// Order Aggregate Root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    items: Vec<LineItem>,
    total_amount: Money,
    status: String,
    created_at: Timestamp,
}

impl Order {
    /// Create a new order from a command.
    ///
    /// Generates a fresh identifier, computes the total as the sum of
    /// quantity x unit price over all items, and stamps the creation time.
    /// The total is never recomputed afterwards.
    #[must_use]
    pub fn new(cmd: NewOrder) -> Self {
        let total_amount = cmd
            .items
            .iter()
            .fold(Money::ZERO, |acc, item| acc + item.line_total());

        Self {
            id: OrderId::generate(),
            items: cmd.items,
            total_amount,
            status: INITIAL_STATUS.to_string(),
            created_at: Timestamp::now(),
        }
    }

    /// Get the order ID.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the line items.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the total amount computed at creation.
    #[must_use]
    pub const fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Get the current status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Replace the status with a new value.
    ///
    /// Any string is accepted; no other field is touched.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Whether the status matches `candidate`, ignoring ASCII case.
    #[must_use]
    pub fn status_matches(&self, candidate: &str) -> bool {
        self.status.eq_ignore_ascii_case(candidate)
    }
}
