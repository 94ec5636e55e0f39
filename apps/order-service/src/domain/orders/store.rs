//! Order Store Trait
//!
//! Defines the five operations of the order store.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::{NewOrder, Order, UpdateOrder};
use super::errors::OrderError;
use crate::domain::shared::{OrderId, SecurityContext};

/// Port for the authoritative in-memory order collection.
///
/// Implementations must support concurrent invocation from parallel request
/// handlers with no caller-side synchronization: operations on the same
/// identifier are linearizable per entry, and `list` need not be a consistent
/// cross-entry snapshot.
///
/// Every operation takes a [`SecurityContext`] for symmetry with the external
/// contract; the store ignores it.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Create a new order: generate an identifier, copy the items verbatim,
    /// compute the total, assign the initial status, and insert.
    ///
    /// # Errors
    ///
    /// None defined at this layer; malformed input is rejected upstream.
    async fn create(&self, new_order: NewOrder, ctx: &SecurityContext)
    -> Result<Order, OrderError>;

    /// Look up an order by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] if no order has this identifier.
    async fn get(&self, id: &OrderId, ctx: &SecurityContext) -> Result<Order, OrderError>;

    /// List stored orders, optionally filtered by status.
    ///
    /// With a filter, matching is ASCII-case-insensitive. The result carries
    /// no ordering guarantee. Always succeeds, possibly empty.
    ///
    /// # Errors
    ///
    /// None defined at this layer.
    async fn list(
        &self,
        status_filter: Option<&str>,
        ctx: &SecurityContext,
    ) -> Result<Vec<Order>, OrderError>;

    /// Apply an update payload to an existing order.
    ///
    /// If the payload carries a status, the stored order's status is replaced
    /// in place; all other fields are untouched. A payload without a status
    /// leaves the order unchanged and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] if no order has this identifier.
    async fn update(
        &self,
        id: &OrderId,
        update: UpdateOrder,
        ctx: &SecurityContext,
    ) -> Result<Order, OrderError>;

    /// Remove an order by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] if no order has this identifier.
    async fn delete(&self, id: &OrderId, ctx: &SecurityContext) -> Result<(), OrderError>;
}
