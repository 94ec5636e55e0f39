//! In-memory order store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::orders::aggregate::{NewOrder, Order, UpdateOrder};
use crate::domain::orders::errors::OrderError;
use crate::domain::orders::store::OrderStore;
use crate::domain::shared::{OrderId, SecurityContext};

/// In-memory implementation of [`OrderStore`].
///
/// A single `RwLock<HashMap>` keyed by order identifier. The lock provides
/// per-key linearizability; no transaction spans multiple identifiers.
/// Contents are volatile, process-lifetime only.
///
/// Constructed once at startup and shared by `Arc` across request handlers.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of orders in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.read().unwrap().is_empty()
    }

    /// Clear all orders from the store.
    pub fn clear(&self) {
        let mut orders = self.orders.write().unwrap();
        orders.clear();
    }

    /// Add an order to the store (for test setup).
    pub fn add(&self, order: Order) {
        let mut orders = self.orders.write().unwrap();
        orders.insert(order.id().as_str().to_string(), order);
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(
        &self,
        new_order: NewOrder,
        _ctx: &SecurityContext,
    ) -> Result<Order, OrderError> {
        let order = Order::new(new_order);
        let mut orders = self.orders.write().unwrap();
        orders.insert(order.id().as_str().to_string(), order.clone());
        Ok(order)
    }

    async fn get(&self, id: &OrderId, _ctx: &SecurityContext) -> Result<Order, OrderError> {
        let orders = self.orders.read().unwrap();
        orders
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| OrderError::NotFound {
                order_id: id.as_str().to_string(),
            })
    }

    async fn list(
        &self,
        status_filter: Option<&str>,
        _ctx: &SecurityContext,
    ) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().unwrap();
        Ok(orders
            .values()
            .filter(|o| status_filter.is_none_or(|status| o.status_matches(status)))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: &OrderId,
        update: UpdateOrder,
        _ctx: &SecurityContext,
    ) -> Result<Order, OrderError> {
        let mut orders = self.orders.write().unwrap();
        let order = orders
            .get_mut(id.as_str())
            .ok_or_else(|| OrderError::NotFound {
                order_id: id.as_str().to_string(),
            })?;

        if let Some(status) = update.status {
            order.set_status(status);
        }
        Ok(order.clone())
    }

    async fn delete(&self, id: &OrderId, _ctx: &SecurityContext) -> Result<(), OrderError> {
        let mut orders = self.orders.write().unwrap();
        orders
            .remove(id.as_str())
            .map(|_| ())
            .ok_or_else(|| OrderError::NotFound {
                order_id: id.as_str().to_string(),
            })
    }
}
