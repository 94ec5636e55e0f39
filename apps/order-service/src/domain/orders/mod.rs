//! Orders bounded context.
//!
//! The Order aggregate, its errors, and the store port implemented by
//! adapters in the infrastructure layer.

pub mod aggregate;
pub mod errors;
pub mod store;

pub use aggregate::{LineItem, NewOrder, Order, UpdateOrder};
pub use errors::OrderError;
pub use store::OrderStore;
