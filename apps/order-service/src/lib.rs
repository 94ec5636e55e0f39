// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Order Service - Rust Core Library
//!
//! An order-management resource exposing create, read, update, delete, and
//! list operations over an in-memory collection of orders.
//!
//! # Architecture
//!
//! - **Domain**: the Order aggregate, its value objects, and the `OrderStore`
//!   port. The store owns every order; callers only ever receive clones.
//! - **Infrastructure**: adapters around the domain
//!   - `persistence`: the in-memory store (one thread-safe map keyed by
//!     order identifier)
//!   - `http`: the axum REST adapter mapping store outcomes to status codes
//!
//! Authorization is entirely the HTTP layer's concern; the store accepts a
//! security context on each operation and ignores it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// Domain re-exports
pub use domain::orders::{LineItem, NewOrder, Order, OrderError, OrderStore, UpdateOrder};
pub use domain::shared::{Money, OrderId, SecurityContext, Timestamp};

// Infrastructure re-exports
pub use infrastructure::http::{ApiError, AppState, create_router};
pub use infrastructure::persistence::InMemoryOrderStore;
