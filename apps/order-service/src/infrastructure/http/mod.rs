//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing the order-management REST contract on top of
//! the order store. Owns wire DTOs, status-code mapping, and the derivation
//! of the caller security context from headers.

mod controller;
mod error;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use error::ApiError;
pub use request::*;
pub use response::*;
