//! Infrastructure layer - adapters around the domain.

/// HTTP/REST inbound adapter.
pub mod http;

/// Order store implementations.
pub mod persistence;
