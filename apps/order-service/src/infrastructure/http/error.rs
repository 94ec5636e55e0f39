//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::domain::orders::errors::OrderError;

use super::response::ApiErrorResponse;

/// Errors surfaced by the REST adapter.
///
/// `NotFound` is the only domain-level outcome; `Validation` covers contract
/// constraints the transport enforces before the core is reached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No order exists for the supplied identifier.
    #[error("Order not found: {order_id}")]
    NotFound {
        /// The order ID that was not found.
        order_id: String,
    },

    /// Request violates the contract schema.
    #[error("Invalid request: {message}")]
    Validation {
        /// What was violated.
        message: String,
    },
}

impl ApiError {
    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "ORDER_NOT_FOUND",
            Self::Validation { .. } => "INVALID_REQUEST",
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound { order_id } => Self::NotFound { order_id },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
