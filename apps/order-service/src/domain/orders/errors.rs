//! Order errors.

use std::fmt;

/// Errors that can occur when operating on the order store.
///
/// `NotFound` is a normal, expected outcome of get/update/delete, signalled
/// as a distinct variant so callers can branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// No order exists for the supplied identifier.
    NotFound {
        /// Order ID that was looked up.
        order_id: String,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { order_id } => {
                write!(f, "Order not found: {order_id}")
            }
        }
    }
}

impl std::error::Error for OrderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = OrderError::NotFound {
            order_id: "ord-123".to_string(),
        };
        assert_eq!(format!("{err}"), "Order not found: ord-123");
    }

    #[test]
    fn order_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(OrderError::NotFound {
            order_id: "test".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}
