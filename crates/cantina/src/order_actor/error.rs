//! Error types for the Order actor.

use crate::error::{Classify, ErrorKind};
use crate::pricing::PricingError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A required field was missing or malformed.
    #[error("Order validation error: {0}")]
    InvalidInput(String),

    /// The dish or side is not on any menu.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The label is not a lifecycle status, or the order cannot move past its current one.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<PricingError> for OrderError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::InvalidQuantity(q) => OrderError::InvalidInput(format!("quantity {q}")),
            PricingError::ItemNotFound(item) => OrderError::ItemNotFound(item),
            PricingError::TotalOutOfRange(total) => {
                OrderError::InvalidInput(format!("total {total}"))
            }
            PricingError::Menu(e) => OrderError::ActorCommunicationError(e.to_string()),
        }
    }
}

impl Classify for OrderError {
    fn kind(&self) -> ErrorKind {
        match self {
            OrderError::InvalidInput(_) => ErrorKind::InvalidInput,
            OrderError::ItemNotFound(_) => ErrorKind::ItemNotFound,
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::InvalidStatus(_) => ErrorKind::InvalidStatus,
            OrderError::ActorCommunicationError(_) => ErrorKind::StoreError,
        }
    }
}
