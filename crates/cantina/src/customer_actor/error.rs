//! Error types for the Customer actor.

use crate::error::{Classify, ErrorKind};
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// A field was missing or malformed, or a reset token did not check out.
    #[error("Customer validation error: {0}")]
    InvalidInput(String),

    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// Another account already uses this email.
    #[error("Email already registered: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl Classify for CustomerError {
    fn kind(&self) -> ErrorKind {
        match self {
            CustomerError::InvalidInput(_) => ErrorKind::InvalidInput,
            CustomerError::NotFound(_) => ErrorKind::NotFound,
            CustomerError::Conflict(_) => ErrorKind::Conflict,
            CustomerError::ActorCommunicationError(_) => ErrorKind::StoreError,
        }
    }
}
