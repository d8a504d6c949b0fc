//! Error types for the Menu actor.

use crate::error::{Classify, ErrorKind};
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The menu definition was rejected (empty name, no dishes, bad item line).
    #[error("Invalid menu: {0}")]
    InvalidInput(String),

    /// The requested menu was not found.
    #[error("Menu not found: {0}")]
    NotFound(String),

    /// No menu is currently active.
    #[error("No active menu")]
    NoActiveMenu,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl Classify for MenuError {
    fn kind(&self) -> ErrorKind {
        match self {
            MenuError::InvalidInput(_) => ErrorKind::InvalidInput,
            MenuError::NotFound(_) | MenuError::NoActiveMenu => ErrorKind::NotFound,
            MenuError::ActorCommunicationError(_) => ErrorKind::StoreError,
        }
    }
}
