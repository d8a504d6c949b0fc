//! # Error Classification
//!
//! Each resource has its own error enum (`MenuError`, `OrderError`, `CustomerError`, ...).
//! [`ErrorKind`] is the shared taxonomy they all collapse into at the API boundary, where
//! every kind maps to one HTTP-style status code.

use cantina_actor::FrameworkError;
use serde::Serialize;
use std::fmt::Display;

/// The failure categories callers can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Malformed or missing required fields, bad quantity.
    InvalidInput,
    /// A dish or side name that is not on any menu.
    ItemNotFound,
    /// Unknown order, menu or customer id.
    NotFound,
    /// Unique constraint violation, e.g. a duplicate customer email.
    Conflict,
    /// The underlying store failed or is unreachable.
    StoreError,
    /// A status label outside the order lifecycle.
    InvalidStatus,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::InvalidInput | ErrorKind::InvalidStatus => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::ItemNotFound => 422,
            ErrorKind::StoreError => 500,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Implemented by every error that can reach the API boundary.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}

impl Classify for FrameworkError {
    fn kind(&self) -> ErrorKind {
        match self {
            FrameworkError::NotFound(_) => ErrorKind::NotFound,
            FrameworkError::ActorClosed
            | FrameworkError::ActorDropped
            | FrameworkError::EntityError(_) => ErrorKind::StoreError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_status_code() {
        let codes: Vec<u16> = [
            ErrorKind::InvalidInput,
            ErrorKind::ItemNotFound,
            ErrorKind::NotFound,
            ErrorKind::Conflict,
            ErrorKind::StoreError,
            ErrorKind::InvalidStatus,
        ]
        .into_iter()
        .map(ErrorKind::status_code)
        .collect();
        assert_eq!(codes, vec![400, 422, 404, 409, 500, 400]);
    }

    #[test]
    fn framework_errors_are_store_errors_unless_missing() {
        assert_eq!(FrameworkError::ActorClosed.kind(), ErrorKind::StoreError);
        assert_eq!(
            FrameworkError::NotFound("order_9".into()).kind(),
            ErrorKind::NotFound
        );
    }
}
