//! Actions, queries and commands for the Customer actor.
//!
//! Tokens and credential digests are redacted from `Debug` output, since every request is
//! logged at debug level.

use crate::model::{Customer, CustomerCreate, CustomerId};
use chrono::NaiveDateTime;
use std::fmt::Debug;

/// Password recovery steps on one account.
#[derive(Clone)]
pub enum CustomerAction {
    /// Stores a caller-generated token; delivering it is someone else's job.
    IssueResetToken {
        token: String,
        expires_at: NaiveDateTime,
    },
    /// Swaps in a new credential digest if `token` matches the stored, unexpired one.
    RedeemResetToken { token: String, credential: String },
}

impl Debug for CustomerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerAction::IssueResetToken { expires_at, .. } => f
                .debug_struct("IssueResetToken")
                .field("expires_at", expires_at)
                .finish_non_exhaustive(),
            CustomerAction::RedeemResetToken { .. } => {
                f.debug_struct("RedeemResetToken").finish_non_exhaustive()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CustomerActionResult {
    ResetIssued,
    CredentialReplaced,
}

#[derive(Debug, Clone)]
pub enum CustomerQuery {
    /// Case-insensitive email lookup.
    ByEmail(String),
}

#[derive(Debug, Clone)]
pub enum CustomerQueryResult {
    Found(Customer),
}

/// Registration checks every stored account for a duplicate email, so it runs as a command.
#[derive(Debug, Clone)]
pub enum CustomerCommand {
    Register(CustomerCreate),
}

#[derive(Debug, Clone, Copy)]
pub enum CustomerCommandResult {
    Registered(CustomerId),
}
