//! # Customer Actor
//!
//! Customer accounts: registration with unique emails, login lookup, profile edits and
//! password recovery tokens.
//!
//! Credential digests and reset tokens are produced elsewhere (hashing, email delivery and
//! session handling live in the surrounding web layer); this actor only stores them and checks
//! a presented token against the stored one and its expiry.
//!
//! Registration is a [`CustomerCommand`] rather than a plain create because the duplicate
//! email check has to see every account in the same step as the insert.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Customer;
use cantina_actor::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(capacity)
}
