use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Type-safe identifier for customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// A registered customer account.
///
/// `credential` is an opaque digest produced by the session layer; it is never hashed,
/// compared or logged here.
#[derive(Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub credential: String,
    pub reset: Option<ResetToken>,
}

impl Debug for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Customer")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("reset_pending", &self.reset.is_some())
            .finish_non_exhaustive()
    }
}

/// A password recovery token issued to a customer, valid until `expires_at` (local time).
#[derive(Clone, PartialEq)]
pub struct ResetToken {
    pub token: String,
    pub expires_at: NaiveDateTime,
}

/// Payload for registering a customer.
#[derive(Clone, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub credential: String,
}

impl Debug for CustomerCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerCreate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}

/// Profile changes; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Account details that are safe to hand back to the customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Customer> for CustomerProfile {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
        }
    }
}
