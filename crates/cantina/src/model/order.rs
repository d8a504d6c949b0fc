/// Represents a customer order.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](cantina_actor::ResourceActor); see
/// [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order). The total is priced once, in
/// `on_create`, and never recomputed.
use crate::model::CustomerId;
use crate::pricing::Quantity;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Order lifecycle: `Received -> InPreparation -> OutForDelivery -> Delivered`.
///
/// The labels are stored and exchanged verbatim (case-sensitive) for compatibility with
/// existing order data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Recebido")]
    Received,
    #[serde(rename = "Em Preparo")]
    InPreparation,
    #[serde(rename = "Saiu para Entrega")]
    OutForDelivery,
    #[serde(rename = "Entregue")]
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::InPreparation,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Received => "Recebido",
            OrderStatus::InPreparation => "Em Preparo",
            OrderStatus::OutForDelivery => "Saiu para Entrega",
            OrderStatus::Delivered => "Entregue",
        }
    }

    /// The following status in the lifecycle; `None` once delivered.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Received => Some(OrderStatus::InPreparation),
            OrderStatus::InPreparation => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for a label that is not one of the four lifecycle labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.label() == label)
            .ok_or_else(|| UnknownStatus(label.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub dish: String,
    pub side: String,
    pub quantity: u32,
    pub note: String,
    pub payment_method: String,
    /// Reference to the uploaded proof of payment, if one was sent.
    pub proof: Option<String>,
    pub total: Decimal,
    pub status: OrderStatus,
    /// Local date and time the order was taken.
    pub created_at: NaiveDateTime,
    /// Owning customer; `None` for anonymous orders.
    pub customer_id: Option<CustomerId>,
}

impl Order {
    /// Builds an unpriced order in the `Received` state.
    ///
    /// `total` and `created_at` are filled in when the order actor accepts it.
    pub fn new(id: OrderId, submission: OrderSubmission) -> Self {
        Self {
            id,
            customer_name: submission.customer_name,
            phone: submission.phone,
            address: submission.address,
            dish: submission.dish,
            side: submission.side,
            quantity: submission.quantity.get(),
            note: submission.note,
            payment_method: submission.payment_method,
            proof: submission.proof,
            total: Decimal::ZERO,
            status: OrderStatus::Received,
            created_at: NaiveDateTime::default(),
            customer_id: submission.customer_id,
        }
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date()
    }

    /// The public view of the order, without customer contact details.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            status: self.status,
            dish: self.dish.clone(),
            side: self.side.clone(),
            quantity: self.quantity,
            note: self.note.clone(),
            total: self.total,
            payment_method: self.payment_method.clone(),
        }
    }
}

/// Payload for submitting a new order.
#[derive(Debug, Clone)]
pub struct OrderSubmission {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub dish: String,
    pub side: String,
    pub quantity: Quantity,
    pub note: String,
    pub payment_method: String,
    pub proof: Option<String>,
    pub customer_id: Option<CustomerId>,
}

/// Status change request. Any lifecycle status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

/// Reduced order view returned to customers tracking an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub status: OrderStatus,
    pub dish: String,
    pub side: String,
    pub quantity: u32,
    pub note: String,
    pub total: Decimal,
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_and_are_case_sensitive() {
        for status in OrderStatus::ALL {
            assert_eq!(status.label().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("em preparo".parse::<OrderStatus>().is_err());
        assert!("Bogus".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn lifecycle_moves_forward_and_stops_at_delivered() {
        let mut status = OrderStatus::Received;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            status = next;
            seen.push(status);
        }
        assert_eq!(seen, OrderStatus::ALL.to_vec());
    }

    #[test]
    fn status_serializes_as_its_label() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"Saiu para Entrega\"");
    }
}
