//! Custom actions and queries for the Order actor.

use crate::model::{CustomerId, Order, OrderStatus};
use chrono::NaiveDate;

/// Per-order operations beyond plain status updates.
#[derive(Debug, Clone, Copy)]
pub enum OrderAction {
    /// Moves the order one step along the lifecycle.
    ///
    /// # Errors
    /// Fails with `InvalidStatus` once the order is delivered.
    Advance,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, Copy)]
pub enum OrderActionResult {
    Advanced(OrderStatus),
}

/// Read-only lookups across all orders.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// Orders taken on the clock's current local date.
    CountToday,
    /// Orders taken on the given local date.
    CountOn(NaiveDate),
    /// Orders owned by a customer, newest first.
    ForCustomer(CustomerId),
}

#[derive(Debug, Clone)]
pub enum OrderQueryResult {
    Count(usize),
    Orders(Vec<Order>),
}
