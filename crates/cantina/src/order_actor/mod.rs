//! # Order Actor
//!
//! Takes orders and tracks them through `Recebido -> Em Preparo -> Saiu para Entrega ->
//! Entregue`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](cantina_actor::ActorEntity) implementation and [`OrderContext`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] (advance one step) and [`OrderQuery`] (daily counts, history)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor is started with an [`OrderContext`]: the [`PricingEngine`](crate::pricing::PricingEngine)
//! used to price every submission, and the [`Clock`](crate::clock::Clock) that stamps orders
//! and decides what "today" is.
//!
//! ## Status changes
//!
//! Setting a status is permissive: any of the four labels may replace any other, so staff can
//! correct mistakes. [`OrderAction::Advance`] is the strict alternative and refuses to move a
//! delivered order.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;

use crate::model::Order;
use cantina_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(capacity)
}
