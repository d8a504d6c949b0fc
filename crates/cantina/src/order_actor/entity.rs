//! [`ActorEntity`] implementation for [`Order`].
//!
//! Submissions are validated in `from_create_params` and priced in `on_create`, through the
//! [`PricingEngine`] injected as context. A submission whose dish or side cannot be priced is
//! never stored and does not consume an order id.

use super::{OrderAction, OrderActionResult, OrderError, OrderQuery, OrderQueryResult};
use crate::clock::Clock;
use crate::model::{Order, OrderId, OrderSubmission, OrderUpdate};
use crate::pricing::{PricingEngine, Quantity};
use async_trait::async_trait;
use cantina_actor::{ActorEntity, Store, Transaction, Unsupported};
use std::sync::Arc;
use tracing::debug;

/// Dependencies of the Order actor.
#[derive(Clone)]
pub struct OrderContext {
    pub pricing: PricingEngine,
    pub clock: Arc<dyn Clock>,
}

impl OrderContext {
    pub fn new(pricing: PricingEngine, clock: Arc<dyn Clock>) -> Self {
        Self { pricing, clock }
    }
}

fn required(field: &str, value: &mut String) -> Result<(), OrderError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OrderError::InvalidInput(format!("{field} is required")));
    }
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderSubmission;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Query = OrderQuery;
    type QueryResult = OrderQueryResult;
    type Command = Unsupported;
    type CommandResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, mut params: OrderSubmission) -> Result<Self, Self::Error> {
        required("customer name", &mut params.customer_name)?;
        required("dish", &mut params.dish)?;
        required("side", &mut params.side)?;
        Ok(Self::new(id, params))
    }

    /// Prices the order and stamps its creation time. The total never changes afterwards.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        let quantity = Quantity::try_from(self.quantity)?;
        let quote = ctx.pricing.price_order(&self.dish, &self.side, quantity).await?;
        debug!(order_id = %self.id, total = %quote.total, "Order priced");

        self.total = quote.total;
        self.created_at = ctx.clock.now();
        Ok(())
    }

    /// Any lifecycle status may replace any other.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), Self::Error> {
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Advance => {
                let next = self.status.next().ok_or_else(|| {
                    OrderError::InvalidStatus(format!("{} is already {}", self.id, self.status))
                })?;
                self.status = next;
                Ok(OrderActionResult::Advanced(next))
            }
        }
    }

    async fn handle_query(
        store: &Store<Self>,
        query: OrderQuery,
        ctx: &OrderContext,
    ) -> Result<OrderQueryResult, Self::Error> {
        match query {
            OrderQuery::CountToday => {
                let today = ctx.clock.today();
                let count = store.values().filter(|o| o.created_on() == today).count();
                Ok(OrderQueryResult::Count(count))
            }
            OrderQuery::CountOn(date) => {
                let count = store.values().filter(|o| o.created_on() == date).count();
                Ok(OrderQueryResult::Count(count))
            }
            OrderQuery::ForCustomer(customer) => {
                let orders = store
                    .values()
                    .rev()
                    .filter(|o| o.customer_id == Some(customer))
                    .cloned()
                    .collect();
                Ok(OrderQueryResult::Orders(orders))
            }
        }
    }

    async fn handle_command<'s>(
        _tx: &mut Transaction<'s, Self>,
        command: Unsupported,
        _ctx: &OrderContext,
    ) -> Result<(), Self::Error> {
        match command {}
    }
}
