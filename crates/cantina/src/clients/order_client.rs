//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! Pricing happens inside the actor's `on_create` hook, so `submit` is a single request.
use crate::model::{CustomerId, Order, OrderId, OrderStatus, OrderSubmission, OrderSummary, OrderUpdate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError, OrderQuery, OrderQueryResult};
use async_trait::async_trait;
use cantina_actor::{ActorClient, FrameworkError, ResourceClient};
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Prices and stores a new order in the `Recebido` state.
    #[instrument(skip(self))]
    pub async fn submit(&self, submission: OrderSubmission) -> Result<OrderId, OrderError> {
        info!("Sending submit to actor");
        self.inner.create(submission).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.fetch(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// The reduced customer-facing view.
    pub async fn summary(&self, id: OrderId) -> Result<OrderSummary, OrderError> {
        Ok(self.order(id).await?.summary())
    }

    /// Sets the status from its label. Any label may replace any other.
    ///
    /// Unknown labels fail with [`OrderError::InvalidStatus`] before the actor is contacted.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, label: &str) -> Result<Order, OrderError> {
        let status: OrderStatus = label
            .parse()
            .map_err(|_| OrderError::InvalidStatus(label.to_string()))?;
        self.update_status(id, status).await
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(Self::map_error)
    }

    /// Moves the order one step forward; fails once delivered.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        let OrderActionResult::Advanced(status) = self
            .inner
            .perform_action(id, OrderAction::Advance)
            .await
            .map_err(Self::map_error)?;
        Ok(status)
    }

    /// Every order, highest id first.
    #[instrument(skip(self))]
    pub async fn list_newest_first(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list_all().await?;
        orders.reverse();
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn count_today(&self) -> Result<usize, OrderError> {
        self.count(OrderQuery::CountToday).await
    }

    #[instrument(skip(self))]
    pub async fn count_on(&self, date: NaiveDate) -> Result<usize, OrderError> {
        self.count(OrderQuery::CountOn(date)).await
    }

    /// A customer's orders, newest first.
    #[instrument(skip(self))]
    pub async fn history(&self, customer: CustomerId) -> Result<Vec<Order>, OrderError> {
        match self.query(OrderQuery::ForCustomer(customer)).await? {
            OrderQueryResult::Orders(orders) => Ok(orders),
            other => Err(unexpected(other)),
        }
    }

    async fn count(&self, query: OrderQuery) -> Result<usize, OrderError> {
        match self.query(query).await? {
            OrderQueryResult::Count(count) => Ok(count),
            other => Err(unexpected(other)),
        }
    }

    async fn query(&self, query: OrderQuery) -> Result<OrderQueryResult, OrderError> {
        self.inner.query(query).await.map_err(Self::map_error)
    }
}

fn unexpected(reply: OrderQueryResult) -> OrderError {
    OrderError::ActorCommunicationError(format!("unexpected reply: {reply:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantina_actor::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn unknown_label_never_reaches_the_actor() {
        let mock = MockClient::<Order>::new();
        let orders = OrderClient::new(mock.client());

        let err = orders.set_status(OrderId(1), "Bogus").await.unwrap_err();
        assert_eq!(err, OrderError::InvalidStatus("Bogus".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn missing_order_maps_to_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(7)).return_ok(None);
        mock.expect_update(OrderId(7))
            .return_err(FrameworkError::NotFound("order_7".into()));

        let orders = OrderClient::new(mock.client());
        assert_eq!(
            orders.order(OrderId(7)).await.unwrap_err(),
            OrderError::NotFound("order_7".into())
        );
        assert_eq!(
            orders.set_status(OrderId(7), "Entregue").await.unwrap_err(),
            OrderError::NotFound("order_7".into())
        );
        mock.verify();
    }

    #[tokio::test]
    async fn advance_returns_the_new_status() {
        let (client, mut receiver) = create_mock_client::<Order>(4);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.advance(OrderId(2)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(2));
        assert!(matches!(action, OrderAction::Advance));
        responder
            .send(Ok(OrderActionResult::Advanced(OrderStatus::InPreparation)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), OrderStatus::InPreparation);
    }
}
