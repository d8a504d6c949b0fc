use cantina::clients::{MenuClient, OrderClient};
use cantina::clock::FixedClock;
use cantina::menu_actor::{MenuError, MenuQueryResult};
use cantina::model::{MenuCatalog, OrderId, OrderSubmission, ResolvedPrices};
use cantina::order_actor::{OrderContext, OrderError};
use cantina::pricing::{PricingEngine, Quantity};
use cantina_actor::mock::MockClient;
use cantina_actor::FrameworkError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

fn submission(quantity: i64) -> OrderSubmission {
    OrderSubmission {
        customer_name: "Bia".into(),
        phone: "11 98888-0000".into(),
        address: "Av. Central, 100".into(),
        dish: "Feijoada".into(),
        side: "Arroz".into(),
        quantity: Quantity::new(quantity).unwrap(),
        note: String::new(),
        payment_method: "dinheiro".into(),
        proof: None,
        customer_id: None,
    }
}

fn prices(dish: Option<i64>, side: Option<i64>) -> MenuQueryResult {
    MenuQueryResult::Prices(ResolvedPrices {
        dish: dish.map(|cents| Decimal::new(cents, 2)),
        side: side.map(|cents| Decimal::new(cents, 2)),
    })
}

/// Real Order actor with a mocked Menu actor behind the pricing engine.
fn start(menus: &MockClient<MenuCatalog>) -> (OrderClient, tokio::task::JoinHandle<()>) {
    let clock = Arc::new(FixedClock::new(
        NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(19, 45, 0)
            .unwrap(),
    ));
    let context = OrderContext::new(PricingEngine::new(MenuClient::new(menus.client())), clock);

    let (order_actor, generic_client) = cantina::order_actor::new(8);
    let handle = tokio::spawn(order_actor.run(context));
    (OrderClient::new(generic_client), handle)
}

#[tokio::test]
async fn test_order_is_priced_through_the_menu_actor() {
    let mut menus = MockClient::<MenuCatalog>::new();
    menus.expect_query().return_ok(prices(Some(1850), Some(400)));

    let (orders, handle) = start(&menus);
    let id = orders.submit(submission(2)).await.expect("Order creation failed");

    let order = orders.order(id).await.unwrap();
    assert_eq!(order.total.to_string(), "45.00");
    assert_eq!(order.created_at.format("%H:%M").to_string(), "19:45");
    menus.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unresolved_side_is_item_not_found() {
    let mut menus = MockClient::<MenuCatalog>::new();
    menus.expect_query().return_ok(prices(Some(1850), None));
    menus.expect_query().return_ok(prices(Some(1850), Some(400)));

    let (orders, handle) = start(&menus);
    let err = orders.submit(submission(1)).await.unwrap_err();
    assert!(matches!(err, OrderError::ItemNotFound(_)));

    // Nothing was stored and the id is still free.
    assert_eq!(orders.submit(submission(1)).await.unwrap(), OrderId(1));
    menus.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_oversized_total_is_rejected_and_the_actor_keeps_serving() {
    let mut menus = MockClient::<MenuCatalog>::new();
    menus.expect_query().return_ok(MenuQueryResult::Prices(ResolvedPrices {
        dish: Some(Decimal::MAX),
        side: Some(Decimal::new(400, 2)),
    }));
    menus.expect_query().return_ok(prices(Some(1850), Some(400)));

    let (orders, handle) = start(&menus);
    let err = orders.submit(submission(4_000_000)).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(ref why) if why.starts_with("total")));

    let id = orders.submit(submission(2)).await.unwrap();
    assert_eq!(id, OrderId(1));
    assert_eq!(orders.order(id).await.unwrap().total.to_string(), "45.00");
    assert_eq!(orders.count_today().await.unwrap(), 1);
    menus.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_menu_outage_is_a_store_error() {
    let mut menus = MockClient::<MenuCatalog>::new();
    menus.expect_query().return_err(FrameworkError::ActorClosed);

    let (orders, handle) = start(&menus);
    let err = orders.submit(submission(1)).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::ActorCommunicationError(
            MenuError::ActorCommunicationError("Actor closed".into()).to_string()
        )
    );

    drop(orders);
    handle.await.unwrap();
}
