use cantina::clock::FixedClock;
use cantina::config::CantinaConfig;
use cantina::customer_actor::CustomerError;
use cantina::lifecycle::CantinaSystem;
use cantina::menu_actor::MenuError;
use cantina::model::{
    CustomerCreate, CustomerId, MenuCreate, MenuId, OrderId, OrderStatus, OrderSubmission,
};
use cantina::order_actor::OrderError;
use cantina::pricing::Quantity;
use cantina_actor::ActorClient;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;
use std::sync::Arc;

fn noon(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn start() -> (CantinaSystem, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(noon(10)));
    let system = CantinaSystem::with_clock(&CantinaConfig::default(), clock.clone());
    (system, clock)
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn menu(name: &str, dishes: &[&str], sides: &[&str]) -> MenuCreate {
    MenuCreate {
        name: name.into(),
        dishes: lines(dishes),
        sides: lines(sides),
    }
}

fn submission(dish: &str, side: &str, quantity: i64) -> OrderSubmission {
    OrderSubmission {
        customer_name: "Ana".into(),
        phone: "11 99999-0000".into(),
        address: "Rua das Flores, 12".into(),
        dish: dish.into(),
        side: side.into(),
        quantity: Quantity::new(quantity).unwrap(),
        note: "sem cebola".into(),
        payment_method: "pix".into(),
        proof: Some("uploads/comprovante-1.png".into()),
        customer_id: None,
    }
}

async fn seeded() -> (CantinaSystem, Arc<FixedClock>, MenuId) {
    let (system, clock) = start();
    let id = system
        .menu_client
        .create_menu(menu(
            "Segunda",
            &["Feijoada;18.50", "Strogonoff;21.00"],
            &["Arroz;4.00", "Farofa;3.50"],
        ))
        .await
        .expect("Failed to create menu");
    system.menu_client.activate(id).await.expect("Failed to activate");
    (system, clock, id)
}

async fn active_ids(system: &CantinaSystem) -> Vec<MenuId> {
    system
        .menu_client
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|m| m.active)
        .map(|m| m.id)
        .collect()
}

#[tokio::test]
async fn test_catalog_listing_matches_created_lines() {
    let (system, _clock) = start();

    let id = system
        .menu_client
        .create_menu(menu("Terça", &["A;1", "B;2", "C;3"], &["X;1", "Y;1"]))
        .await
        .unwrap();
    let no_sides = system
        .menu_client
        .create_menu(menu("Quarta", &["D;5"], &[]))
        .await
        .unwrap();

    let menus = system.menu_client.list_all().await.unwrap();
    assert_eq!(menus.len(), 2);
    assert_eq!(menus[0].id, id);
    assert_eq!(menus[0].dish_names(), vec!["A", "B", "C"]);
    assert_eq!(menus[0].sides.len(), 2);
    assert!(!menus[0].active);
    assert_eq!(menus[1].id, no_sides);
    assert!(menus[1].sides.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_catalog_leaves_nothing_behind() {
    let (system, _clock) = start();

    let err = system
        .menu_client
        .create_menu(menu("Quinta", &["Feijoada;18.50", " ;2.00"], &["Arroz;4"]))
        .await
        .unwrap_err();
    assert!(matches!(err, MenuError::InvalidInput(_)));
    assert!(system.menu_client.list_all().await.unwrap().is_empty());

    // The failed create did not consume an id.
    let id = system
        .menu_client
        .create_menu(menu("Quinta", &["Feijoada;18.50"], &[]))
        .await
        .unwrap();
    assert_eq!(id, MenuId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_last_activation_wins() {
    let (system, _clock) = start();
    let mut ids = Vec::new();
    for name in ["Seg", "Ter", "Qua"] {
        ids.push(
            system
                .menu_client
                .create_menu(menu(name, &["Prato;10"], &[]))
                .await
                .unwrap(),
        );
    }

    assert_eq!(
        system.menu_client.active().await.unwrap_err(),
        MenuError::NoActiveMenu
    );

    for &id in [ids[1], ids[0], ids[2], ids[0]].iter() {
        system.menu_client.activate(id).await.unwrap();
        assert_eq!(system.menu_client.active().await.unwrap().id, id);
        assert_eq!(active_ids(&system).await, vec![id]);
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_activating_a_missing_menu_rolls_back() {
    let (system, _clock, id) = seeded().await;

    let err = system.menu_client.activate(MenuId(42)).await.unwrap_err();
    assert_eq!(err, MenuError::NotFound("menu_42".into()));

    // The deactivate-all step was discarded with the failed command.
    assert_eq!(system.menu_client.active().await.unwrap().id, id);
    assert_eq!(active_ids(&system).await, vec![id]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_activations_never_expose_zero_or_two_active_menus() {
    let (system, _clock) = start();
    let mut ids = Vec::new();
    for n in 0..4 {
        ids.push(
            system
                .menu_client
                .create_menu(menu(&format!("Menu {n}"), &["Prato;10"], &[]))
                .await
                .unwrap(),
        );
    }
    system.menu_client.activate(ids[0]).await.unwrap();

    let mut handles = Vec::new();
    for round in 0..40 {
        let menus = system.menu_client.clone();
        let target = ids[round % ids.len()];
        handles.push(tokio::spawn(async move {
            if round % 2 == 0 {
                menus.activate(target).await.unwrap();
            }
            let active = menus
                .list_all()
                .await
                .unwrap()
                .into_iter()
                .filter(|m| m.active)
                .count();
            assert_eq!(active, 1);
            assert!(menus.active().await.is_ok());
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleting_the_active_menu_leaves_none_active() {
    let (system, _clock, id) = seeded().await;
    let order_id = system
        .order_client
        .submit(submission("Feijoada", "Arroz", 1))
        .await
        .unwrap();

    system.menu_client.delete_menu(id).await.unwrap();
    assert_eq!(
        system.menu_client.active().await.unwrap_err(),
        MenuError::NoActiveMenu
    );
    assert_eq!(
        system.menu_client.delete_menu(id).await.unwrap_err(),
        MenuError::NotFound("menu_1".into())
    );

    // Orders keep their own copy of names and prices.
    let order = system.order_client.order(order_id).await.unwrap();
    assert_eq!(order.total.to_string(), "22.50");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_submit_prices_the_order() {
    let (system, _clock, _) = seeded().await;

    let id = system
        .order_client
        .submit(submission("Feijoada", "Arroz", 2))
        .await
        .unwrap();
    let order = system.order_client.order(id).await.unwrap();

    assert_eq!(order.total, Decimal::new(4500, 2));
    assert_eq!(order.total.to_string(), "45.00");
    assert_eq!(order.status, OrderStatus::Received);
    assert_eq!(order.created_at, noon(10));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_dish_creates_no_order() {
    let (system, _clock, _) = seeded().await;

    let err = system
        .order_client
        .submit(submission("Lasanha", "Arroz", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::ItemNotFound(_)));

    let err = system
        .order_client
        .submit(submission("Feijoada", "Purê", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::ItemNotFound(_)));

    assert!(system.order_client.list_newest_first().await.unwrap().is_empty());
    let id = system
        .order_client
        .submit(submission("Feijoada", "Arroz", 1))
        .await
        .unwrap();
    assert_eq!(id, OrderId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_customer_name_is_invalid_input() {
    let (system, _clock, _) = seeded().await;

    let mut nameless = submission("Feijoada", "Arroz", 1);
    nameless.customer_name = "   ".into();
    let err = system.order_client.submit(nameless).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_prices_resolve_by_name_across_every_menu() {
    let (system, _clock) = start();
    let first = system
        .menu_client
        .create_menu(menu("Antigo", &["Feijoada;15.00"], &["Arroz;3.00"]))
        .await
        .unwrap();
    let second = system
        .menu_client
        .create_menu(menu("Novo", &["Feijoada;20.00"], &["Arroz;5.00", "Vinagrete;2.00"]))
        .await
        .unwrap();
    system.menu_client.activate(second).await.unwrap();

    // First match in id order wins, even though another menu is active.
    let id = system
        .order_client
        .submit(submission("Feijoada", "Arroz", 1))
        .await
        .unwrap();
    assert_eq!(system.order_client.order(id).await.unwrap().total.to_string(), "18.00");

    // Names found only in an inactive menu still price.
    system.menu_client.activate(first).await.unwrap();
    let id = system
        .order_client
        .submit(submission("Feijoada", "Vinagrete", 3))
        .await
        .unwrap();
    assert_eq!(system.order_client.order(id).await.unwrap().total.to_string(), "51.00");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_status_transitions_are_permissive_and_validated() {
    let (system, _clock, _) = seeded().await;
    let id = system
        .order_client
        .submit(submission("Strogonoff", "Farofa", 1))
        .await
        .unwrap();

    system.order_client.set_status(id, "Em Preparo").await.unwrap();
    assert_eq!(
        system.order_client.summary(id).await.unwrap().status,
        OrderStatus::InPreparation
    );

    let err = system.order_client.set_status(id, "Bogus").await.unwrap_err();
    assert_eq!(err, OrderError::InvalidStatus("Bogus".into()));
    assert_eq!(
        system.order_client.summary(id).await.unwrap().status,
        OrderStatus::InPreparation
    );

    // Backwards is allowed.
    system.order_client.set_status(id, "Entregue").await.unwrap();
    system.order_client.set_status(id, "Recebido").await.unwrap();
    assert_eq!(
        system.order_client.summary(id).await.unwrap().status,
        OrderStatus::Received
    );

    let err = system
        .order_client
        .set_status(OrderId(99), "Entregue")
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NotFound("order_99".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_advance_walks_the_lifecycle_and_stops() {
    let (system, _clock, _) = seeded().await;
    let id = system
        .order_client
        .submit(submission("Feijoada", "Farofa", 1))
        .await
        .unwrap();

    let mut seen = Vec::new();
    for _ in 0..3 {
        seen.push(system.order_client.advance(id).await.unwrap());
    }
    assert_eq!(
        seen,
        vec![
            OrderStatus::InPreparation,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered
        ]
    );

    let err = system.order_client.advance(id).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidStatus(_)));
    assert_eq!(
        system.order_client.summary(id).await.unwrap().status,
        OrderStatus::Delivered
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_count_today_ignores_earlier_days() {
    let (system, clock, _) = seeded().await;

    for _ in 0..2 {
        system
            .order_client
            .submit(submission("Feijoada", "Arroz", 1))
            .await
            .unwrap();
    }
    assert_eq!(system.order_client.count_today().await.unwrap(), 2);

    clock.advance(TimeDelta::days(1));
    assert_eq!(system.order_client.count_today().await.unwrap(), 0);

    system
        .order_client
        .submit(submission("Strogonoff", "Arroz", 1))
        .await
        .unwrap();
    assert_eq!(system.order_client.count_today().await.unwrap(), 1);
    assert_eq!(
        system
            .order_client
            .count_on(noon(10).date())
            .await
            .unwrap(),
        2
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_submitted_orders_round_trip_through_summary() {
    let (system, _clock, _) = seeded().await;

    let cases = [("Feijoada", "Arroz", 1), ("Strogonoff", "Farofa", 4), ("Feijoada", "Farofa", 7)];
    let mut ids = Vec::new();
    for (dish, side, qty) in cases {
        ids.push(
            system
                .order_client
                .submit(submission(dish, side, qty))
                .await
                .unwrap(),
        );
    }

    for (id, (dish, side, qty)) in ids.iter().zip(cases) {
        let full = system.order_client.order(*id).await.unwrap();
        let summary = system.order_client.summary(*id).await.unwrap();
        assert_eq!(summary.dish, dish);
        assert_eq!(summary.side, side);
        assert_eq!(summary.quantity, qty as u32);
        assert_eq!(summary.total, full.total);
        assert_eq!(summary.payment_method, "pix");
    }

    let newest_first: Vec<OrderId> = system
        .order_client
        .list_newest_first()
        .await
        .unwrap()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(newest_first, vec![OrderId(3), OrderId(2), OrderId(1)]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_accounts_and_history() {
    let (system, clock, _) = seeded().await;
    let customers = &system.customer_client;

    let ana = customers
        .register(CustomerCreate {
            name: "Ana".into(),
            email: "ana@cantina.com".into(),
            phone: "11 99999-0000".into(),
            credential: "digest-1".into(),
        })
        .await
        .unwrap();

    let duplicate = customers
        .register(CustomerCreate {
            name: "Outra Ana".into(),
            email: "ANA@Cantina.com".into(),
            phone: String::new(),
            credential: "digest-2".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(duplicate, CustomerError::Conflict(_)));

    let found = customers.find_by_email("Ana@cantina.com").await.unwrap();
    assert_eq!(found.id, ana);
    assert!(matches!(
        customers.find_by_email("bia@cantina.com").await,
        Err(CustomerError::NotFound(_))
    ));

    // Reset tokens must match and be unexpired.
    customers
        .issue_reset_token(ana, "tok-1".into(), noon(10) + TimeDelta::hours(1))
        .await
        .unwrap();
    assert!(matches!(
        customers
            .redeem_reset_token(ana, "wrong".into(), "digest-3".into())
            .await,
        Err(CustomerError::InvalidInput(_))
    ));
    clock.advance(TimeDelta::hours(2));
    assert!(customers
        .redeem_reset_token(ana, "tok-1".into(), "digest-3".into())
        .await
        .is_err());

    customers
        .issue_reset_token(ana, "tok-2".into(), noon(10) + TimeDelta::hours(3))
        .await
        .unwrap();
    customers
        .redeem_reset_token(ana, "tok-2".into(), "digest-3".into())
        .await
        .unwrap();
    assert_eq!(
        customers.find_by_email("ana@cantina.com").await.unwrap().credential,
        "digest-3"
    );

    // History only contains the customer's own orders, newest first.
    let mut own = submission("Feijoada", "Arroz", 1);
    own.customer_id = Some(ana);
    let first = system.order_client.submit(own.clone()).await.unwrap();
    system
        .order_client
        .submit(submission("Feijoada", "Arroz", 1))
        .await
        .unwrap();
    let second = system.order_client.submit(own).await.unwrap();

    let history: Vec<OrderId> = system
        .order_client
        .history(ana)
        .await
        .unwrap()
        .iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(history, vec![second, first]);
    assert!(system
        .order_client
        .history(CustomerId(99))
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}
