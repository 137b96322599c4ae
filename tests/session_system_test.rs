use khana_session::catalog::Catalog;
use khana_session::clients::SessionClient;
use khana_session::config::{ConfigError, SessionConfig};
use khana_session::framework::ActorClient;
use khana_session::lifecycle::{RestaurantSystem, SystemError};
use khana_session::model::{Category, MenuItem, MenuItemId, OrderStatus, SessionId, TickOutcome};
use khana_session::session_actor::SessionError;
use std::time::Duration;

const TICK: Duration = Duration::from_secs(10);

fn system() -> RestaurantSystem {
    RestaurantSystem::new(
        SessionConfig::default().with_tick_interval(TICK),
        Catalog::default_menu(),
    )
    .expect("default config is valid")
}

fn dish(id: &str, price: f64) -> MenuItem {
    MenuItem::new(id, format!("Dish {id}"), price, Category::Main)
}

/// Sleeps to the middle of the `n`th tick window after placement.
async fn half_ticks(n: u32) {
    tokio::time::sleep(TICK * n / 2).await;
}

async fn status(sessions: &SessionClient, id: SessionId) -> OrderStatus {
    sessions
        .active_order(id)
        .await
        .expect("Failed to read order")
        .expect("No active order")
        .status
}

#[tokio::test]
async fn test_repeated_add_accumulates_quantity() {
    let system = system();
    let sessions = system.sessions.clone();
    let id = sessions.open_session(None).await.unwrap();

    assert_eq!(sessions.add_item(id, dish("A", 10.0)).await.unwrap(), 1);
    sessions.add_item(id, dish("A", 10.0)).await.unwrap();
    sessions.add_item(id, dish("A", 10.0)).await.unwrap();

    let cart = sessions.cart(id).await.unwrap();
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 3);
    assert_eq!(sessions.cart_total(id).await.unwrap(), 30.0);
    assert_eq!(sessions.cart_count(id).await.unwrap(), 3);

    drop(sessions);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cart_edits_never_fail_on_unknown_items() {
    let system = system();
    let sessions = &system.sessions;
    let id = sessions.open_session(Some("Ravi".into())).await.unwrap();
    sessions.add_item(id, dish("A", 4.0)).await.unwrap();
    sessions.add_item(id, dish("B", 6.0)).await.unwrap();

    assert!(!sessions.remove_item(id, MenuItemId::from("Z")).await.unwrap());
    assert_eq!(
        sessions.update_quantity(id, MenuItemId::from("Z"), 3).await.unwrap(),
        None
    );
    assert_eq!(
        sessions.update_quantity(id, MenuItemId::from("A"), -7).await.unwrap(),
        Some(1)
    );
    assert_eq!(
        sessions.update_quantity(id, MenuItemId::from("B"), 2).await.unwrap(),
        Some(3)
    );
    assert_eq!(sessions.cart_total(id).await.unwrap(), 22.0);

    assert!(sessions.remove_item(id, MenuItemId::from("B")).await.unwrap());
    sessions.clear_cart(id).await.unwrap();
    assert!(sessions.cart(id).await.unwrap().is_empty());

    let session = sessions.session(id).await.unwrap();
    assert_eq!(session.customer.as_deref(), Some("Ravi"));
}

#[tokio::test]
async fn test_place_on_empty_cart_is_noop() {
    let system = system();
    let sessions = &system.sessions;
    let id = sessions.open_session(None).await.unwrap();

    assert_eq!(sessions.place_order(id).await.unwrap(), None);
    assert_eq!(sessions.active_order(id).await.unwrap(), None);
    assert!(!sessions.session(id).await.unwrap().is_tracking());
}

#[tokio::test(start_paused = true)]
async fn test_order_walks_to_delivered_on_timer() {
    let system = system();
    let sessions = system.sessions.clone();
    let id = sessions.open_session(None).await.unwrap();
    for _ in 0..3 {
        sessions.add_item(id, dish("A", 15.0)).await.unwrap();
    }

    let order = sessions.place_order(id).await.unwrap().expect("Order placed");
    assert_eq!(order.total, 45.0);
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.item_count(), 3);
    assert!((30..=44).contains(&order.estimated_minutes));
    assert!(sessions.cart(id).await.unwrap().is_empty());

    half_ticks(1).await;
    assert_eq!(status(&sessions, id).await, OrderStatus::Placed);
    half_ticks(2).await;
    assert_eq!(status(&sessions, id).await, OrderStatus::Preparing);
    half_ticks(2).await;
    assert_eq!(status(&sessions, id).await, OrderStatus::OutForDelivery);
    half_ticks(2).await;
    assert_eq!(status(&sessions, id).await, OrderStatus::Delivered);

    // the tracker is done; a manual fourth tick is inert
    half_ticks(6).await;
    assert!(!sessions.session(id).await.unwrap().is_tracking());
    let outcome = sessions.advance_order(id, order.id.clone()).await.unwrap();
    assert_eq!(outcome, TickOutcome::AlreadyDelivered);

    let delivered = sessions.active_order(id).await.unwrap().unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(delivered.id, order.id);
    assert_eq!(delivered.total, 45.0);

    drop(sessions);
    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_second_order_rejected_while_in_progress() {
    let system = system();
    let sessions = &system.sessions;
    let id = sessions.open_session(None).await.unwrap();
    sessions.add_item(id, dish("A", 10.0)).await.unwrap();
    let first = sessions.place_order(id).await.unwrap().unwrap();

    sessions.add_item(id, dish("B", 5.0)).await.unwrap();
    let err = sessions.place_order(id).await.unwrap_err();
    assert_eq!(err, SessionError::OrderInProgress(first.id.clone()));

    // cart and order untouched
    assert_eq!(sessions.cart_total(id).await.unwrap(), 5.0);
    assert_eq!(sessions.active_order(id).await.unwrap().unwrap().id, first.id);

    half_ticks(7).await;
    assert_eq!(status(sessions, id).await, OrderStatus::Delivered);

    let second = sessions.place_order(id).await.unwrap().unwrap();
    assert_ne!(second.id, first.id);
    assert_eq!(second.total, 5.0);
    assert_eq!(second.status, OrderStatus::Placed);

    half_ticks(3).await;
    assert_eq!(status(sessions, id).await, OrderStatus::Preparing);
}

#[tokio::test(start_paused = true)]
async fn test_closing_session_stops_tracker() {
    let system = system();
    let sessions = &system.sessions;
    let id = sessions.open_session(None).await.unwrap();
    sessions.add_item(id, dish("A", 10.0)).await.unwrap();
    sessions.place_order(id).await.unwrap().unwrap();

    let snapshot = sessions.session(id).await.unwrap();
    assert!(snapshot.is_tracking());

    half_ticks(3).await;
    assert_eq!(status(sessions, id).await, OrderStatus::Preparing);

    sessions.close_session(id).await.unwrap();
    half_ticks(1).await;
    assert!(!snapshot.is_tracking());

    assert_eq!(
        sessions.cart(id).await,
        Err(SessionError::NotFound(id.to_string()))
    );
    assert_eq!(
        sessions.close_session(id).await,
        Err(SessionError::NotFound(id.to_string()))
    );
    assert!(sessions.get(id).await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_sessions_are_isolated() {
    let system = system();
    let sessions = &system.sessions;
    let alice = sessions.open_session(Some("Alice".into())).await.unwrap();
    let bob = sessions.open_session(Some("Bob".into())).await.unwrap();
    assert_ne!(alice, bob);

    sessions.add_item(alice, dish("A", 10.0)).await.unwrap();
    sessions.add_item(bob, dish("B", 3.0)).await.unwrap();
    sessions.add_item(bob, dish("B", 3.0)).await.unwrap();

    let order = sessions.place_order(alice).await.unwrap().unwrap();
    assert_eq!(order.total, 10.0);
    assert_eq!(sessions.cart_total(bob).await.unwrap(), 6.0);
    assert_eq!(sessions.active_order(bob).await.unwrap(), None);

    // another session's order id is stale here
    assert_eq!(
        sessions.advance_order(bob, order.id.clone()).await.unwrap(),
        TickOutcome::Stale
    );

    half_ticks(3).await;
    assert_eq!(status(sessions, alice).await, OrderStatus::Preparing);
    assert_eq!(sessions.active_order(bob).await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_with_running_tracker() {
    let system = system();
    let id = system.sessions.open_session(None).await.unwrap();
    system.sessions.add_item(id, dish("A", 10.0)).await.unwrap();
    let snapshot = {
        system.sessions.place_order(id).await.unwrap();
        system.sessions.session(id).await.unwrap()
    };
    assert!(snapshot.is_tracking());

    system.shutdown().await.unwrap();
    half_ticks(1).await;
    assert!(!snapshot.is_tracking());
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let system = system();
    let missing = SessionId(99);

    assert_eq!(
        system.sessions.add_item(missing, dish("A", 1.0)).await,
        Err(SessionError::NotFound("session_99".into()))
    );
    assert_eq!(
        system.sessions.active_order(missing).await,
        Err(SessionError::NotFound("session_99".into()))
    );
}

#[tokio::test]
async fn test_invalid_session_config_is_rejected() {
    let bad = [
        SessionConfig::default().with_tick_interval(Duration::ZERO),
        SessionConfig {
            estimate_min: 50,
            estimate_max: 40,
            ..SessionConfig::default()
        },
        SessionConfig {
            actor_buffer: 0,
            ..SessionConfig::default()
        },
    ];

    for config in bad {
        let result = RestaurantSystem::new(config.clone(), Catalog::default_menu());
        assert!(
            matches!(result, Err(SystemError::Config(_))),
            "accepted {config:?}"
        );
    }

    match RestaurantSystem::new(
        SessionConfig {
            estimate_min: 50,
            estimate_max: 40,
            ..SessionConfig::default()
        },
        Catalog::default_menu(),
    ) {
        Err(SystemError::Config(err)) => {
            assert_eq!(err, ConfigError::InvertedEstimate { min: 50, max: 40 })
        }
        _ => panic!("inverted estimate range was accepted"),
    }
}

#[tokio::test]
async fn test_shutdown_does_not_wait_for_client_clones() {
    let system = system();
    let sessions = system.sessions.clone();
    let id = sessions.open_session(None).await.unwrap();
    assert_eq!(sessions.place_order(id).await.unwrap(), None);
    sessions.close_session(id).await.unwrap();

    tokio::time::timeout(Duration::from_secs(2), system.shutdown())
        .await
        .expect("shutdown hung on a live client clone")
        .unwrap();

    assert!(matches!(
        sessions.open_session(None).await,
        Err(SessionError::ActorCommunicationError(_))
    ));
}
