use async_trait::async_trait;
use cart_store::cart::{self, CartAction, CartError};
use cart_store::checkout::{
    run_checkout, spawn_checkout, FixedItems, ItemsSource, SimulatedGateway, SimulatedOutcome,
};
use cart_store::model::{CartItems, CheckoutStatus, ProductId};
use std::sync::Arc;
use std::time::Duration;

struct UnreachableItems;

#[async_trait]
impl ItemsSource for UnreachableItems {
    async fn current_items(&self) -> Result<Arc<CartItems>, CartError> {
        Err(CartError::StoreCommunication("offline".into()))
    }
}

/// Real store actor driven by `run_checkout` with the simulated gateway.
#[tokio::test]
async fn test_run_checkout_against_real_store() {
    let (actor, store) = cart::new(8);
    let handle = tokio::spawn(actor.run());

    store
        .dispatch(CartAction::AddToCart(ProductId::from("A")))
        .await
        .unwrap();

    let gateway = SimulatedGateway::approving(Duration::from_millis(1));
    let state = run_checkout(&store, &gateway, &store).await.unwrap();
    assert_eq!(state.checkout_status, CheckoutStatus::Ready);
    assert!(state.is_empty());

    drop(store);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_simulated_outcomes_map_to_status() {
    let (actor, store) = cart::new(8);
    let handle = tokio::spawn(actor.run());
    let snapshot = FixedItems(Arc::new(CartItems::new()));

    let declining = SimulatedGateway::new(Duration::from_millis(1), SimulatedOutcome::Decline);
    let state = run_checkout(&store, &declining, &snapshot).await.unwrap();
    assert_eq!(state.checkout_status, CheckoutStatus::Error);
    assert_eq!(state.error_message, "");

    let failing = SimulatedGateway::new(
        Duration::from_millis(1),
        SimulatedOutcome::Fail("card expired".into()),
    );
    let state = run_checkout(&store, &failing, &snapshot).await.unwrap();
    assert_eq!(state.checkout_status, CheckoutStatus::Error);
    assert_eq!(state.error_message, "card expired");

    drop(store);
    handle.await.unwrap();
}

/// Items that cannot be read reject the checkout instead of leaving it in LOADING.
#[tokio::test]
async fn test_unreadable_items_reject_checkout() {
    let (actor, store) = cart::new(8);
    let handle = tokio::spawn(actor.run());

    let gateway = SimulatedGateway::approving(Duration::from_millis(1));
    let state = run_checkout(&store, &gateway, &UnreachableItems).await.unwrap();

    assert_eq!(state.checkout_status, CheckoutStatus::Error);
    assert_eq!(state.error_message, "Store communication error: offline");

    drop(store);
    handle.await.unwrap();
}

/// A closed store surfaces as an error rather than a checkout outcome.
#[tokio::test]
async fn test_closed_store_fails_checkout() {
    let (actor, store) = cart::new(8);
    drop(actor);

    let gateway = SimulatedGateway::approving(Duration::from_millis(1));
    let result = run_checkout(&store, &gateway, &store).await;

    assert!(matches!(result, Err(CartError::StoreCommunication(_))));
}

/// A spawned checkout finishes even when nobody keeps its handle.
#[tokio::test]
async fn test_spawned_checkout_outlives_its_handle() {
    let (actor, store) = cart::new(8);
    let handle = tokio::spawn(actor.run());
    store
        .dispatch(CartAction::AddToCart(ProductId::from("A")))
        .await
        .unwrap();

    let gateway = Arc::new(SimulatedGateway::approving(Duration::from_millis(20)));
    drop(spawn_checkout(store.clone(), gateway, Arc::new(store.clone())));

    let mut state = store.snapshot().await.unwrap();
    for _ in 0..200 {
        if state.checkout_status == CheckoutStatus::Ready && state.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
        state = store.snapshot().await.unwrap();
    }
    assert_eq!(state.checkout_status, CheckoutStatus::Ready);
    assert!(state.is_empty());

    drop(store);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_spawned_checkout_returns_outcome_state() {
    let (actor, store) = cart::new(8);
    let handle = tokio::spawn(actor.run());

    let gateway = Arc::new(SimulatedGateway::new(
        Duration::from_millis(1),
        SimulatedOutcome::Decline,
    ));
    let snapshot = Arc::new(FixedItems(Arc::new(CartItems::new())));
    let state = spawn_checkout(store.clone(), gateway, snapshot)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(state.checkout_status, CheckoutStatus::Error);

    drop(store);
    handle.await.unwrap();
}
