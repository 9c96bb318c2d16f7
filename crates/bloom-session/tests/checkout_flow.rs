//! End-to-end session flow: browse → cart → checkout → confirmation.
//!
//! Exercises the full path the external views drive: catalog adds, cart
//! panel edits, and a checkout submission that ends with an empty cart and
//! a navigation signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Local;

use bloom_core::checkout::SubmissionState;
use bloom_core::types::{DeliverySlot, PaymentMethod, Product};
use bloom_session::{CartState, CheckoutOrchestrator, ConfigState, Navigator};

/// Records whether the order-success destination was reached.
#[derive(Default)]
struct RecordingNavigator {
    reached: AtomicBool,
}

impl Navigator for RecordingNavigator {
    fn order_placed(&self) {
        self.reached.store(true, Ordering::SeqCst);
    }
}

fn rose() -> Product {
    Product {
        id: "A".to_string(),
        name: "Red Rose Bouquet".to_string(),
        description: Some("A dozen red roses".to_string()),
        price_cents: 100,
        original_price_cents: None,
        image: "https://img.example/roses.jpg".to_string(),
        category: "roses".to_string(),
        is_on_sale: false,
        is_new: true,
    }
}

#[tokio::test(start_paused = true)]
async fn full_checkout_flow() {
    let cart = CartState::new();

    // Catalog view: add one rose bouquet
    let snap = cart.add_item(&rose(), 1);
    assert_eq!(snap.totals.total_quantity, 1);
    assert_eq!(snap.totals.subtotal_cents, 100);
    assert!(snap.is_open); // adding opens the cart panel

    // Product detail view: add the same product again with quantity 2.
    // Exactly one line item for "A" with the quantities summed.
    let snap = cart.add_item(&rose(), 2);
    assert_eq!(snap.totals.item_count, 1);
    assert_eq!(snap.items[0].quantity, 3);
    assert_eq!(snap.totals.subtotal_cents, 300);

    // Cart panel: dropping the quantity to zero removes the line item
    let snap = cart.set_quantity("A", 0);
    assert!(snap.items.is_empty());
    assert_eq!(snap.totals.subtotal_cents, 0);

    // Shopper changes their mind and re-adds before checking out
    cart.add_item(&rose(), 2);

    // Checkout view: fresh orchestrator over the session cart
    let nav = Arc::new(RecordingNavigator::default());
    let orch = CheckoutOrchestrator::new(cart.clone(), ConfigState::default(), nav.clone());

    // Order summary shows subtotal + flat ¥15 delivery fee
    assert_eq!(orch.subtotal_cents(), 200);
    assert_eq!(orch.total_cents(), 200 + 1500);

    // Fill the form
    orch.update_draft(|d| {
        d.name = "李娜".to_string();
        d.phone = "13900139000".to_string();
        d.address = "5 Orchard Lane".to_string();
        d.city = "Beijing".to_string();
        d.postal_code = "100000".to_string();
        d.delivery_date = Some(Local::now().date_naive());
        d.delivery_slot = Some(DeliverySlot::Evening);
        d.message = "Happy birthday!".to_string();
        d.payment_method = PaymentMethod::WechatPay;
    })
    .unwrap();

    // Idle → Submitting → Done (the 2s simulated placement runs under
    // paused time)
    assert_eq!(orch.submission_state(), SubmissionState::Idle);
    orch.submit().await.unwrap();
    assert_eq!(orch.submission_state(), SubmissionState::Done);

    // Success side effects: cart cleared, navigation signalled
    assert!(cart.is_empty());
    assert_eq!(cart.snapshot().totals.subtotal_cents, 0);
    assert!(nav.reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn empty_cart_never_reaches_submitting() {
    let cart = CartState::new();
    let nav = Arc::new(RecordingNavigator::default());
    let orch = CheckoutOrchestrator::new(cart, ConfigState::default(), nav.clone());

    orch.update_draft(|d| {
        d.name = "李娜".to_string();
        d.phone = "13900139000".to_string();
        d.address = "5 Orchard Lane".to_string();
        d.city = "Beijing".to_string();
        d.postal_code = "100000".to_string();
        d.delivery_date = Some(Local::now().date_naive());
        d.delivery_slot = Some(DeliverySlot::Morning);
    })
    .unwrap();

    assert!(orch.submit().await.is_err());
    assert_eq!(orch.submission_state(), SubmissionState::Idle);
    assert!(!nav.reached.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn fresh_draft_required_after_success() {
    let cart = CartState::new();
    cart.add_item(&rose(), 1);

    let nav = Arc::new(RecordingNavigator::default());
    let orch = CheckoutOrchestrator::new(cart.clone(), ConfigState::default(), nav.clone());
    orch.update_draft(|d| {
        d.name = "李娜".to_string();
        d.phone = "13900139000".to_string();
        d.address = "5 Orchard Lane".to_string();
        d.city = "Beijing".to_string();
        d.postal_code = "100000".to_string();
        d.delivery_date = Some(Local::now().date_naive());
        d.delivery_slot = Some(DeliverySlot::Morning);
    })
    .unwrap();
    orch.submit().await.unwrap();

    // The spent orchestrator refuses further submissions...
    cart.add_item(&rose(), 1);
    assert!(orch.submit().await.is_err());

    // ...but a fresh one over the same cart checks out fine
    let orch2 = CheckoutOrchestrator::new(cart.clone(), ConfigState::default(), nav.clone());
    orch2
        .update_draft(|d| {
            d.name = "李娜".to_string();
            d.phone = "13900139000".to_string();
            d.address = "5 Orchard Lane".to_string();
            d.city = "Beijing".to_string();
            d.postal_code = "100000".to_string();
            d.delivery_date = Some(Local::now().date_naive());
            d.delivery_slot = Some(DeliverySlot::Morning);
        })
        .unwrap();
    orch2.submit().await.unwrap();

    assert_eq!(orch2.submission_state(), SubmissionState::Done);
    assert!(cart.is_empty());
}
