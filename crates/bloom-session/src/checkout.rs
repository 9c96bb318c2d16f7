//! # Checkout Orchestrator
//!
//! Drives one checkout attempt: holds the draft, runs the submission state
//! machine, and finalizes the order against the cart.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Submission Flow                                │
//! │                                                                         │
//! │  submit()                                                               │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Guard: state must be Idle (re-entrant calls rejected)      │    │
//! │  │  2. Guard: cart must be non-empty                              │    │
//! │  │  3. Guard: draft validates (required fields, date not past)    │    │
//! │  │  4. state = Submitting (form disabled)                         │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │     │                                                                   │
//! │     ▼  fixed-latency simulated placement (always succeeds,              │
//! │        not cancellable - no real network behind it)                     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  5. cart.clear()                                               │    │
//! │  │  6. state = Done (terminal for this draft)                     │    │
//! │  │  7. navigator.order_placed()  → confirmation destination       │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  A rejected submit performs NO state transition: the draft stays       │
//! │  editable and the cart is untouched.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! The submission is the only operation here that suspends. While it sleeps,
//! the `Submitting` state is the sole mechanism preventing duplicate
//! submissions - there is no queue or semaphore because at most one
//! submission can be in flight per draft by construction. The inner mutex is
//! never held across the await point.

use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::{debug, info};

use bloom_core::checkout::{CheckoutDraft, SubmissionState};
use bloom_core::error::CheckoutError;
use bloom_core::money::Money;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState};

// =============================================================================
// Navigator
// =============================================================================

/// Destination signal for a completed order.
///
/// The navigation layer is an external collaborator: it is injected here
/// (rather than discovered by polling for view modules) and invoked exactly
/// once when the submission reaches `Done`. No payload accompanies the
/// signal - there is no order record to carry.
pub trait Navigator: Send + Sync {
    /// Move the user to the order-success destination.
    fn order_placed(&self);
}

// =============================================================================
// Checkout Orchestrator
// =============================================================================

/// Orchestrates one checkout attempt over the session cart.
///
/// ## Lifecycle
/// Created fresh each time the checkout view is entered, holding a new
/// `CheckoutDraft` in `Idle`. After a successful submission the draft is
/// spent (`Done` is terminal); checking out again requires a fresh
/// orchestrator.
pub struct CheckoutOrchestrator {
    cart: CartState,
    config: ConfigState,
    navigator: Arc<dyn Navigator>,
    inner: Mutex<Inner>,
}

/// Draft and submission state, guarded together so every observer sees a
/// consistent pair.
#[derive(Debug, Default)]
struct Inner {
    draft: CheckoutDraft,
    state: SubmissionState,
}

impl CheckoutOrchestrator {
    /// Creates an orchestrator with a fresh draft in `Idle`.
    pub fn new(cart: CartState, config: ConfigState, navigator: Arc<dyn Navigator>) -> Self {
        CheckoutOrchestrator {
            cart,
            config,
            navigator,
            inner: Mutex::new(Inner::default()),
        }
    }

    // -------------------------------------------------------------------------
    // Draft access
    // -------------------------------------------------------------------------

    /// Returns a copy of the current draft for form rendering.
    pub fn draft(&self) -> CheckoutDraft {
        self.lock().draft.clone()
    }

    /// Applies a field update to the draft.
    ///
    /// ## Behavior
    /// Permitted only while `Idle`: once a submission is in flight the form
    /// is non-editable, and a completed draft is discarded rather than
    /// edited.
    pub fn update_draft<F>(&self, f: F) -> Result<(), ApiError>
    where
        F: FnOnce(&mut CheckoutDraft),
    {
        let mut inner = self.lock();
        match inner.state {
            SubmissionState::Idle => {
                f(&mut inner.draft);
                Ok(())
            }
            SubmissionState::Submitting => Err(CheckoutError::AlreadySubmitting.into()),
            SubmissionState::Done => Err(CheckoutError::AlreadyCompleted.into()),
        }
    }

    /// Current submission state.
    pub fn submission_state(&self) -> SubmissionState {
        self.lock().state
    }

    // -------------------------------------------------------------------------
    // Display totals
    // -------------------------------------------------------------------------

    /// Cart subtotal in cents, read fresh from the cart.
    pub fn subtotal_cents(&self) -> i64 {
        self.cart.total_price_cents()
    }

    /// The flat delivery fee in cents.
    pub fn delivery_fee_cents(&self) -> i64 {
        self.config.delivery_fee_cents
    }

    /// Display total: subtotal + flat delivery fee. No weight/distance
    /// computation, no per-item shipping.
    pub fn total_cents(&self) -> i64 {
        let subtotal = Money::from_cents(self.subtotal_cents());
        let fee = Money::from_cents(self.config.delivery_fee_cents);
        (subtotal + fee).cents()
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Submits the order.
    ///
    /// ## Behavior
    /// - Rejected (no state transition) if a submission is already in flight
    ///   or done, if the cart is empty, if any required field is blank, or
    ///   if the delivery date is in the past
    /// - Otherwise transitions `Idle → Submitting`, sleeps for the
    ///   configured fixed latency (the simulated placement cannot fail and
    ///   is not cancellable), then clears the cart, transitions to `Done`,
    ///   and signals the navigator
    pub async fn submit(&self) -> Result<(), ApiError> {
        debug!("submit");

        // Phase 1: guards + transition to Submitting, under the lock
        {
            let mut inner = self.lock();
            match inner.state {
                SubmissionState::Idle => {}
                SubmissionState::Submitting => {
                    return Err(CheckoutError::AlreadySubmitting.into())
                }
                SubmissionState::Done => return Err(CheckoutError::AlreadyCompleted.into()),
            }

            if self.cart.is_empty() {
                return Err(CheckoutError::EmptyCart.into());
            }

            inner
                .draft
                .validate(Local::now().date_naive())
                .map_err(ApiError::from)?;

            inner.state = SubmissionState::Submitting;
        }

        info!(
            total_cents = self.total_cents(),
            latency_ms = self.config.submit_latency_ms,
            "order submission started"
        );

        // Simulated order placement: fixed latency, always succeeds.
        // The lock is NOT held across this await; the Submitting state is
        // what keeps duplicate submissions out.
        tokio::time::sleep(self.config.submit_latency()).await;

        // Phase 2: finalize
        self.cart.clear();
        self.lock().state = SubmissionState::Done;
        self.navigator.order_placed();

        info!("order placed, cart cleared");
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("Checkout mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
