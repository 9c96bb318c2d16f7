//! # Cart State
//!
//! The session-wide cart handle and the snapshot DTOs the views render from.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every view holds a clone of the same `CartState`
//! 2. Only one caller should modify the cart at a time
//! 3. The embedding runtime may dispatch from a pool thread
//!
//! Execution is still effectively single-threaded run-to-completion: each
//! operation locks, sees a fully up-to-date prior state, and produces a new
//! consistent state before any other call can run. The lock is never held
//! across an await point.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  View Action               CartState method        Cart change          │
//! │  ───────────               ────────────────        ───────────          │
//! │                                                                         │
//! │  Click Product ──────────► add_item() ───────────► merge or append,    │
//! │                                                    panel opens          │
//! │  Change Quantity ────────► set_quantity() ───────► qty = n (0 removes) │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ────────► items.retain(..)    │
//! │                                                                         │
//! │  Order placed ───────────► clear() ──────────────► items.clear()       │
//! │                                                                         │
//! │  Toggle panel ───────────► set_open() ───────────► flag only           │
//! │                                                                         │
//! │  Every mutator returns a fresh CartSnapshot so the calling view can    │
//! │  re-render from a single payload.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;

use bloom_core::cart::{Cart, CartLineItem};
use bloom_core::types::Product;

// =============================================================================
// Snapshot DTOs
// =============================================================================

/// Cart totals summary for view rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of unique line items.
    pub item_count: usize,
    /// Sum of quantities across all items (the header badge number).
    pub total_quantity: i64,
    /// Subtotal in cents, before the delivery fee.
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.total_price_cents(),
        }
    }
}

/// Full cart snapshot: items, totals, and panel visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
    pub is_open: bool,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
            is_open: cart.is_open(),
        }
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// Shared handle to the session cart.
///
/// Clone freely: clones share the same underlying cart. The shell creates
/// one per session and hands clones to every consumer; the cart itself is
/// only ever mutated through these methods.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    // -------------------------------------------------------------------------
    // View-facing operations
    // -------------------------------------------------------------------------
    // None of these can fail: bad quantities are normalized and unknown ids
    // are no-ops, so every mutator just returns the fresh snapshot.

    /// Returns the current cart snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        // A closure, not the `From::from` function item: the trait impl is
        // tied to one concrete lifetime and does not satisfy the
        // higher-ranked bound on `with_cart`.
        self.with_cart(|c| CartSnapshot::from(c))
    }

    /// Adds a product to the cart (merge-by-id) and opens the panel.
    pub fn add_item(&self, product: &Product, quantity: i64) -> CartSnapshot {
        debug!(product_id = %product.id, quantity, "add_item");

        self.with_cart_mut(|c| {
            c.add_item(product, quantity);
            CartSnapshot::from(&*c)
        })
    }

    /// Sets an item's quantity; zero or negative removes it.
    pub fn set_quantity(&self, product_id: &str, quantity: i64) -> CartSnapshot {
        debug!(product_id, quantity, "set_quantity");

        self.with_cart_mut(|c| {
            c.set_quantity(product_id, quantity);
            CartSnapshot::from(&*c)
        })
    }

    /// Removes an item by product id. No-op if absent.
    pub fn remove_item(&self, product_id: &str) -> CartSnapshot {
        debug!(product_id, "remove_item");

        self.with_cart_mut(|c| {
            c.remove_item(product_id);
            CartSnapshot::from(&*c)
        })
    }

    /// Empties the cart. Panel visibility is left untouched.
    pub fn clear(&self) -> CartSnapshot {
        debug!("clear");

        self.with_cart_mut(|c| {
            c.clear();
            CartSnapshot::from(&*c)
        })
    }

    /// Shows or hides the cart panel.
    pub fn set_open(&self, visible: bool) -> CartSnapshot {
        debug!(visible, "set_open");

        self.with_cart_mut(|c| {
            c.set_open(visible);
            CartSnapshot::from(&*c)
        })
    }

    /// Current subtotal in cents, recomputed from live state.
    pub fn total_price_cents(&self) -> i64 {
        self.with_cart(Cart::total_price_cents)
    }

    /// Current total quantity across all items.
    pub fn total_quantity(&self) -> i64 {
        self.with_cart(Cart::total_quantity)
    }

    /// Whether the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Bouquet {}", id), price_cents)
    }

    #[test]
    fn test_snapshot_after_mutations() {
        let state = CartState::new();

        let snap = state.add_item(&product("1", 9900), 2);
        assert_eq!(snap.totals.item_count, 1);
        assert_eq!(snap.totals.total_quantity, 2);
        assert_eq!(snap.totals.subtotal_cents, 19800);
        assert!(snap.is_open);

        let snap = state.set_quantity("1", 1);
        assert_eq!(snap.totals.subtotal_cents, 9900);

        let snap = state.remove_item("1");
        assert!(snap.items.is_empty());
        assert_eq!(snap.totals.subtotal_cents, 0);
    }

    #[test]
    fn test_read_only_snapshot_matches_live_state() {
        let state = CartState::new();
        assert!(state.snapshot().items.is_empty());

        state.add_item(&product("1", 100), 2);
        state.set_open(false);

        let snap = state.snapshot();
        assert_eq!(snap.totals.item_count, 1);
        assert_eq!(snap.totals.total_quantity, 2);
        assert_eq!(snap.totals.subtotal_cents, 200);
        assert!(!snap.is_open);
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new();
        let header_handle = state.clone();

        state.add_item(&product("1", 100), 3);
        assert_eq!(header_handle.total_quantity(), 3);

        header_handle.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let state = CartState::new();
        state.add_item(&product("1", 100), 1);

        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["totals"]["subtotalCents"], 100);
        assert_eq!(json["items"][0]["productId"], "1");
        assert_eq!(json["isOpen"], true);
    }
}
