//! # Cart Module
//!
//! The shopping cart: an ordered collection of line items keyed by product
//! id, plus the visibility flag for the cart panel.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  View Action              Operation              State Change           │
//! │  ───────────              ─────────              ────────────           │
//! │                                                                         │
//! │  Click "Add to Cart" ───► add_item() ──────────► merge or append,      │
//! │                                                  is_open = true         │
//! │                                                                         │
//! │  Change Quantity ───────► set_quantity() ──────► items[i].qty = n      │
//! │                                                  (n <= 0 removes)       │
//! │                                                                         │
//! │  Click Remove ──────────► remove_item() ───────► items.retain(..)      │
//! │                                                                         │
//! │  Order placed ──────────► clear() ─────────────► items.clear()         │
//! │                                                                         │
//! │  Open/close panel ──────► set_open() ──────────► is_open flag only     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No-Fail Contract
//! Unlike most stores, cart operations never return `Result`: out-of-range
//! quantities are normalized (clamped on add, treated as removal on update)
//! and unknown product ids are no-ops. Consistency is maintained by
//! construction, not by rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line Item
// =============================================================================

/// One entry in the cart, keyed by product identity.
///
/// ## Snapshot Pattern
/// Display fields (`name`, `image`, `category`) and the unit price are
/// copied from the product at add time and never change afterwards, even if
/// the catalog record is later updated. The cart always shows what the
/// shopper put in it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product id - the merge key. Identity, never display equality.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Image URL at time of adding (frozen).
    pub image: String,

    /// Category at time of adding (frozen).
    pub category: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart. Always >= 1 while the item is present.
    pub quantity: i64,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Creates a new line item from a product and quantity.
    fn from_product(product: &Product, quantity: i64) -> Self {
        CartLineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            unit_price_cents: product.price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price().multiply_quantity(self.quantity).cents()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line item per `product_id` (adding again merges quantity)
/// - Every present item has quantity >= 1 (quantity <= 0 removes the item)
/// - Insertion order is preserved for stable display; it carries no
///   semantic weight
///
/// ## Lifecycle
/// Created empty at session start, mutated only through the methods below,
/// destroyed with the session. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items, in insertion order.
    pub items: Vec<CartLineItem>,

    /// Whether the cart panel is currently shown.
    is_open: bool,
}

impl Cart {
    /// Creates a new empty cart with the panel closed.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            is_open: false,
        }
    }

    /// Adds a product to the cart, merging by product id.
    ///
    /// ## Behavior
    /// - Quantity is clamped to at least 1
    /// - If the product is already in the cart: its quantity increases by
    ///   `quantity`; the existing snapshot and position are kept
    /// - Otherwise: a new line item is appended
    /// - Always opens the cart panel, even if it was closed
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        let quantity = quantity.max(1);

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartLineItem::from_product(product, quantity));
        }

        self.is_open = true;
    }

    /// Sets the quantity of an item in place.
    ///
    /// ## Behavior
    /// - Quantity <= 0: behaves exactly as `remove_item`
    /// - Product not in cart: no-op
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes an item from the cart by product id. No-op if absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Clears all items. The panel visibility flag is left untouched.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether the cart panel is shown.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Shows or hides the cart panel. Pure flag, no item interaction.
    pub fn set_open(&mut self, visible: bool) {
        self.is_open = visible;
    }

    /// Returns the number of unique line items in the cart.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the cart subtotal in cents.
    ///
    /// Recomputed fresh from current items on every call - never cached, so
    /// it can never be stale after a mutation.
    pub fn total_price_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents())
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
