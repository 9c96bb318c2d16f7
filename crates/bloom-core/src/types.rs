//! # Domain Types
//!
//! Core domain types used throughout the Bloom storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ PaymentMethod   │   │  DeliverySlot   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (opaque)    │   │  Alipay (dflt)  │   │  Morning        │       │
//! │  │  name           │   │  WechatPay      │   │  Afternoon      │       │
//! │  │  price_cents    │   │  UnionPay       │   │  Evening        │       │
//! │  │  image/category │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `Product.id` is an opaque, caller-supplied string. The cart merges line
//! items on this id alone - never on name or any other display field, so two
//! catalog entries with identical names but different ids stay distinct.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog product supplied by the external catalog views.
///
/// The core never fetches or generates products; catalog pages construct
/// these records and pass them to `Cart::add_item`. The cart snapshots the
/// display fields at add time, so later catalog changes do not affect
/// existing line items.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier - the cart's merge key.
    pub id: String,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// Optional marketing description.
    pub description: Option<String>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Pre-sale price in cents, when the product is discounted.
    pub original_price_cents: Option<i64>,

    /// Image URL for product cards and cart rows.
    pub image: String,

    /// Catalog category (e.g. "roses", "tulips").
    pub category: String,

    /// Whether the product is currently on sale.
    pub is_on_sale: bool,

    /// Whether the product is a new arrival.
    pub is_new: bool,
}

impl Product {
    /// Creates a minimal product record. Mainly useful in tests and docs;
    /// real records come fully populated from the catalog views.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            description: None,
            price_cents,
            original_price_cents: None,
            image: String::new(),
            category: String::new(),
            is_on_sale: false,
            is_new: false,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Payment options offered at checkout.
///
/// Exactly one is selected at all times; the draft defaults to the first
/// option. Payment is not actually processed - the selection is captured
/// for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Alipay wallet payment.
    Alipay,
    /// WeChat Pay wallet payment.
    WechatPay,
    /// UnionPay bank card.
    UnionPay,
}

impl PaymentMethod {
    /// The fixed set of offered methods, in display order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Alipay,
        PaymentMethod::WechatPay,
        PaymentMethod::UnionPay,
    ];
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Alipay
    }
}

// =============================================================================
// Delivery Slot
// =============================================================================

/// Delivery time window for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DeliverySlot {
    /// 9:00-12:00
    Morning,
    /// 12:00-18:00
    Afternoon,
    /// 18:00-21:00
    Evening,
}

impl DeliverySlot {
    /// The fixed set of slots, in display order.
    pub const ALL: [DeliverySlot; 3] = [
        DeliverySlot::Morning,
        DeliverySlot::Afternoon,
        DeliverySlot::Evening,
    ];

    /// The wall-clock window for this slot, for receipts and logs.
    pub const fn window(&self) -> &'static str {
        match self {
            DeliverySlot::Morning => "9:00-12:00",
            DeliverySlot::Afternoon => "12:00-18:00",
            DeliverySlot::Evening => "18:00-21:00",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
