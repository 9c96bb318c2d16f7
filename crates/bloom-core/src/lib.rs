//! # bloom-core: Pure Business Logic for the Bloom Storefront
//!
//! This crate is the **heart** of the Bloom storefront. It contains the cart
//! and checkout business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bloom Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 External Views (catalog, cart panel,            │   │
//! │  │                 checkout form, navigation)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bloom-session                                │   │
//! │  │    CartState, ConfigState, CheckoutOrchestrator                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bloom-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   Draft   │  │   │
//! │  │   │  enums    │  │  ¥ cents  │  │ LineItem  │  │  rules    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, PaymentMethod, DeliverySlot)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and line-item logic (merge-by-id, totals)
//! - [`checkout`] - Checkout draft, submission states, draft validation
//! - [`validation`] - Field-level validators
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, timer access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **No-fail Cart**: Cart operations normalize bad input instead of erroring
//!
//! ## Example Usage
//!
//! ```rust
//! use bloom_core::cart::Cart;
//! use bloom_core::types::Product;
//!
//! let rose = Product::new("p-1", "Rose Bouquet", 9900);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&rose, 2);
//!
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.total_price_cents(), 19800);
//! assert!(cart.is_open()); // adding always opens the cart panel
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bloom_core::Money` instead of
// `use bloom_core::money::Money`

pub use cart::{Cart, CartLineItem};
pub use checkout::{CheckoutDraft, SubmissionState};
pub use error::{CheckoutError, ValidationError};
pub use money::Money;
pub use types::{DeliverySlot, PaymentMethod, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat delivery fee in cents, added on top of the cart subtotal at checkout.
///
/// ## Business Reason
/// Delivery is priced as a single flat fee (¥15) regardless of weight,
/// distance, or item count. There is no per-item shipping.
pub const DELIVERY_FEE_CENTS: i64 = 1500;

/// Default simulated order-placement latency in milliseconds.
///
/// Order placement is a fixed-latency simulated operation with no real
/// network behind it. The session layer sleeps for this long between
/// `Submitting` and `Done`.
pub const SUBMIT_LATENCY_MS: u64 = 2000;
