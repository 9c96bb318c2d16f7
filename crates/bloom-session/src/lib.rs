//! # Bloom Session Library
//!
//! Session-scoped state for the Bloom storefront. This is the surface the
//! external presentational views (catalog pages, cart panel, checkout form,
//! navigation) talk to.
//!
//! ## Module Organization
//! ```text
//! bloom_session/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartState + snapshot DTOs
//! │   └── config.rs   ◄─── Store configuration
//! ├── checkout.rs     ◄─── CheckoutOrchestrator + Navigator
//! └── error.rs        ◄─── ApiError for the view layer
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state
//! types. Each consumer holds only what it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Architecture                           │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    CartState     │ │   ConfigState    │ │ CheckoutOrchestrator │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  Arc<Mutex<      │ │  store name      │ │  draft + submission  │   │
//! │  │    Cart>>        │ │  delivery fee    │ │  state machine       │   │
//! │  │                  │ │  submit latency  │ │  (one per checkout)  │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  OWNERSHIP: the shell creates CartState once per session and hands     │
//! │  clones (cheap Arc clones) to every view. Only CartState's own         │
//! │  methods mutate the cart - single writer discipline.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod checkout;
pub mod error;
pub mod state;

pub use checkout::{CheckoutOrchestrator, Navigator};
pub use error::{ApiError, ErrorCode};
pub use state::{CartSnapshot, CartState, CartTotals, ConfigState};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// Call once from the embedding shell at session start.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bloom=trace` - Show trace for bloom crates only
/// - Default: INFO level with bloom crates at DEBUG
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,bloom=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
