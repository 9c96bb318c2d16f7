//! # State Module
//!
//! Session-scoped state types.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, we use
//! separate state types:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Signatures**: Consumers declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Types                                          │
//! │                                                                         │
//! │  ┌──────────────────┐          ┌──────────────────────┐                 │
//! │  │    CartState     │          │     ConfigState      │                 │
//! │  │                  │          │                      │                 │
//! │  │  Arc<Mutex<      │          │  store_name          │                 │
//! │  │    Cart>>        │          │  delivery_fee_cents  │                 │
//! │  │                  │          │  submit_latency_ms   │                 │
//! │  └──────────────────┘          └──────────────────────┘                 │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartSnapshot, CartState, CartTotals};
pub use config::ConfigState;
