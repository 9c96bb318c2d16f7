//! # Error Types
//!
//! Domain-specific error types for bloom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bloom-core errors (this file)                                         │
//! │  ├── CheckoutError    - Submission guard violations                    │
//! │  └── ValidationError  - Draft field validation failures                │
//! │                                                                         │
//! │  bloom-session errors (separate crate)                                 │
//! │  └── ApiError         - What the external views see (serialized)       │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → ApiError → View layer         │
//! │                                                                         │
//! │  Note: CART operations have NO error type at all. Out-of-range         │
//! │  quantities are normalized and unknown ids are no-ops, so the cart     │
//! │  cannot fail.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, date, etc.)
//! 3. Errors are enum variants, never String

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Checkout submission errors.
///
/// Every variant means the submit attempt was rejected with **no state
/// transition**: the draft stays editable and the cart is untouched.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no items; the checkout view must show its empty state
    /// instead of allowing submission.
    #[error("cart is empty")]
    EmptyCart,

    /// A submission is already in flight for this draft. The disabled-submit
    /// guard is the sole duplicate-submission defence.
    #[error("an order submission is already in progress")]
    AlreadySubmitting,

    /// This draft already completed; a fresh draft is required to order again.
    #[error("order already placed for this draft")]
    AlreadyCompleted,

    /// Draft field validation failed (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Draft field validation errors.
///
/// The external form is expected to enforce these before `submit()` is
/// reachable; the orchestrator re-checks them as its submit guard.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// The delivery date is earlier than the current date.
    #[error("delivery date {date} is in the past")]
    DateInPast { date: NaiveDate },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
