//! # API Error Type
//!
//! Unified error type handed to the external view layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bloom                                  │
//! │                                                                         │
//! │  View layer                      Session layer                          │
//! │  ──────────                      ─────────────                          │
//! │                                                                         │
//! │  orchestrator.submit()                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Result<(), ApiError>                                            │  │
//! │  │         │                                                        │  │
//! │  │  Empty cart? ────── CheckoutError::EmptyCart ──────┐            │  │
//! │  │         │                                          ▼            │  │
//! │  │  Blank field? ───── ValidationError ───────────── ApiError ────►│  │
//! │  │         │                                          ▲            │  │
//! │  │  In flight? ─────── AlreadySubmitting ─────────────┘            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "VALIDATION_ERROR", "message": "phone is required" }        │
//! │                                                                         │
//! │  Cart mutations never produce errors at all: the cart normalizes       │
//! │  bad input instead of rejecting it.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use bloom_core::error::CheckoutError;

/// API error returned to the view layer.
///
/// ## Serialization
/// This is what the views receive when an operation fails:
/// ```json
/// {
///   "code": "EMPTY_CART",
///   "message": "cart is empty"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Draft field validation failed
    ValidationError,

    /// Checkout attempted with an empty cart
    EmptyCart,

    /// Submission lifecycle violation (re-entrant or completed draft)
    CheckoutState,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts checkout errors to API errors.
impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        match &err {
            CheckoutError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, err.to_string()),
            CheckoutError::AlreadySubmitting | CheckoutError::AlreadyCompleted => {
                ApiError::new(ErrorCode::CheckoutState, err.to_string())
            }
            CheckoutError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}
