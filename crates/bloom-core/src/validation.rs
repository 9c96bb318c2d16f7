//! # Validation Module
//!
//! Draft field validators for the checkout form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: External checkout form                                       │
//! │  ├── `required` inputs, min date on the date picker                    │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (orchestrator submit guard)                      │
//! │  ├── Presence of every required recipient/delivery field               │
//! │  └── Delivery date not in the past                                     │
//! │                                                                         │
//! │  The core re-checks what the form promises, so a submit call can       │
//! │  never transition state on an incomplete draft.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Presence is the only rule for recipient fields - free text, no format
//! validation of phone numbers or postal codes.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required free-text field is present.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// ## Example
/// ```rust
/// use bloom_core::validation::validate_required;
///
/// assert!(validate_required("name", "张伟").is_ok());
/// assert!(validate_required("name", "").is_err());
/// assert!(validate_required("name", "   ").is_err());
/// ```
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a delivery date against the current date.
///
/// ## Rules
/// - Must be today or later; same-day delivery is allowed
///
/// `today` is passed in by the caller so this stays a pure function - the
/// session layer supplies the wall-clock date.
pub fn validate_delivery_date(date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if date < today {
        return Err(ValidationError::DateInPast { date });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "张伟").is_ok());
        assert!(validate_required("address", "1 Garden Road").is_ok());

        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "\t\n").is_err());
    }

    #[test]
    fn test_validate_delivery_date() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();

        // Today and future are fine
        assert!(validate_delivery_date(today, today).is_ok());
        assert!(validate_delivery_date(today.succ_opt().unwrap(), today).is_ok());

        // Yesterday is rejected
        let yesterday = today.pred_opt().unwrap();
        assert!(validate_delivery_date(yesterday, today).is_err());
    }
}
