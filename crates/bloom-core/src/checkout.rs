//! # Checkout Module
//!
//! The checkout draft (shipping, delivery, and payment form state) and the
//! submission state machine it moves through.
//!
//! ## Submission State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               Submission Lifecycle (per draft)                          │
//! │                                                                         │
//! │   ┌──────────┐   submit() accepted   ┌────────────┐   fixed delay      │
//! │   │   Idle   │──────────────────────►│ Submitting │───────────────┐    │
//! │   │ editable │                       │  disabled  │               │    │
//! │   └──────────┘                       └────────────┘               ▼    │
//! │        ▲                                                    ┌────────┐ │
//! │        │  rejected submit (empty cart, blank field,         │  Done  │ │
//! │        │  past date, re-entrant call): NO transition        │terminal│ │
//! │        └────────────────────────────────────────────────────└────────┘ │
//! │                                                                         │
//! │   Done clears the cart and signals navigation. A fresh draft in Idle   │
//! │   is required to check out again.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An Order is a transient artifact: it exists only as the side effect
//! "cart cleared + navigate to confirmation". No order record, identifier,
//! or history is retained.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CheckoutResult;
use crate::types::{DeliverySlot, PaymentMethod};
use crate::validation::{validate_delivery_date, validate_required};

// =============================================================================
// Submission State
// =============================================================================

/// The state of a checkout draft's submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    /// Form fields editable; submit permitted once the guard passes.
    Idle,
    /// A submission is in flight; the form is non-editable and the submit
    /// control is disabled.
    Submitting,
    /// Terminal for this draft: the order was placed.
    Done,
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

// =============================================================================
// Checkout Draft
// =============================================================================

/// The in-progress, not-yet-submitted checkout form state.
///
/// ## Lifecycle
/// Created fresh each time the checkout view is entered; discarded on
/// success or navigation away. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDraft {
    /// Recipient name. Required, free text.
    pub name: String,

    /// Contact phone. Required, free text - no format validation.
    pub phone: String,

    /// Street address. Required.
    pub address: String,

    /// City. Required.
    pub city: String,

    /// Postal code. Required, free text.
    pub postal_code: String,

    /// Requested delivery date. Required; must be today or later.
    #[ts(as = "Option<String>")]
    pub delivery_date: Option<NaiveDate>,

    /// Requested delivery window. Required.
    pub delivery_slot: Option<DeliverySlot>,

    /// Optional free-text message to the recipient.
    pub message: String,

    /// Selected payment method. Exactly one is always selected;
    /// defaults to the first enumerated option.
    pub payment_method: PaymentMethod,
}

impl CheckoutDraft {
    /// Creates an empty draft with the default payment method selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft against the submit guard rules.
    ///
    /// ## Checks
    /// - All required recipient fields present (name, phone, address, city,
    ///   postal code)
    /// - Delivery date present and not earlier than `today`
    /// - Delivery slot selected
    ///
    /// The optional message and the payment method (which always holds a
    /// valid selection) are not checked.
    pub fn validate(&self, today: NaiveDate) -> CheckoutResult<()> {
        validate_required("name", &self.name)?;
        validate_required("phone", &self.phone)?;
        validate_required("address", &self.address)?;
        validate_required("city", &self.city)?;
        validate_required("postal_code", &self.postal_code)?;

        let date = self
            .delivery_date
            .ok_or(crate::error::ValidationError::Required {
                field: "delivery_date",
            })?;
        validate_delivery_date(date, today)?;

        if self.delivery_slot.is_none() {
            return Err(crate::error::ValidationError::Required {
                field: "delivery_slot",
            }
            .into());
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CheckoutError, ValidationError};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn complete_draft() -> CheckoutDraft {
        CheckoutDraft {
            name: "张伟".to_string(),
            phone: "13800138000".to_string(),
            address: "88 Garden Road".to_string(),
            city: "Shanghai".to_string(),
            postal_code: "200000".to_string(),
            delivery_date: Some(today()),
            delivery_slot: Some(DeliverySlot::Morning),
            message: String::new(),
            payment_method: PaymentMethod::default(),
        }
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = CheckoutDraft::new();
        assert_eq!(draft.payment_method, PaymentMethod::Alipay);
        assert!(draft.delivery_date.is_none());
        assert!(draft.delivery_slot.is_none());
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn test_complete_draft_validates() {
        assert!(complete_draft().validate(today()).is_ok());
    }

    #[test]
    fn test_blank_required_field_rejected() {
        for blank in ["name", "phone", "address", "city", "postal_code"] {
            let mut draft = complete_draft();
            match blank {
                "name" => draft.name.clear(),
                "phone" => draft.phone.clear(),
                "address" => draft.address.clear(),
                "city" => draft.city.clear(),
                _ => draft.postal_code.clear(),
            }

            let err = draft.validate(today()).unwrap_err();
            assert!(
                matches!(
                    err,
                    CheckoutError::Validation(ValidationError::Required { field }) if field == blank
                ),
                "expected Required({blank}), got {err:?}"
            );
        }
    }

    #[test]
    fn test_missing_date_and_slot_rejected() {
        let mut draft = complete_draft();
        draft.delivery_date = None;
        assert!(draft.validate(today()).is_err());

        let mut draft = complete_draft();
        draft.delivery_slot = None;
        assert!(draft.validate(today()).is_err());
    }

    #[test]
    fn test_past_delivery_date_rejected() {
        let mut draft = complete_draft();
        draft.delivery_date = Some(today().pred_opt().unwrap());

        let err = draft.validate(today()).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Validation(ValidationError::DateInPast { .. })
        ));
    }

    #[test]
    fn test_empty_message_is_fine() {
        let mut draft = complete_draft();
        draft.message = String::new();
        assert!(draft.validate(today()).is_ok());
    }
}
