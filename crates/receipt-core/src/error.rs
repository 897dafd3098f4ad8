//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── CoreError        - Editor / loader / contact-field failures       │
//! │  └── ValidationError  - Malformed add-product input                    │
//! │                                                                         │
//! │  receipt-screen errors (app crate)                                     │
//! │  └── ScreenError      - What the display layer sees (serialized)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ScreenError → Display layer       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. The worst outcome of any of them is an
//! unchanged receipt.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The add-product modal was submitted with one or more fields empty.
    ///
    /// ## When This Occurs
    /// - User pressed Ok without filling every input
    /// - `missing` lists the input names in modal order
    #[error("Incomplete item input, missing: {}", .missing.join(", "))]
    IncompleteItemInput { missing: Vec<String> },

    /// Delete was requested for a position that doesn't exist.
    #[error("Item index {index} out of range (receipt has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A contact field fails one or more of its declared rules.
    ///
    /// ## User Workflow
    /// ```text
    /// User types "abc" into Email
    ///      │
    ///      ▼
    /// Rule runner: pattern fails
    ///      │
    ///      ▼
    /// ValidationFailed { field: "emailid", messages: ["Enter a valid email."] }
    ///      │
    ///      ▼
    /// UI shows message under the field, other fields unaffected
    /// ```
    #[error("{field} is invalid: {}", .messages.join(" "))]
    ValidationFailed { field: String, messages: Vec<String> },

    /// The receipt source could not produce user details.
    #[error("Receipt source unavailable: {0}")]
    SourceUnavailable(String),

    /// The API payload could not be decoded.
    #[error("Malformed receipt payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Numeric validation errors for purchase items, raised by the add-product
/// modal, loaded payloads and direct pushes alike. Empty modal fields are
/// reported as [`CoreError::IncompleteItemInput`] instead.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is below the allowed minimum.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. "abc" typed into a number input).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Item index 5 out of range (receipt has 2 items)"
        );

        let err = CoreError::IncompleteItemInput {
            missing: vec!["quantity".to_string(), "perHrCost".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Incomplete item input, missing: quantity, perHrCost"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Negative {
            field: "productDiscount".to_string(),
        };
        assert_eq!(err.to_string(), "productDiscount must not be negative");

        let err = ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "expected a whole number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "quantity has invalid format: expected a whole number"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
