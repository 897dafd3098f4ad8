//! # Screen Error Type
//!
//! Unified error type for screen operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow on the Receipt Screen                     │
//! │                                                                         │
//! │  Display layer                 Rust                                     │
//! │  ─────────────                 ────                                     │
//! │                                                                         │
//! │  tap Delete (index 7)                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  ReceiptScreen::delete_item                                      │  │
//! │  │  Result<T, ScreenError>                                          │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError::IndexOutOfRange ──────────────► ScreenError ────────►│  │
//! │  │  { code: INDEX_OUT_OF_RANGE, message: "Item index 7 ..." }       │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Receipt unchanged, message shown as a toast                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors serialize with a machine-readable `code` and a human-readable
//! `message` so the display layer can branch on the code.

use receipt_core::CoreError;
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Error returned from screen operations.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INCOMPLETE_ITEM_INPUT",
///   "message": "Incomplete item input, missing: quantity"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("[{code:?}] {message}")]
pub struct ScreenError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for screen responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// A contact field failed one or more rules
    ValidationFailed,

    /// Add-product input had an empty field
    IncompleteItemInput,

    /// Add-product input had a malformed number
    InvalidItemInput,

    /// Delete targeted a position that doesn't exist
    IndexOutOfRange,

    /// User details could not be loaded
    SourceError,

    /// The add-product modal handshake was misused
    PromptError,
}

impl ScreenError {
    /// Creates a new screen error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ScreenError {
            code,
            message: message.into(),
        }
    }

    /// Creates a prompt handshake error.
    pub fn prompt(message: impl Into<String>) -> Self {
        ScreenError::new(ErrorCode::PromptError, message)
    }
}

/// Converts core errors to screen errors.
impl From<CoreError> for ScreenError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::IncompleteItemInput { .. } => ErrorCode::IncompleteItemInput,
            CoreError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            CoreError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CoreError::Validation(_) => ErrorCode::InvalidItemInput,
            CoreError::SourceUnavailable(_) => ErrorCode::SourceError,
            CoreError::MalformedPayload(e) => {
                tracing::error!("Receipt payload rejected: {}", e);
                ErrorCode::SourceError
            }
        };
        ScreenError::new(code, err.to_string())
    }
}

/// Result type for screen operations.
pub type ScreenResult<T> = Result<T, ScreenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::ValidationError;

    #[test]
    fn test_core_error_codes() {
        let err: ScreenError = CoreError::IndexOutOfRange { index: 3, len: 1 }.into();
        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
        assert_eq!(err.message, "Item index 3 out of range (receipt has 1 items)");

        let err: ScreenError = CoreError::Validation(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::InvalidItemInput);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ScreenError::new(ErrorCode::IncompleteItemInput, "missing: quantity");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INCOMPLETE_ITEM_INPUT");
        assert_eq!(json["message"], "missing: quantity");
    }
}
