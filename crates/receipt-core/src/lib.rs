//! # receipt-core: Pure Business Logic for the Receipt Screen
//!
//! This crate holds everything the receipt screen computes: the line items,
//! the total, the add/delete editor and the contact field rules. It has zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Screen Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Display layer (template, modal widget)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ReceiptView / ItemPrompt               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    receipt-screen (app crate)                   │   │
//! │  │     ReceiptScreen, ContactForm, modal protocol, config          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   total   │  │  editor   │  │ validation│  │   │
//! │  │   │ Purchase- │  │ compute_  │  │  Receipt  │  │  RuleSet  │  │   │
//! │  │   │ Item, ... │  │  total    │  │ add / del │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                            │   │
//! │  │                        │  source   │ ReceiptSource::load()      │   │
//! │  │                        └───────────┘                            │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PurchaseItem, UserDetails, ItemInput)
//! - [`total`] - Total calculator
//! - [`editor`] - Receipt data store with add/delete
//! - [`validation`] - Contact field rules and add-product input parsing
//! - [`source`] - Injected loaders for user details
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{FixtureSource, Receipt, ReceiptSource};
//!
//! let mut receipt = Receipt::new(FixtureSource.load().unwrap());
//! assert!((receipt.total() - 2237.0).abs() < 1e-9);
//!
//! receipt.delete_item(0).unwrap();
//! assert!((receipt.total() - 1388.0).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod editor;
pub mod error;
pub mod source;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use editor::Receipt;
pub use error::{CoreError, CoreResult, ValidationError};
pub use source::{FixtureSource, JsonSource, ReceiptSource};
pub use total::compute_total;
pub use types::*;
pub use validation::{validate_item, ContactField, FieldReport, RuleKind, RuleSet};
