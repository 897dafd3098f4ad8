//! # Receipt Screen
//!
//! State and operations behind the receipt screen. The template and the
//! modal widget live in the display layer; this crate hands them a
//! [`ReceiptView`] to render and an [`ItemPrompt`] to present.
//!
//! ## Module Organization
//! ```text
//! receipt_screen/
//! ├── lib.rs          ◄─── You are here (re-exports, tracing setup)
//! ├── screen.rs       ◄─── ReceiptScreen: every display-triggered operation
//! ├── prompt.rs       ◄─── Add-product modal description + oneshot handshake
//! ├── form.rs         ◄─── Contact form values and validation reports
//! ├── view.rs         ◄─── Serializable snapshot for rendering
//! ├── config.rs       ◄─── Display configuration
//! └── error.rs        ◄─── ScreenError for the display layer
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::FixtureSource;
//! use receipt_screen::{ReceiptScreen, ScreenConfig};
//!
//! receipt_screen::init_tracing();
//!
//! let mut screen = ReceiptScreen::open(&FixtureSource, ScreenConfig::default()).unwrap();
//! screen.delete_item(0).unwrap();
//! assert_eq!(screen.view().formatted_total, "₹1388.00");
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod prompt;
pub mod screen;
pub mod view;

use tracing_subscriber::EnvFilter;

pub use config::ScreenConfig;
pub use error::{ErrorCode, ScreenError, ScreenResult};
pub use form::ContactForm;
pub use prompt::{ItemPrompt, PromptOutcome, PromptResponder};
pub use screen::{ItemInputRequest, ItemInputResolution, ReceiptScreen};
pub use view::{LineView, ReceiptView};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=receipt_core=trace` - Trace the core crate only
/// - Default: INFO, DEBUG for the receipt crates
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,receipt_core=debug,receipt_screen=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
