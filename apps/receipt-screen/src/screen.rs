//! # Receipt Screen State
//!
//! The state behind one on-screen receipt, and every operation the display
//! layer can trigger on it.
//!
//! ## Screen Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Screen Operations                            │
//! │                                                                         │
//! │  Display Action           Screen Method              State Change       │
//! │  ──────────────           ─────────────              ────────────       │
//! │                                                                         │
//! │  Screen opens ──────────► open(source, config) ────► Receipt::new       │
//! │                                                                         │
//! │  Tap "+" ───────────────► request_item_input() ────► prompt pending     │
//! │  Modal dismissed ───────► resolve_item_input() ────► items.push(item)   │
//! │                                                                         │
//! │  Tap delete on row i ───► delete_item(i) ──────────► items.remove(i)    │
//! │                                                                         │
//! │  Tap email / mobile ────► toggle_*_span() ─────────► flag = !flag       │
//! │                                                                         │
//! │  Type in contact input ─► set_contact(field, v) ───► form value + report│
//! │                                                                         │
//! │  Render ────────────────► view() ──────────────────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Events are processed one at a time on the UI thread, so the screen is a
//! plain owned value with `&mut self` methods; no locking.

use receipt_core::{
    ContactField, FieldReport, ItemInput, PurchaseItem, Receipt, ReceiptSource, UserDetails,
};
use serde::Serialize;
use tracing::{info, warn};
use ts_rs::TS;

use crate::config::ScreenConfig;
use crate::error::{ScreenError, ScreenResult};
use crate::form::ContactForm;
use crate::prompt::{handshake, ItemPrompt, PendingItemInput, PromptOutcome, PromptResponder};
use crate::view::ReceiptView;

/// What the modal widget receives when the add-product flow starts.
#[derive(Debug)]
pub struct ItemInputRequest {
    pub prompt: ItemPrompt,
    pub responder: PromptResponder,
}

/// How a resolved add-product prompt changed the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum ItemInputResolution {
    /// User pressed Cancel (or the modal closed unanswered).
    Cancelled,
    /// The item was appended at `index`.
    Added {
        index: usize,
        item: PurchaseItem,
        total: f64,
    },
}

/// One receipt screen, from open to teardown.
#[derive(Debug)]
pub struct ReceiptScreen {
    receipt: Receipt,
    form: ContactForm,
    config: ScreenConfig,
    show_email_span: bool,
    show_mob_num_span: bool,
    pending: Option<PendingItemInput>,
}

impl ReceiptScreen {
    /// Opens the screen with details loaded from `source`.
    pub fn open(source: &impl ReceiptSource, config: ScreenConfig) -> ScreenResult<Self> {
        let details = source.load().map_err(|err| {
            warn!(error = %err, "receipt source failed");
            ScreenError::from(err)
        })?;

        Ok(Self::with_details(details, config))
    }

    /// Opens the screen over already-loaded details.
    pub fn with_details(details: UserDetails, config: ScreenConfig) -> Self {
        let receipt = Receipt::new(details);
        info!(
            user = %receipt.details().user_name,
            items = receipt.item_count(),
            total = receipt.total(),
            "receipt screen opened"
        );

        ReceiptScreen {
            receipt,
            form: ContactForm::new(),
            config,
            show_email_span: true,
            show_mob_num_span: true,
            pending: None,
        }
    }

    // =========================================================================
    // Receipt
    // =========================================================================

    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    /// The total amount to be paid.
    pub fn total(&self) -> f64 {
        self.receipt.total()
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Deletes the line at `index`.
    pub fn delete_item(&mut self, index: usize) -> ScreenResult<PurchaseItem> {
        Ok(self.receipt.delete_item(index)?)
    }

    // =========================================================================
    // Add-Product Modal
    // =========================================================================

    /// Starts the add-product flow.
    ///
    /// Hand `prompt` and `responder` to the modal widget, then await
    /// [`ReceiptScreen::resolve_item_input`].
    ///
    /// ## Errors
    /// - `PromptError` if a prompt is already outstanding
    pub fn request_item_input(&mut self) -> ScreenResult<ItemInputRequest> {
        if let Some(pending) = &self.pending {
            return Err(ScreenError::prompt(format!(
                "prompt {} is still open",
                pending.prompt_id()
            )));
        }

        let prompt = ItemPrompt::add_product(self.config.prompt_header.clone());
        let (pending, responder) = handshake(&prompt);
        info!(prompt_id = %prompt.id, "add product prompt presented");
        self.pending = Some(pending);

        Ok(ItemInputRequest { prompt, responder })
    }

    /// True while a prompt is waiting to be resolved.
    pub fn has_pending_prompt(&self) -> bool {
        self.pending.is_some()
    }

    /// Waits for the outstanding prompt and applies its outcome.
    ///
    /// ## Returns
    /// - `Ok(Cancelled)` - receipt unchanged
    /// - `Ok(Added { .. })` - item appended, total recomputed
    /// - `Err(IncompleteItemInput | InvalidItemInput)` - receipt unchanged
    /// - `Err(PromptError)` - no prompt was outstanding
    pub async fn resolve_item_input(&mut self) -> ScreenResult<ItemInputResolution> {
        let pending = self
            .pending
            .take()
            .ok_or_else(|| ScreenError::prompt("no add product prompt is open"))?;

        match pending.outcome().await {
            PromptOutcome::Cancelled => {
                info!("add product cancelled");
                Ok(ItemInputResolution::Cancelled)
            }
            PromptOutcome::Submitted(fields) => {
                info!(?fields, "add product submitted");
                let index = self.receipt.add_item(&ItemInput::from_fields(&fields))?;
                Ok(ItemInputResolution::Added {
                    index,
                    item: self.receipt.items()[index].clone(),
                    total: self.receipt.total(),
                })
            }
        }
    }

    // =========================================================================
    // Visibility Toggles
    // =========================================================================

    pub fn show_email_span(&self) -> bool {
        self.show_email_span
    }

    pub fn show_mob_num_span(&self) -> bool {
        self.show_mob_num_span
    }

    /// Flips the email span flag and returns the new value.
    pub fn toggle_email_span(&mut self) -> bool {
        self.show_email_span = !self.show_email_span;
        self.show_email_span
    }

    /// Flips the mobile number span flag and returns the new value.
    pub fn toggle_mob_num_span(&mut self) -> bool {
        self.show_mob_num_span = !self.show_mob_num_span;
        self.show_mob_num_span
    }

    // =========================================================================
    // Contact Form
    // =========================================================================

    pub fn contact_form(&self) -> &ContactForm {
        &self.form
    }

    /// Records a keystroke in a contact input and returns its report.
    pub fn set_contact(&mut self, field: ContactField, value: impl Into<String>) -> FieldReport {
        self.form.set(field, value)
    }

    /// Messages under `field`, in declaration order.
    pub fn contact_messages(&self, field: ContactField) -> Vec<String> {
        self.form.messages(field)
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Snapshot for rendering.
    pub fn view(&self) -> ReceiptView {
        ReceiptView::build(
            &self.receipt,
            &self.config,
            self.show_email_span,
            self.show_mob_num_span,
            self.form.reports(),
        )
    }
}
