//! # Add-Product Modal Protocol
//!
//! The add-product flow suspends until the user dismisses a modal. That is
//! modelled as a two-step handshake over a oneshot channel:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add-Product Handshake                                │
//! │                                                                         │
//! │  ReceiptScreen                         Modal widget                     │
//! │  ─────────────                         ────────────                     │
//! │                                                                         │
//! │  request_item_input() ──ItemPrompt──► render header + 5 inputs          │
//! │        │               + Responder                                      │
//! │        │                                  │                             │
//! │        │                     Cancel ──► responder.cancel()              │
//! │        │                     Ok     ──► responder.submit(fields)        │
//! │        │                     (closed) ► responder dropped = Cancelled   │
//! │        ▼                                  │                             │
//! │  resolve_item_input().await ◄──PromptOutcome┘                           │
//! │        │                                                                │
//! │        ├── Cancelled ──────────► receipt unchanged                      │
//! │        └── Submitted(fields) ──► Receipt::add_item                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only one prompt can be outstanding at a time; the screen enforces that.

use std::collections::HashMap;

use receipt_core::ITEM_INPUT_FIELDS;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{ScreenError, ScreenResult};

// =============================================================================
// Prompt Description
// =============================================================================

/// HTML input type of a modal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum InputKind {
    Text,
    Number,
}

/// One input of the modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PromptInput {
    pub name: String,
    pub kind: InputKind,
    pub placeholder: String,
    /// Initial value shown in the input.
    pub value: String,
}

/// Role of a modal button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ButtonRole {
    Cancel,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PromptButton {
    pub text: String,
    pub role: ButtonRole,
}

/// Everything the modal widget needs to render the add-product prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemPrompt {
    /// Keys the modal in the display layer and in prompt logs.
    #[ts(as = "String")]
    pub id: Uuid,
    pub header: String,
    pub inputs: Vec<PromptInput>,
    pub buttons: Vec<PromptButton>,
}

impl ItemPrompt {
    /// Builds the add-product prompt: five empty inputs, Cancel and Ok.
    pub fn add_product(header: impl Into<String>) -> Self {
        let placeholders = [
            "Enter Product Name",
            "Enter Quantity",
            "Enter Duration used",
            "Enter Per Hour Cost",
            "Enter Product Discount",
        ];

        let inputs = ITEM_INPUT_FIELDS
            .iter()
            .zip(placeholders)
            .map(|(name, placeholder)| PromptInput {
                name: name.to_string(),
                kind: if *name == "productName" {
                    InputKind::Text
                } else {
                    InputKind::Number
                },
                placeholder: placeholder.to_string(),
                value: String::new(),
            })
            .collect();

        ItemPrompt {
            id: Uuid::new_v4(),
            header: header.into(),
            inputs,
            buttons: vec![
                PromptButton {
                    text: "Cancel".to_string(),
                    role: ButtonRole::Cancel,
                },
                PromptButton {
                    text: "Ok".to_string(),
                    role: ButtonRole::Confirm,
                },
            ],
        }
    }
}

// =============================================================================
// Outcome & Handshake
// =============================================================================

/// How the user dismissed the modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "fields", rename_all = "camelCase")]
pub enum PromptOutcome {
    Cancelled,
    /// Input name → entered text.
    Submitted(HashMap<String, String>),
}

/// The modal widget's side of the handshake.
///
/// Consumed by the first answer. Dropping it unanswered counts as Cancel.
#[derive(Debug)]
pub struct PromptResponder {
    prompt_id: Uuid,
    sender: oneshot::Sender<PromptOutcome>,
}

impl PromptResponder {
    pub fn prompt_id(&self) -> Uuid {
        self.prompt_id
    }

    /// Answers with the Ok button's data.
    pub fn submit(self, fields: HashMap<String, String>) -> ScreenResult<()> {
        self.respond(PromptOutcome::Submitted(fields))
    }

    /// Answers with the Cancel button.
    pub fn cancel(self) -> ScreenResult<()> {
        self.respond(PromptOutcome::Cancelled)
    }

    pub fn respond(self, outcome: PromptOutcome) -> ScreenResult<()> {
        let prompt_id = self.prompt_id;
        debug!(%prompt_id, "prompt answered");
        self.sender
            .send(outcome)
            .map_err(|_| ScreenError::prompt(format!("prompt {} is no longer open", prompt_id)))
    }
}

/// The screen's side of the handshake.
#[derive(Debug)]
pub struct PendingItemInput {
    prompt_id: Uuid,
    receiver: oneshot::Receiver<PromptOutcome>,
}

impl PendingItemInput {
    pub fn prompt_id(&self) -> Uuid {
        self.prompt_id
    }

    /// Waits for the modal to be dismissed.
    pub async fn outcome(self) -> PromptOutcome {
        match self.receiver.await {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!(prompt_id = %self.prompt_id, "responder dropped, treating as cancel");
                PromptOutcome::Cancelled
            }
        }
    }
}

/// Opens a handshake for `prompt`.
pub fn handshake(prompt: &ItemPrompt) -> (PendingItemInput, PromptResponder) {
    let (sender, receiver) = oneshot::channel();
    (
        PendingItemInput {
            prompt_id: prompt.id,
            receiver,
        },
        PromptResponder {
            prompt_id: prompt.id,
            sender,
        },
    )
}
