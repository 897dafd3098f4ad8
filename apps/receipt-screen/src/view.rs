//! # Receipt View Model
//!
//! Serializable snapshot of the screen for the display layer. Rebuilt after
//! every operation; never mutated in place.

use receipt_core::{FieldReport, PurchaseItem, Receipt};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::ScreenConfig;

/// One rendered line of the purchase table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    /// Position used by the delete button.
    pub index: usize,
    pub item: PurchaseItem,
    pub amount: f64,
    pub formatted_amount: String,
}

/// Everything the receipt template renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReceiptView {
    pub user_name: String,
    pub mob_number: String,
    #[serde(rename = "emailid")]
    pub email_id: String,
    pub address: String,
    pub lines: Vec<LineView>,
    pub total: f64,
    pub formatted_total: String,
    pub show_email_span: bool,
    pub show_mob_num_span: bool,
    pub contact: Vec<FieldReport>,
}

impl ReceiptView {
    pub(crate) fn build(
        receipt: &Receipt,
        config: &ScreenConfig,
        show_email_span: bool,
        show_mob_num_span: bool,
        contact: Vec<FieldReport>,
    ) -> Self {
        let details = receipt.details();
        let lines = receipt
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let amount = item.line_amount();
                LineView {
                    index,
                    item: item.clone(),
                    amount,
                    formatted_amount: config.format_amount(amount),
                }
            })
            .collect();

        ReceiptView {
            user_name: details.user_name.clone(),
            mob_number: details.mob_number.clone(),
            email_id: details.email_id.clone(),
            address: details.address.clone(),
            lines,
            total: receipt.total(),
            formatted_total: config.format_amount(receipt.total()),
            show_email_span,
            show_mob_num_span,
            contact,
        }
    }
}
