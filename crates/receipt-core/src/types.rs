//! # Domain Types
//!
//! Core domain types for the receipt screen.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ApiResponse ──► data ──► UserDetails                                  │
//! │                           ┌─────────────────┐   ┌─────────────────┐    │
//! │                           │  UserDetails    │   │  PurchaseItem   │    │
//! │                           │  ─────────────  │   │  ─────────────  │    │
//! │                           │  userName       │   │  productName    │    │
//! │                           │  mobNumber      │   │  quantity       │    │
//! │                           │  emailid        │   │  duration       │    │
//! │                           │  address        │   │  perHrCost      │    │
//! │                           │  purchaseInfo ──┼──►│  productDiscount│    │
//! │                           └─────────────────┘   └─────────────────┘    │
//! │                                                                         │
//! │  ItemInput: raw text from the add-product modal, parsed into a         │
//! │             PurchaseItem at the boundary (see `validation`)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names on the wire keep the API's spelling (`emailid`, `perHrCost`).

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Purchase Item
// =============================================================================

/// One purchased product line on the receipt.
///
/// ## Invariants
/// - `quantity` is positive
/// - `duration`, `per_hr_cost`, `product_discount` are non-negative
/// - The line amount may still be negative when the discount exceeds the
///   gross amount; it is never clamped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PurchaseItem {
    /// Display label (not unique).
    pub product_name: String,

    /// Number of units.
    pub quantity: u32,

    /// Hours used.
    pub duration: f64,

    /// Cost per hour, per unit.
    pub per_hr_cost: f64,

    /// Flat deduction applied once per line.
    pub product_discount: f64,
}

impl PurchaseItem {
    /// Creates a purchase item.
    pub fn new(
        product_name: impl Into<String>,
        quantity: u32,
        duration: f64,
        per_hr_cost: f64,
        product_discount: f64,
    ) -> Self {
        PurchaseItem {
            product_name: product_name.into(),
            quantity,
            duration,
            per_hr_cost,
            product_discount,
        }
    }

    /// Gross amount before the discount.
    #[inline]
    pub fn gross_amount(&self) -> f64 {
        self.duration * self.per_hr_cost * f64::from(self.quantity)
    }

    /// Line amount: `duration × perHrCost × quantity − productDiscount`.
    #[inline]
    pub fn line_amount(&self) -> f64 {
        self.gross_amount() - self.product_discount
    }
}

// =============================================================================
// User Details
// =============================================================================

/// The user record shown on the receipt, with its purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserDetails {
    pub user_name: String,

    /// Mobile number as text. The API sends it as a JSON number.
    #[serde(deserialize_with = "text_or_number")]
    pub mob_number: String,

    #[serde(rename = "emailid")]
    pub email_id: String,

    pub address: String,

    /// Line items in insertion order. Positional delete relies on this order.
    pub purchase_info: Vec<PurchaseItem>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}

// =============================================================================
// API Envelope
// =============================================================================

/// Shape of the user-details API response.
///
/// ```json
/// { "responseCode": 101, "message": "Success",
///   "data": { "userDetails": { ... } } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub response_code: i64,
    pub message: String,
    pub data: ResponseData,
}

/// The `data` object of [`ApiResponse`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    pub user_details: UserDetails,
}

// =============================================================================
// Item Input
// =============================================================================

/// Modal input names, in the order the add-product modal shows them.
pub const ITEM_INPUT_FIELDS: [&str; 5] = [
    "productName",
    "quantity",
    "duration",
    "perHrCost",
    "productDiscount",
];

/// Raw text submitted from the add-product modal.
///
/// Every field is text exactly as the user typed it. Conversion into a
/// [`PurchaseItem`] happens in [`crate::validation::parse_item_input`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ItemInput {
    pub product_name: String,
    pub quantity: String,
    pub duration: String,
    pub per_hr_cost: String,
    pub product_discount: String,
}

impl ItemInput {
    /// Builds input from the modal's name → text map.
    ///
    /// Absent names become empty text, which the editor then rejects.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |name: &str| fields.get(name).cloned().unwrap_or_default();
        ItemInput {
            product_name: get("productName"),
            quantity: get("quantity"),
            duration: get("duration"),
            per_hr_cost: get("perHrCost"),
            product_discount: get("productDiscount"),
        }
    }

    /// Returns `(input name, text)` pairs in modal order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            (ITEM_INPUT_FIELDS[0], self.product_name.as_str()),
            (ITEM_INPUT_FIELDS[1], self.quantity.as_str()),
            (ITEM_INPUT_FIELDS[2], self.duration.as_str()),
            (ITEM_INPUT_FIELDS[3], self.per_hr_cost.as_str()),
            (ITEM_INPUT_FIELDS[4], self.product_discount.as_str()),
        ]
    }

    /// Names of the inputs left empty, in modal order.
    pub fn missing_fields(&self) -> Vec<String> {
        self.fields()
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_amount() {
        let item = PurchaseItem::new("Clamp", 4, 10.0, 35.0, 12.0);
        assert!((item.gross_amount() - 1400.0).abs() < 1e-9);
        assert!((item.line_amount() - 1388.0).abs() < 1e-9);
    }

    #[test]
    fn test_line_amount_can_be_negative() {
        let item = PurchaseItem::new("Freebie", 1, 1.0, 2.0, 10.0);
        assert!((item.line_amount() - (-8.0)).abs() < 1e-9);
    }

    #[test]
    fn test_user_details_accepts_numeric_mob_number() {
        let json = r#"{
            "userName": "Abc",
            "mobNumber": 6545854566,
            "emailid": "abc@gmail.com",
            "address": "Bangalore",
            "purchaseInfo": []
        }"#;
        let details: UserDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.mob_number, "6545854566");
        assert_eq!(details.email_id, "abc@gmail.com");
    }

    #[test]
    fn test_user_details_accepts_text_mob_number() {
        let json = r#"{
            "userName": "Abc",
            "mobNumber": "0123456789",
            "emailid": "abc@gmail.com",
            "address": "Bangalore",
            "purchaseInfo": [{
                "productName": "Clamp", "quantity": 4, "duration": 10,
                "perHrCost": 35, "productDiscount": 12
            }]
        }"#;
        let details: UserDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.mob_number, "0123456789");
        assert_eq!(details.purchase_info.len(), 1);
        assert_eq!(details.purchase_info[0].per_hr_cost, 35.0);
    }

    #[test]
    fn test_item_input_from_fields() {
        let mut fields = HashMap::new();
        fields.insert("productName".to_string(), "Dolly".to_string());
        fields.insert("quantity".to_string(), "2".to_string());
        fields.insert("perHrCost".to_string(), "20".to_string());

        let input = ItemInput::from_fields(&fields);
        assert_eq!(input.product_name, "Dolly");
        assert_eq!(input.missing_fields(), vec!["duration", "productDiscount"]);
    }
}
