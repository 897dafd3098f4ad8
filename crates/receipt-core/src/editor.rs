//! # Line-Item Editor
//!
//! The receipt data store and the two operations that mutate it.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Operations                                   │
//! │                                                                         │
//! │  Modal Ok ─────────► add_item(input) ──► parse ──► items.push(item)    │
//! │                                                          │              │
//! │  Click Delete ─────► delete_item(i) ───► items.remove(i) │              │
//! │                                                │         │              │
//! │                                                ▼         ▼              │
//! │                                          recompute total (full fold)   │
//! │                                                                         │
//! │  Rejected input or a bad index leaves items AND total untouched.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::total::compute_total;
use crate::types::{ItemInput, PurchaseItem, UserDetails};
use crate::validation::{parse_item_input, validate_item};

/// User details plus the total derived from their purchases.
///
/// ## Invariants
/// - `total` always equals `compute_total(&details.purchase_info)`
/// - Items are only changed through [`Receipt::add_item`],
///   [`Receipt::push_item`] and [`Receipt::delete_item`]
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    details: UserDetails,
    total: f64,
}

impl Receipt {
    /// Wraps loaded user details and computes the initial total.
    pub fn new(details: UserDetails) -> Self {
        let total = compute_total(&details.purchase_info);
        Receipt { details, total }
    }

    pub fn details(&self) -> &UserDetails {
        &self.details
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[PurchaseItem] {
        &self.details.purchase_info
    }

    /// The current total amount to be paid.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn item_count(&self) -> usize {
        self.details.purchase_info.len()
    }

    pub fn is_empty(&self) -> bool {
        self.details.purchase_info.is_empty()
    }

    /// Adds an item from add-product modal input.
    ///
    /// ## Returns
    /// - `Ok(index)` of the appended item
    /// - `Err(IncompleteItemInput)` if any field is empty
    /// - `Err(Validation)` if a number is malformed or out of range
    pub fn add_item(&mut self, input: &ItemInput) -> CoreResult<usize> {
        let item = parse_item_input(input).map_err(|err| {
            warn!(error = %err, ?input, "add item rejected");
            err
        })?;

        self.push_item(item)
    }

    /// Appends an already-typed item and returns its index.
    ///
    /// ## Returns
    /// - `Ok(index)` of the appended item
    /// - `Err(Validation)` if the item breaks a [`PurchaseItem`] invariant
    pub fn push_item(&mut self, item: PurchaseItem) -> CoreResult<usize> {
        if let Err(err) = validate_item(&item) {
            warn!(error = %err, product = %item.product_name, "push item rejected");
            return Err(err.into());
        }

        debug!(product = %item.product_name, amount = item.line_amount(), "appending item");
        self.details.purchase_info.push(item);
        self.recompute();
        Ok(self.details.purchase_info.len() - 1)
    }

    /// Removes the item at `index`, shifting later items down by one.
    ///
    /// ## Returns
    /// - `Ok(item)` that was removed
    /// - `Err(IndexOutOfRange)` if `index >= item_count()`
    pub fn delete_item(&mut self, index: usize) -> CoreResult<PurchaseItem> {
        let len = self.item_count();
        if index >= len {
            warn!(index, len, "delete item rejected");
            return Err(CoreError::IndexOutOfRange { index, len });
        }

        let removed = self.details.purchase_info.remove(index);
        self.recompute();
        debug!(index, product = %removed.product_name, "item deleted");
        Ok(removed)
    }

    fn recompute(&mut self) {
        self.total = compute_total(&self.details.purchase_info);
        info!(total = self.total, items = self.item_count(), "total recomputed");
    }

    /// Consumes the receipt, returning the user details.
    pub fn into_details(self) -> UserDetails {
        self.details
    }
}
