//! # Total Calculator
//!
//! The receipt total is always recomputed from the full item list, never
//! patched incrementally, so a partial update can't leave it stale.
//!
//! ```text
//! total = Σ (duration × perHrCost × quantity − productDiscount)
//! ```
//!
//! No currency rounding happens here. Formatting for display is the screen
//! layer's job.

use crate::types::PurchaseItem;

/// Sums the line amounts of `items`, starting from zero.
///
/// ## Example
/// ```rust
/// use receipt_core::{compute_total, PurchaseItem};
///
/// let items = vec![
///     PurchaseItem::new("Movers", 3, 8.2, 35.0, 12.0),
///     PurchaseItem::new("Clamp", 4, 10.0, 35.0, 12.0),
/// ];
/// assert!((compute_total(&items) - 2237.0).abs() < 1e-9);
/// ```
pub fn compute_total(items: &[PurchaseItem]) -> f64 {
    items
        .iter()
        .fold(0.0, |total, item| total + item.line_amount())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_items() -> Vec<PurchaseItem> {
        vec![
            PurchaseItem::new("Movers", 3, 8.2, 35.0, 12.0),
            PurchaseItem::new("Clamp", 4, 10.0, 35.0, 12.0),
            PurchaseItem::new("Dolly", 2, 5.0, 20.0, 5.0),
        ]
    }

    #[test]
    fn test_empty_total_is_zero() {
        assert_eq!(compute_total(&[]), 0.0);
    }

    #[test]
    fn test_total_matches_line_sum() {
        let items = sample_items();
        let expected: f64 = items.iter().map(PurchaseItem::line_amount).sum();
        assert!(close(compute_total(&items), expected));
        assert!(close(compute_total(&items), 849.0 + 1388.0 + 195.0));
    }

    #[test]
    fn test_total_is_order_independent() {
        let items = sample_items();
        let mut reversed = items.clone();
        reversed.reverse();
        assert!(close(compute_total(&items), compute_total(&reversed)));
    }

    #[test]
    fn test_negative_lines_are_not_clamped() {
        let items = vec![
            PurchaseItem::new("Clamp", 4, 10.0, 35.0, 12.0),
            PurchaseItem::new("Giveaway", 1, 1.0, 1.0, 100.0),
        ];
        assert!(close(compute_total(&items), 1388.0 - 99.0));
    }
}
