//! # Screen Configuration
//!
//! Display settings for the receipt screen, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RECEIPT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after the screen opens.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Receipt screen configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScreenConfig {
    /// Header of the add-product modal
    pub prompt_header: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown for amounts
    pub currency_decimals: u8,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            prompt_header: "Add Product".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ScreenConfig {
    /// Creates a ScreenConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RECEIPT_PROMPT_HEADER`: Override the add-product modal header
    /// - `RECEIPT_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `RECEIPT_CURRENCY_DECIMALS`: Override decimal places (0-6)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ScreenConfig::default();

        if let Some(header) = lookup("RECEIPT_PROMPT_HEADER") {
            config.prompt_header = header;
        }

        if let Some(symbol) = lookup("RECEIPT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("RECEIPT_CURRENCY_DECIMALS") {
            match decimals.parse::<u8>() {
                Ok(d) if d <= 6 => config.currency_decimals = d,
                _ => tracing::warn!(%decimals, "ignoring invalid RECEIPT_CURRENCY_DECIMALS"),
            }
        }

        config
    }

    /// Formats an amount for display, rounding to `currency_decimals`.
    ///
    /// The stored total keeps full precision; only the text is rounded.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_screen::ScreenConfig;
    ///
    /// let config = ScreenConfig::default();
    /// assert_eq!(config.format_amount(2237.0), "₹2237.00");
    /// ```
    pub fn format_amount(&self, amount: f64) -> String {
        let decimals = usize::from(self.currency_decimals);
        let scaled = (amount * 10f64.powi(i32::from(self.currency_decimals))).round();
        let negative = scaled < 0.0;

        format!(
            "{}{}{:.*}",
            if negative { "-" } else { "" },
            self.currency_symbol,
            decimals,
            amount.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_amount_positive() {
        let config = ScreenConfig::default();
        assert_eq!(config.format_amount(1583.0), "₹1583.00");
        assert_eq!(config.format_amount(0.5), "₹0.50");
        assert_eq!(config.format_amount(0.0), "₹0.00");
    }

    #[test]
    fn test_format_amount_negative() {
        let config = ScreenConfig::default();
        assert_eq!(config.format_amount(-12.25), "-₹12.25");
        assert_eq!(config.format_amount(-0.001), "₹0.00");
    }

    #[test]
    fn test_format_amount_no_decimals() {
        let config = ScreenConfig {
            currency_symbol: "$".to_string(),
            currency_decimals: 0,
            ..ScreenConfig::default()
        };
        assert_eq!(config.format_amount(849.0), "$849");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RECEIPT_CURRENCY_SYMBOL", "$"),
            ("RECEIPT_CURRENCY_DECIMALS", "3"),
        ]
        .into_iter()
        .collect();

        let config = ScreenConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.currency_decimals, 3);
        assert_eq!(config.prompt_header, "Add Product");
    }

    #[test]
    fn test_from_lookup_ignores_bad_decimals() {
        let config = ScreenConfig::from_lookup(|key| {
            (key == "RECEIPT_CURRENCY_DECIMALS").then(|| "lots".to_string())
        });
        assert_eq!(config.currency_decimals, 2);
    }
}
