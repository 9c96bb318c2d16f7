//! # Configuration State
//!
//! Store configuration fixed at session start.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BLOOM_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use bloom_core::{DELIVERY_FEE_CENTS, SUBMIT_LATENCY_MS};

/// Store configuration.
///
/// ## Fields
/// All fields have defaults matching the production storefront; tests
/// override `submit_latency_ms` to keep the simulated delay short.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed in the header and confirmation page).
    pub store_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,

    /// Flat delivery fee in cents added at checkout.
    pub delivery_fee_cents: i64,

    /// Simulated order-placement latency in milliseconds.
    pub submit_latency_ms: u64,
}

impl Default for ConfigState {
    /// Returns the production storefront defaults.
    ///
    /// ## Default Values
    /// - Store: "Bloom Flower Shop"
    /// - Currency: CNY (¥), 2 decimals
    /// - Delivery fee: ¥15 flat
    /// - Submit latency: 2000 ms
    fn default() -> Self {
        ConfigState {
            store_name: "Bloom Flower Shop".to_string(),
            currency_symbol: "¥".to_string(),
            currency_decimals: 2,
            delivery_fee_cents: DELIVERY_FEE_CENTS,
            submit_latency_ms: SUBMIT_LATENCY_MS,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BLOOM_STORE_NAME`: Override store name
    /// - `BLOOM_DELIVERY_FEE_CENTS`: Override flat delivery fee
    /// - `BLOOM_SUBMIT_LATENCY_MS`: Override simulated placement latency
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("BLOOM_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(fee) = std::env::var("BLOOM_DELIVERY_FEE_CENTS") {
            if let Ok(cents) = fee.parse::<i64>() {
                config.delivery_fee_cents = cents;
            }
        }

        if let Ok(latency) = std::env::var("BLOOM_SUBMIT_LATENCY_MS") {
            if let Ok(ms) = latency.parse::<u64>() {
                config.submit_latency_ms = ms;
            }
        }

        config
    }

    /// The simulated placement latency as a Duration.
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use bloom_session::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "¥12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.delivery_fee_cents, 1500);
        assert_eq!(config.submit_latency(), Duration::from_millis(2000));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "¥12.34");
        assert_eq!(config.format_currency(100), "¥1.00");
        assert_eq!(config.format_currency(1), "¥0.01");
        assert_eq!(config.format_currency(0), "¥0.00");
        assert_eq!(config.format_currency(-1234), "-¥12.34");
    }
}
