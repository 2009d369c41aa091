use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CoreError;

/// Tunables shared by all stores.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Crypto unit balances are expressed in (e.g., "BTC").
    pub crypto_currency: String,

    /// Fiat display currency code (e.g., "INR", "USD").
    pub fiat_currency: String,

    /// Symbol prefixed to formatted fiat values.
    pub fiat_symbol: String,

    /// How long the "record saved" banner stays visible.
    pub success_banner_delay_ms: u64,

    /// Value the mock performance series oscillates around.
    pub performance_baseline: f64,

    /// Number of random characters after the address prefix of new wallets.
    pub address_suffix_len: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            crypto_currency: "BTC".to_string(),
            fiat_currency: "INR".to_string(),
            fiat_symbol: "₹".to_string(),
            success_banner_delay_ms: 2000,
            performance_baseline: 150_000.0,
            address_suffix_len: 30,
        }
    }
}

impl Settings {
    /// Load settings from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    pub fn success_banner_delay(&self) -> Duration {
        Duration::from_millis(self.success_banner_delay_ms)
    }

    /// Set the fiat display currency (e.g., "INR", "USD", "EUR").
    /// Currency code must be a 3-letter alphabetic string.
    pub fn set_fiat_currency(&mut self, currency: &str) -> Result<(), CoreError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., USD, EUR, INR)"
            )));
        }
        self.fiat_currency = trimmed;
        Ok(())
    }
}
