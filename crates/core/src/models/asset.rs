use serde::{Deserialize, Serialize};

use super::appearance::Rgb;

/// A cryptocurrency holding inside a wallet or the overall portfolio.
///
/// Assets are never edited in place. When the sample data is reloaded the
/// whole list is rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Ticker symbol, uppercased (e.g., "BTC", "ETH")
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Units held
    pub quantity: f64,

    /// Value of the holding in the fiat display currency
    pub value: f64,

    /// 24-hour price change in percent
    pub change_24h: f64,

    /// Icon token (symbol-font name)
    pub icon: String,

    /// Badge color
    pub color: Rgb,

    /// Share of the owning wallet or portfolio, in percent
    pub allocation_pct: f64,
}

impl Asset {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        value: f64,
        change_24h: f64,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            quantity,
            value,
            change_24h,
            icon: "circle.fill".to_string(),
            color: Rgb::GRAY,
            allocation_pct: 0.0,
        }
    }

    pub fn with_appearance(mut self, icon: impl Into<String>, color: Rgb) -> Self {
        self.icon = icon.into();
        self.color = color;
        self
    }

    pub fn with_allocation(mut self, allocation_pct: f64) -> Self {
        self.allocation_pct = allocation_pct;
        self
    }

    /// True when the 24h change is zero or positive.
    #[must_use]
    pub fn is_gaining(&self) -> bool {
        self.change_24h >= 0.0
    }
}
