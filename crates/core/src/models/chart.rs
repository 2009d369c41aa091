use serde::{Deserialize, Serialize};

/// A single labelled value, used by both the bar chart and the wallet
/// performance series.
///
/// Points carry no history: switching range replaces the whole series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X-axis label (e.g., "20 Mar", "Mon", "13:00")
    pub label: String,

    /// Y value in the fiat display currency
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Horizontal bar geometry supplied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub bar_width: f64,
    pub spacing: f64,
}

impl BarLayout {
    pub fn new(bar_width: f64, spacing: f64) -> Self {
        Self { bar_width, spacing }
    }

    /// Distance between the left edges of two adjacent bars.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.bar_width + self.spacing
    }
}
