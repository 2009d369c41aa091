use serde::{Deserialize, Serialize};

/// Selectable window controlling chart granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    Day,
    Week,
    Month,
    ThreeMonths,
    Year,
    All,
}

impl TimeRange {
    /// Every range, in picker order.
    pub const ALL: [TimeRange; 6] = [
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::ThreeMonths,
        TimeRange::Year,
        TimeRange::All,
    ];

    /// Short picker label ("1D", "1W", ...).
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "1D",
            TimeRange::Week => "1W",
            TimeRange::Month => "1M",
            TimeRange::ThreeMonths => "3M",
            TimeRange::Year => "1Y",
            TimeRange::All => "All",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
