use rand::Rng;

use crate::models::chart::ChartPoint;
use crate::models::time_range::TimeRange;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Day labels of the sample bar chart ("20 Mar" ..= "26 Mar").
const BAR_SAMPLE_DAYS: std::ops::RangeInclusive<u32> = 20..=26;
const BAR_SAMPLE_VALUES: std::ops::RangeInclusive<f64> = 85_000.0..=145_000.0;

/// Produces mock value series for charts.
///
/// Nothing here is a real time-series query: every call draws fresh random
/// values, and callers replace their previous series wholesale.
pub struct PerformanceService;

impl PerformanceService {
    pub fn new() -> Self {
        Self
    }

    /// Number of points a series for `range` contains.
    pub fn point_count(&self, range: TimeRange) -> usize {
        match range {
            TimeRange::Day => 24,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            _ => 12,
        }
    }

    /// Random variation bounds added to the baseline for `range`.
    pub fn spread(&self, range: TimeRange) -> (f64, f64) {
        match range {
            TimeRange::Day => (-5_000.0, 8_000.0),
            TimeRange::Week => (-10_000.0, 15_000.0),
            TimeRange::Month => (-15_000.0, 20_000.0),
            _ => (-20_000.0, 30_000.0),
        }
    }

    /// Build a portfolio performance series for `range`:
    /// - Day: hourly, "0:00" ..= "23:00"
    /// - Week: "Mon" ..= "Sun"
    /// - Month: "1" ..= "30"
    /// - anything longer: "M1" ..= "M12"
    pub fn generate_series<R: Rng + ?Sized>(
        &self,
        range: TimeRange,
        baseline: f64,
        rng: &mut R,
    ) -> Vec<ChartPoint> {
        let (low, high) = self.spread(range);
        (0..self.point_count(range))
            .map(|i| ChartPoint::new(series_label(range, i), baseline + rng.gen_range(low..=high)))
            .collect()
    }

    /// The seven-day sample shown by the bar chart.
    pub fn generate_bar_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ChartPoint> {
        BAR_SAMPLE_DAYS
            .map(|day| ChartPoint::new(format!("{day} Mar"), rng.gen_range(BAR_SAMPLE_VALUES)))
            .collect()
    }

    /// Keep labels, redraw every value within the bar sample bounds.
    pub fn reroll_values<R: Rng + ?Sized>(&self, points: &[ChartPoint], rng: &mut R) -> Vec<ChartPoint> {
        points
            .iter()
            .map(|p| ChartPoint::new(p.label.clone(), rng.gen_range(BAR_SAMPLE_VALUES)))
            .collect()
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}

/// Label of the `index`-th point of a `range` series.
fn series_label(range: TimeRange, index: usize) -> String {
    match range {
        TimeRange::Day => format!("{index}:00"),
        TimeRange::Week => WEEKDAYS[index % WEEKDAYS.len()].to_string(),
        TimeRange::Month => (index + 1).to_string(),
        _ => format!("M{}", index + 1),
    }
}
