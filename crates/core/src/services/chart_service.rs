use crate::models::chart::{BarLayout, ChartPoint};

/// Bar chart geometry: scaling, bar placement and hit-testing.
///
/// The core computes all the numbers; the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Largest value in the series, `1.0` for an empty series.
    pub fn max_value(&self, points: &[ChartPoint]) -> f64 {
        points
            .iter()
            .map(|p| p.value)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
            .unwrap_or(1.0)
    }

    /// Height of a bar scaled against `max_value`. Zero when the maximum is
    /// not positive, so a flat series never produces NaN or infinite bars.
    pub fn bar_height(&self, value: f64, max_value: f64, chart_height: f64) -> f64 {
        if max_value <= 0.0 || !max_value.is_finite() {
            return 0.0;
        }
        (value / max_value) * chart_height
    }

    /// Horizontal center of the bar at `index`.
    pub fn x_position(&self, index: usize, layout: &BarLayout) -> f64 {
        index as f64 * layout.stride() + layout.bar_width / 2.0
    }

    /// Index of the bar whose center is nearest to `x`.
    ///
    /// Linear scan with a strict `<`, so the earlier index wins an exact tie.
    /// `None` when there are no bars.
    pub fn find_closest_index(&self, count: usize, x: f64, layout: &BarLayout) -> Option<usize> {
        let mut closest = None;
        let mut min_dist = f64::INFINITY;

        for i in 0..count {
            let dist = (x - self.x_position(i, layout)).abs();
            if dist < min_dist {
                min_dist = dist;
                closest = Some(i);
            }
        }

        closest
    }

    /// Integer part of `value` with `,` thousands separators (`123,456`).
    pub fn format_grouped(&self, value: f64) -> String {
        let whole = value.trunc() as i64;
        let digits = whole.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if whole < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
