use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::broadcast;
use tracing::debug;

use crate::entropy;
use crate::errors::CoreError;
use crate::models::change::ChartChange;
use crate::models::chart::{BarLayout, ChartPoint};
use crate::models::time_range::TimeRange;
use crate::notify::ChangeNotifier;
use crate::services::chart_service::ChartService;
use crate::services::performance_service::PerformanceService;

/// Bar highlighted when the sample chart first appears.
const DEFAULT_SELECTED_INDEX: usize = 4;

/// Bar chart state: a short series of labelled values and the bar the user
/// is pointing at.
pub struct ChartStore {
    points: Vec<ChartPoint>,
    selected_index: usize,
    range: TimeRange,
    rng: StdRng,
    notifier: ChangeNotifier<ChartChange>,
    chart_service: ChartService,
    performance_service: PerformanceService,
}

impl std::fmt::Debug for ChartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartStore")
            .field("points", &self.points.len())
            .field("selected_index", &self.selected_index)
            .field("range", &self.range)
            .finish()
    }
}

impl ChartStore {
    /// Seven random sample bars, "20 Mar" ..= "26 Mar".
    pub fn new() -> Self {
        Self::sampled(entropy::os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::sampled(StdRng::seed_from_u64(seed))
    }

    /// Store over caller-provided points (e.g., real data or test fixtures).
    pub fn from_points(points: Vec<ChartPoint>) -> Self {
        Self::build(points, entropy::os_rng())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChartChange> {
        self.notifier.subscribe()
    }

    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    #[must_use]
    pub fn range(&self) -> TimeRange {
        self.range
    }

    // ── Geometry ────────────────────────────────────────────────────

    /// Scale reference for bar heights (`1.0` when there are no points).
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.chart_service.max_value(&self.points)
    }

    #[must_use]
    pub fn bar_height(&self, value: f64, chart_height: f64) -> f64 {
        self.chart_service
            .bar_height(value, self.max_value(), chart_height)
    }

    #[must_use]
    pub fn x_position(&self, index: usize, layout: &BarLayout) -> f64 {
        self.chart_service.x_position(index, layout)
    }

    /// Bar nearest to `x`; ties go to the earlier bar. `0` for an empty chart.
    #[must_use]
    pub fn find_closest_index(&self, x: f64, layout: &BarLayout) -> usize {
        self.chart_service
            .find_closest_index(self.points.len(), x, layout)
            .unwrap_or(0)
    }

    // ── Selection ───────────────────────────────────────────────────

    pub fn select_data_point(&mut self, index: usize) -> Result<(), CoreError> {
        if index >= self.points.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.points.len(),
            });
        }
        self.set_selected(index);
        Ok(())
    }

    /// Select the bar nearest to `x` (drag / tap). `None` for an empty chart.
    pub fn select_closest(&mut self, x: f64, layout: &BarLayout) -> Option<usize> {
        let index = self
            .chart_service
            .find_closest_index(self.points.len(), x, layout)?;
        self.set_selected(index);
        Some(index)
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn selected_point(&self) -> Option<&ChartPoint> {
        self.points.get(self.selected_index)
    }

    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_point().map(|p| p.label.as_str())
    }

    #[must_use]
    pub fn selected_value(&self) -> Option<f64> {
        self.selected_point().map(|p| p.value)
    }

    /// Selected value as a grouped integer (`123,456`).
    #[must_use]
    pub fn formatted_selected_value(&self) -> Option<String> {
        self.selected_value()
            .map(|v| self.chart_service.format_grouped(v))
    }

    // ── Range ───────────────────────────────────────────────────────

    /// Switch range: every value is redrawn and a random bar is selected.
    pub fn update_range(&mut self, range: TimeRange) {
        self.range = range;
        self.points = self
            .performance_service
            .reroll_values(&self.points, &mut self.rng);
        debug!(%range, points = self.points.len(), "chart range updated");
        self.notifier.publish(ChartChange::RangeChanged(range));

        if !self.points.is_empty() {
            let index = self.rng.gen_range(0..self.points.len());
            self.set_selected(index);
        }
    }

    // ── Internal ────────────────────────────────────────────────────

    fn sampled(mut rng: StdRng) -> Self {
        let points = PerformanceService::new().generate_bar_sample(&mut rng);
        Self::build(points, rng)
    }

    fn build(points: Vec<ChartPoint>, rng: StdRng) -> Self {
        let selected_index = DEFAULT_SELECTED_INDEX.min(points.len().saturating_sub(1));
        Self {
            points,
            selected_index,
            range: TimeRange::ThreeMonths,
            rng,
            notifier: ChangeNotifier::new(),
            chart_service: ChartService::new(),
            performance_service: PerformanceService::new(),
        }
    }

    fn set_selected(&mut self, index: usize) {
        self.selected_index = index;
        self.notifier.publish(ChartChange::SelectionChanged(index));
    }
}

impl Default for ChartStore {
    fn default() -> Self {
        Self::new()
    }
}
