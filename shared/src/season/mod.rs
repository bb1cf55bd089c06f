//! Seasonal planting-window analysis
//!
//! Turns one year of daily temperature extremes into a seasonal breakdown:
//! 1. weekly aggregation onto a fixed 52-week circular grid
//! 2. season classification (cold/cool/warm/hot)
//! 3. single-week outlier smoothing
//! 4. circular transition detection
//! 5. merging of closely spaced transitions
//! 6. planting window and season range construction
//!
//! Every stage is pure and synchronous; each call works on its own input.

pub mod aggregate;
pub mod classify;
pub mod smooth;
pub mod transition;
pub mod window;

pub use aggregate::{aggregate_weeks, round_tenth};
pub use classify::{classify, classify_weeks, COOL_THRESHOLD, HOT_THRESHOLD, WARM_THRESHOLD};
pub use smooth::{smooth_outliers, SMOOTHING_TOLERANCE};
pub use transition::{detect_transitions, merge_transitions, MERGE_GAP_WEEKS};
pub use window::{build_windows, season_ranges, window_bounds, WINDOW_SPAN_WEEKS};

use crate::error::SeasonError;
use crate::models::{DailyTemperatureSeries, SeasonBreakdown, WeekGrid, WeeklyAverage, WindowWrap};

/// Runs the season pipeline with a fixed window-wrap policy
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonAnalyzer {
    wrap: WindowWrap,
}

impl SeasonAnalyzer {
    pub fn new(wrap: WindowWrap) -> Self {
        Self { wrap }
    }

    /// Run every stage over a daily series
    pub fn analyze(&self, series: &DailyTemperatureSeries) -> Result<SeasonBreakdown, SeasonError> {
        let weekly = aggregate_weeks(series)?;
        Ok(self.analyze_weeks(weekly))
    }

    /// Run classification onward over weekly averages that are already known
    pub fn analyze_weeks(&self, weekly: WeekGrid<WeeklyAverage>) -> SeasonBreakdown {
        let classified = classify_weeks(weekly);
        let season_data = smooth_outliers(&classified);
        let transitions = detect_transitions(&season_data);
        let merged = merge_transitions(&transitions);
        let planting_windows = build_windows(&merged, &season_data, self.wrap);
        let season_ranges = season_ranges(&planting_windows);

        SeasonBreakdown {
            season_data,
            planting_windows,
            season_ranges,
        }
    }
}
