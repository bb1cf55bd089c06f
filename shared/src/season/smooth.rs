//! Single-week outlier smoothing

use crate::models::{WeekGrid, WeekRecord, WEEKS_PER_YEAR};

/// Maximum distance (°F) between an outlier week and its neighbors' mean
/// for the week to be relabelled
pub const SMOOTHING_TOLERANCE: f64 = 15.0;

/// Relabel isolated weeks whose two circular neighbors agree with each other.
///
/// Neighbor tests read from `weeks` only; overrides land in a copy, so a
/// week relabelled earlier in the pass never influences a later one.
pub fn smooth_outliers(weeks: &WeekGrid<WeekRecord>) -> WeekGrid<WeekRecord> {
    let mut smoothed = weeks.clone();

    for i in 0..WEEKS_PER_YEAR {
        let prev = weeks.wrapped(i as isize - 1);
        let current = &weeks[i];
        let next = weeks.wrapped(i as isize + 1);

        if current.season != prev.season
            && current.season != next.season
            && prev.season == next.season
        {
            let neighbor_avg = (prev.average_temp + next.average_temp) / 2.0;
            if (current.average_temp - neighbor_avg).abs() <= SMOOTHING_TOLERANCE {
                smoothed[i].season = prev.season;
            }
        }
    }

    smoothed
}
