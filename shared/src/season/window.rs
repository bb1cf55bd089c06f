//! Planting window construction

use crate::models::{
    PlantingWindow, SeasonRange, Transition, WeekGrid, WeekRecord, WindowWrap, WEEKS_PER_YEAR,
};

/// Weeks from a transition's anchor to the end of its window
pub const WINDOW_SPAN_WEEKS: usize = 3;

/// `(windowStart, windowEnd)` for a merged transition.
///
/// A transition at index 0 anchors its window to week 51.
pub fn window_bounds(transition: &Transition) -> (usize, usize) {
    let start = if transition.week_index >= 1 {
        transition.week_index
    } else {
        WEEKS_PER_YEAR - 1
    };
    let end = (transition.week_index + WINDOW_SPAN_WEEKS) % WEEKS_PER_YEAR;
    (start, end)
}

/// Expand each merged transition into a window of smoothed weeks.
///
/// Window positions are 1-based, so position `w` reads week slot `w - 1`.
pub fn build_windows(
    transitions: &[Transition],
    weeks: &WeekGrid<WeekRecord>,
    wrap: WindowWrap,
) -> Vec<PlantingWindow> {
    transitions
        .iter()
        .map(|transition| {
            let (window_start, window_end) = window_bounds(transition);

            let span = match wrap {
                WindowWrap::Truncate if window_end >= window_start => window_end - window_start + 1,
                WindowWrap::Truncate => 0,
                WindowWrap::Modular => {
                    (window_end + WEEKS_PER_YEAR - window_start) % WEEKS_PER_YEAR + 1
                }
            };

            let window_weeks = (0..span)
                .map(|offset| weeks.wrapped((window_start + offset) as isize - 1).clone())
                .collect();

            PlantingWindow {
                transition_week: transition.transition_week,
                from_season: transition.from_season,
                to_season: transition.to_season,
                window_start,
                window_end,
                weeks: window_weeks,
            }
        })
        .collect()
}

/// Summarize windows as `from-to` ranges, in window order
pub fn season_ranges(windows: &[PlantingWindow]) -> Vec<SeasonRange> {
    windows
        .iter()
        .map(|window| SeasonRange {
            label: format!("{}-{}", window.from_season, window.to_season),
            start_week: window.window_start,
            end_week: window.window_end,
        })
        .collect()
}
