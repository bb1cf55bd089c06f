//! Season pipeline integration tests
//!
//! Tests for the planting-window pipeline including:
//! - Classification boundaries
//! - Outlier smoothing on both sides of the 15°F tolerance
//! - Transition detection and merging
//! - Planting window bounds, with and without year wraparound

use proptest::prelude::*;
use shared::{
    classify, detect_transitions, merge_transitions, smooth_outliers, window_bounds,
    SeasonAnalyzer, SeasonLabel, WeekGrid, WeekRecord, WeeklyAverage, WindowWrap,
    WEEKS_PER_YEAR,
};

/// Weekly averages in grid form, one per week
fn weekly(temps: &[f64]) -> WeekGrid<WeeklyAverage> {
    let weeks = temps
        .iter()
        .enumerate()
        .map(|(i, &t)| WeeklyAverage {
            week_index: i + 1,
            date_label: format!("Week {}", i + 1),
            year: 2025,
            average_temp: t,
        })
        .collect::<Vec<_>>();
    WeekGrid::try_from(weeks).unwrap()
}

/// Weekly averages with their raw (unsmoothed) labels
fn classified(temps: &[f64]) -> WeekGrid<WeekRecord> {
    weekly(temps).map(|week| {
        let season = classify(week.average_temp);
        week.with_season(season)
    })
}

/// 30°F for weeks 1-10, 70°F for weeks 11-20, 90°F for weeks 21-52
fn scenario_a() -> Vec<f64> {
    (0..WEEKS_PER_YEAR)
        .map(|i| match i {
            0..=9 => 30.0,
            10..=19 => 70.0,
            _ => 90.0,
        })
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Test exact classification boundaries
    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classify(85.0), SeasonLabel::Hot);
        assert_eq!(classify(84.9), SeasonLabel::Warm);
        assert_eq!(classify(65.0), SeasonLabel::Warm);
        assert_eq!(classify(64.9), SeasonLabel::Cool);
        assert_eq!(classify(40.0), SeasonLabel::Cool);
        assert_eq!(classify(39.9), SeasonLabel::Cold);
    }

    /// Scenario A: interior transitions at weeks 10 and 20
    #[test]
    fn test_scenario_a_transitions() {
        let breakdown = SeasonAnalyzer::default().analyze_weeks(weekly(&scenario_a()));

        let interior: Vec<(usize, SeasonLabel, SeasonLabel)> = breakdown
            .planting_windows
            .iter()
            .filter(|w| w.transition_week < WEEKS_PER_YEAR)
            .map(|w| (w.transition_week - 1, w.from_season, w.to_season))
            .collect();
        assert_eq!(
            interior,
            vec![
                (9, SeasonLabel::Cold, SeasonLabel::Warm),
                (19, SeasonLabel::Warm, SeasonLabel::Hot),
            ]
        );

        // Week 52 (hot) against week 1 (cold) closes the year
        let wrap = breakdown.planting_windows.last().unwrap();
        assert_eq!(wrap.transition_week, WEEKS_PER_YEAR);
        assert_eq!((wrap.from_season, wrap.to_season), (SeasonLabel::Hot, SeasonLabel::Cold));
    }

    /// Scenario A: season ranges follow the window formulas
    #[test]
    fn test_scenario_a_ranges() {
        let breakdown = SeasonAnalyzer::default().analyze_weeks(weekly(&scenario_a()));

        let ranges: Vec<(&str, usize, usize)> = breakdown
            .season_ranges
            .iter()
            .map(|r| (r.label.as_str(), r.start_week, r.end_week))
            .collect();
        assert_eq!(
            ranges,
            vec![("cold-warm", 9, 12), ("warm-hot", 19, 22), ("hot-cold", 51, 2)]
        );

        // Window positions 9..=12 read week slots 8..=11
        let temps: Vec<f64> = breakdown.planting_windows[0]
            .weeks
            .iter()
            .map(|w| w.average_temp)
            .collect();
        assert_eq!(temps, vec![30.0, 30.0, 70.0, 70.0]);
    }

    /// Scenario A: the year-end window is empty unless wrapping is enabled
    #[test]
    fn test_scenario_a_year_end_window() {
        let truncated = SeasonAnalyzer::new(WindowWrap::Truncate).analyze_weeks(weekly(&scenario_a()));
        assert!(truncated.planting_windows[2].weeks.is_empty());

        let wrapped = SeasonAnalyzer::new(WindowWrap::Modular).analyze_weeks(weekly(&scenario_a()));
        let weeks: Vec<usize> = wrapped.planting_windows[2]
            .weeks
            .iter()
            .map(|w| w.week_index)
            .collect();
        assert_eq!(weeks, vec![51, 52, 1, 2]);
    }

    /// Scenario B: an anomaly far from its neighbors survives smoothing
    #[test]
    fn test_scenario_b_distant_anomaly_survives() {
        let mut temps = scenario_a();
        temps[8] = 30.0;
        temps[9] = 68.0;
        temps[10] = 30.0;

        let smoothed = smooth_outliers(&classified(&temps));
        assert_eq!(smoothed[9].season, SeasonLabel::Warm);

        let detected = detect_transitions(&smoothed);
        let pair: Vec<(usize, SeasonLabel, SeasonLabel)> = detected
            .iter()
            .filter(|t| t.week_index == 8 || t.week_index == 9)
            .map(|t| (t.week_index, t.from_season, t.to_season))
            .collect();
        assert_eq!(
            pair,
            vec![
                (8, SeasonLabel::Cold, SeasonLabel::Warm),
                (9, SeasonLabel::Warm, SeasonLabel::Cold),
            ]
        );

        // The pair and the following cold->warm step merge into one
        let merged: Vec<usize> = merge_transitions(&detected)
            .iter()
            .map(|t| t.week_index)
            .collect();
        assert_eq!(merged, vec![10, 19, 51]);
    }

    /// Scenario B: an anomaly close to its neighbors is smoothed away
    #[test]
    fn test_scenario_b_near_anomaly_is_smoothed() {
        let mut temps = scenario_a();
        temps[8] = 55.0;
        temps[9] = 68.0;
        temps[10] = 55.0;

        let raw = classified(&temps);
        assert_eq!(raw[9].season, SeasonLabel::Warm);

        let smoothed = smooth_outliers(&raw);
        assert_eq!(smoothed[9].season, SeasonLabel::Cool);
        assert!((smoothed[9].average_temp - 68.0).abs() < f64::EPSILON);
    }

    /// Test a uniform year has no transitions or windows
    #[test]
    fn test_uniform_year() {
        let breakdown = SeasonAnalyzer::default().analyze_weeks(weekly(&[72.0; WEEKS_PER_YEAR]));

        assert!(breakdown.planting_windows.is_empty());
        assert!(breakdown.season_ranges.is_empty());
        assert!(breakdown
            .season_data
            .iter()
            .all(|w| w.season == SeasonLabel::Warm));
    }

    /// Test season data keeps week order and averages
    #[test]
    fn test_season_data_preserves_weeks() {
        let temps = scenario_a();
        let breakdown = SeasonAnalyzer::default().analyze_weeks(weekly(&temps));

        for (i, week) in breakdown.season_data.iter().enumerate() {
            assert_eq!(week.week_index, i + 1);
            assert!((week.average_temp - temps[i]).abs() < f64::EPSILON);
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for a year of weekly averages
    fn year_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-20.0f64..120.0, WEEKS_PER_YEAR)
    }

    /// Strategy for a year made of a few long flat runs
    fn banded_year_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(prop_oneof![Just(30.0), Just(50.0), Just(70.0), Just(90.0)], 13)
            .prop_map(|bands| bands.into_iter().flat_map(|t| [t; 4]).collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Classification never decreases as temperature rises
        #[test]
        fn prop_classification_is_monotonic(a in -50.0f64..150.0, b in -50.0f64..150.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify(low) <= classify(high));
        }

        /// Detected transitions are ascending, bounded and real label changes
        #[test]
        fn prop_transitions_sorted_and_bounded(temps in year_strategy()) {
            let weeks = smooth_outliers(&classified(&temps));
            let transitions = detect_transitions(&weeks);

            prop_assert!(transitions.len() <= WEEKS_PER_YEAR);
            prop_assert!(transitions.windows(2).all(|p| p[0].week_index < p[1].week_index));
            for t in &transitions {
                prop_assert_eq!(t.transition_week, t.week_index + 1);
                prop_assert_ne!(t.from_season, t.to_season);
                prop_assert_eq!(t.from_season, weeks[t.week_index].season);
                prop_assert_eq!(t.to_season, weeks.wrapped(t.week_index as isize + 1).season);
            }
        }

        /// Merging an already-merged list changes nothing
        #[test]
        fn prop_merge_is_idempotent(temps in year_strategy()) {
            let transitions = detect_transitions(&smooth_outliers(&classified(&temps)));
            let once = merge_transitions(&transitions);
            let twice = merge_transitions(&once);

            prop_assert_eq!(once, twice);
        }

        /// Smoothing never touches a week that matches a neighbor, and never
        /// changes an average
        #[test]
        fn prop_smoothing_only_relabels_isolated_weeks(temps in year_strategy()) {
            let raw = classified(&temps);
            let smoothed = smooth_outliers(&raw);

            for i in 0..WEEKS_PER_YEAR {
                let prev = raw.wrapped(i as isize - 1).season;
                let next = raw.wrapped(i as isize + 1).season;
                if raw[i].season == prev || raw[i].season == next {
                    prop_assert_eq!(smoothed[i].season, raw[i].season);
                }
                if smoothed[i].season != raw[i].season {
                    prop_assert_eq!(smoothed[i].season, prev);
                }
                prop_assert_eq!(smoothed[i].average_temp, raw[i].average_temp);
            }
        }

        /// Every window follows the start/end formulas and ranges mirror windows
        #[test]
        fn prop_windows_follow_bounds(temps in banded_year_strategy()) {
            let breakdown = SeasonAnalyzer::new(WindowWrap::Modular).analyze_weeks(weekly(&temps));

            prop_assert_eq!(breakdown.planting_windows.len(), breakdown.season_ranges.len());
            for (window, range) in breakdown.planting_windows.iter().zip(&breakdown.season_ranges) {
                let index = window.transition_week - 1;
                let expected_start = if index >= 1 { index } else { WEEKS_PER_YEAR - 1 };
                prop_assert_eq!(window.window_start, expected_start);
                prop_assert_eq!(window.window_end, (index + 3) % WEEKS_PER_YEAR);
                prop_assert!(!window.weeks.is_empty());
                prop_assert_eq!(range.start_week, window.window_start);
                prop_assert_eq!(range.end_week, window.window_end);
                prop_assert_eq!(
                    &range.label,
                    &format!("{}-{}", window.from_season, window.to_season)
                );
            }
        }

        /// Window bounds never leave the 52-week year
        #[test]
        fn prop_window_bounds_in_range(index in 0usize..WEEKS_PER_YEAR) {
            let transitions = detect_transitions(&classified(&{
                let mut temps = vec![30.0; WEEKS_PER_YEAR];
                temps[(index + 1) % WEEKS_PER_YEAR] = 90.0;
                temps
            }));
            for t in &transitions {
                let (start, end) = window_bounds(t);
                prop_assert!(start < WEEKS_PER_YEAR);
                prop_assert!(end < WEEKS_PER_YEAR);
            }
        }
    }
}
