//! Season transition detection and merging

use crate::models::{Transition, WeekGrid, WeekRecord, WEEKS_PER_YEAR};

/// Transitions this many weeks or fewer after the previous one in a run
/// are folded into it
pub const MERGE_GAP_WEEKS: usize = 4;

/// Find every week boundary where the season changes, including the
/// week 52 -> week 1 boundary (reported last, at index 51).
pub fn detect_transitions(weeks: &WeekGrid<WeekRecord>) -> Vec<Transition> {
    (0..WEEKS_PER_YEAR)
        .filter_map(|i| {
            let current = &weeks[i];
            let next = weeks.wrapped(i as isize + 1);
            (current.season != next.season).then_some(Transition {
                week_index: i,
                transition_week: i + 1,
                from_season: current.season,
                to_season: next.season,
            })
        })
        .collect()
}

/// Collapse runs of closely spaced transitions into the last one of each run.
///
/// A run keeps growing while the next transition is within
/// [`MERGE_GAP_WEEKS`] of the most recently absorbed one. Input must be
/// ascending by `week_index`.
pub fn merge_transitions(transitions: &[Transition]) -> Vec<Transition> {
    let mut merged = Vec::new();
    let mut remaining = transitions.iter().peekable();

    while let Some(first) = remaining.next() {
        let mut last = first;
        while let Some(next) =
            remaining.next_if(|t| t.week_index.saturating_sub(last.week_index) <= MERGE_GAP_WEEKS)
        {
            last = next;
        }
        merged.push(*last);
    }

    merged
}
