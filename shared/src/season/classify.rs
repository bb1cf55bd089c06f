//! Weekly average to season label

use crate::models::{SeasonLabel, WeekGrid, WeekRecord, WeeklyAverage};

/// Lowest weekly average (°F) classified as hot
pub const HOT_THRESHOLD: f64 = 85.0;
/// Lowest weekly average (°F) classified as warm
pub const WARM_THRESHOLD: f64 = 65.0;
/// Lowest weekly average (°F) classified as cool
pub const COOL_THRESHOLD: f64 = 40.0;

/// Classify a weekly average temperature
pub fn classify(average_temp: f64) -> SeasonLabel {
    if average_temp >= HOT_THRESHOLD {
        SeasonLabel::Hot
    } else if average_temp >= WARM_THRESHOLD {
        SeasonLabel::Warm
    } else if average_temp >= COOL_THRESHOLD {
        SeasonLabel::Cool
    } else {
        SeasonLabel::Cold
    }
}

/// Label every week independently
pub fn classify_weeks(weeks: WeekGrid<WeeklyAverage>) -> WeekGrid<WeekRecord> {
    weeks.map(|week| {
        let season = classify(week.average_temp);
        week.with_season(season)
    })
}
