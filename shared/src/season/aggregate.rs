//! Daily series to weekly averages

use chrono::{Datelike, Days};

use crate::error::SeasonError;
use crate::models::{DailyTemperatureSeries, WeekGrid, WeeklyAverage, DAYS_PER_WEEK, WEEKS_PER_YEAR};

/// Reduce a daily max/min series to 52 weekly mean temperatures.
///
/// Week `i` covers days `[7i, min(7i + 7, len))`. A short final week is
/// averaged over the days it has; a week with no days at all is an error.
pub fn aggregate_weeks(series: &DailyTemperatureSeries) -> Result<WeekGrid<WeeklyAverage>, SeasonError> {
    series.validate()?;
    let days = series.len();

    let weeks = (0..WEEKS_PER_YEAR)
        .map(|week| {
            let start = week * DAYS_PER_WEEK;
            let end = (start + DAYS_PER_WEEK).min(days);
            if start >= end {
                return Err(SeasonError::InsufficientData {
                    week: week + 1,
                    days,
                });
            }

            let count = end - start;
            let sum: f64 = series.max_temps[start..end]
                .iter()
                .chain(&series.min_temps[start..end])
                .sum();

            let date = series
                .start_date
                .checked_add_days(Days::new(start as u64))
                .ok_or_else(|| SeasonError::InvalidInput("start date out of range".to_string()))?;

            Ok(WeeklyAverage {
                week_index: week + 1,
                date_label: date.format("%b %-d").to_string(),
                year: date.year(),
                average_temp: round_tenth(sum / (count * 2) as f64),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    WeekGrid::try_from(weeks)
}

/// Round to one decimal place, halves toward positive infinity
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
