//! Season analysis models

use std::ops::{Index, IndexMut};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SeasonError;

/// Number of slots in the circular week grid
pub const WEEKS_PER_YEAR: usize = 52;

/// Days folded into each weekly average
pub const DAYS_PER_WEEK: usize = 7;

/// Thermal season of a week, ordered from coldest to hottest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonLabel {
    /// Below 40°F
    Cold,
    /// 40-64.9°F
    Cool,
    /// 65-84.9°F
    Warm,
    /// 85°F and above
    Hot,
}

impl std::fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonLabel::Cold => write!(f, "cold"),
            SeasonLabel::Cool => write!(f, "cool"),
            SeasonLabel::Warm => write!(f, "warm"),
            SeasonLabel::Hot => write!(f, "hot"),
        }
    }
}

/// How a planting window that crosses the end of the year collects its weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowWrap {
    /// Walk `windowStart..=windowEnd` literally. A window whose end index
    /// wrapped below its start gets no weeks.
    #[default]
    Truncate,
    /// Walk forward from `windowStart` across week 52 into the new year.
    Modular,
}

impl WindowWrap {
    pub fn from_flag(wrap_windows: bool) -> Self {
        if wrap_windows {
            WindowWrap::Modular
        } else {
            WindowWrap::Truncate
        }
    }
}

/// One year of daily temperature extremes in °F, aligned by index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperatureSeries {
    pub start_date: NaiveDate,
    pub max_temps: Vec<f64>,
    pub min_temps: Vec<f64>,
}

impl DailyTemperatureSeries {
    pub fn new(start_date: NaiveDate, max_temps: Vec<f64>, min_temps: Vec<f64>) -> Self {
        Self {
            start_date,
            max_temps,
            min_temps,
        }
    }

    /// Number of days in the series
    pub fn len(&self) -> usize {
        self.max_temps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.max_temps.is_empty()
    }

    /// Check that both sequences are present, aligned, and finite
    pub fn validate(&self) -> Result<(), SeasonError> {
        if self.max_temps.is_empty() || self.min_temps.is_empty() {
            return Err(SeasonError::InvalidInput(
                "daily max/min temperature sequences are required".to_string(),
            ));
        }
        if self.max_temps.len() != self.min_temps.len() {
            return Err(SeasonError::InvalidInput(format!(
                "max/min sequences differ in length ({} vs {})",
                self.max_temps.len(),
                self.min_temps.len()
            )));
        }
        if let Some(day) = self
            .max_temps
            .iter()
            .zip(&self.min_temps)
            .position(|(max, min)| !max.is_finite() || !min.is_finite())
        {
            return Err(SeasonError::InvalidInput(format!(
                "non-finite temperature on day {}",
                day + 1
            )));
        }
        Ok(())
    }
}

/// Weekly mean temperature before classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAverage {
    /// 1-based week number
    pub week_index: usize,
    pub date_label: String,
    pub year: i32,
    /// Mean of all max and min samples, rounded to 0.1°F
    pub average_temp: f64,
}

impl WeeklyAverage {
    pub fn with_season(self, season: SeasonLabel) -> WeekRecord {
        WeekRecord {
            week_index: self.week_index,
            date_label: self.date_label,
            year: self.year,
            average_temp: self.average_temp,
            season,
        }
    }
}

/// A classified week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRecord {
    pub week_index: usize,
    pub date_label: String,
    pub year: i32,
    pub average_temp: f64,
    pub season: SeasonLabel,
}

/// Fixed 52-slot grid of weeks, indexed modulo 52 for neighbor lookups.
///
/// Week 52's successor is week 1. Construction fails unless exactly
/// [`WEEKS_PER_YEAR`] items are supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGrid<T>(Vec<T>);

impl<T> WeekGrid<T> {
    /// Item at `index` taken modulo 52, so `-1` is the last week
    pub fn wrapped(&self, index: isize) -> &T {
        &self.0[index.rem_euclid(WEEKS_PER_YEAR as isize) as usize]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Transform every slot, keeping the grid shape
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> WeekGrid<U> {
        WeekGrid(self.0.into_iter().map(f).collect())
    }
}

impl<T> TryFrom<Vec<T>> for WeekGrid<T> {
    type Error = SeasonError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        if items.len() != WEEKS_PER_YEAR {
            return Err(SeasonError::InvalidInput(format!(
                "expected {} weeks, got {}",
                WEEKS_PER_YEAR,
                items.len()
            )));
        }
        Ok(Self(items))
    }
}

impl<T> Index<usize> for WeekGrid<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for WeekGrid<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Serialize> Serialize for WeekGrid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for WeekGrid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        WeekGrid::try_from(items).map_err(serde::de::Error::custom)
    }
}

/// A boundary between week `week_index` and `(week_index + 1) mod 52`
/// where the season label changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    /// 0-based index of the last week before the change
    pub week_index: usize,
    pub transition_week: usize,
    pub from_season: SeasonLabel,
    pub to_season: SeasonLabel,
}

/// A short run of weeks bracketing a merged transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingWindow {
    pub transition_week: usize,
    pub from_season: SeasonLabel,
    pub to_season: SeasonLabel,
    pub window_start: usize,
    pub window_end: usize,
    pub weeks: Vec<WeekRecord>,
}

/// Summary of a planting window, e.g. `cool-warm` over weeks 12-15
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRange {
    #[serde(rename = "season")]
    pub label: String,
    pub start_week: usize,
    pub end_week: usize,
}

/// Output of the season pipeline for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonBreakdown {
    /// Smoothed, classified weeks
    pub season_data: WeekGrid<WeekRecord>,
    #[serde(rename = "transitions")]
    pub planting_windows: Vec<PlantingWindow>,
    pub season_ranges: Vec<SeasonRange>,
}
