//! Weather report models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::season::{SeasonBreakdown, WeekGrid, WeeklyAverage};
use crate::types::Location;

/// Seasonal weather report for a zip code, as served to the front end
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub zip_code: String,
    pub location: Location,
    /// Unclassified weekly averages over the past year
    pub weekly_data: WeekGrid<WeeklyAverage>,
    pub processed: SeasonBreakdown,
    pub last_updated: DateTime<Utc>,
}
