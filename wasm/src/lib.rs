//! WebAssembly module for the Garden Planner front end
//!
//! Provides client-side computation for:
//! - Season classification of a weekly average
//! - Planting windows from weekly averages the page already holds
//! - The full pipeline over raw daily temperatures
//! - Zip code validation before a request is made

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::season::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&JsValue::from_str(concat!(
        "garden-planner-wasm ",
        env!("CARGO_PKG_VERSION")
    )));
}

/// Weekly averages with their seasonal breakdown
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DailyAnalysis {
    weekly_data: WeekGrid<WeeklyAverage>,
    processed: SeasonBreakdown,
}

/// Classify a weekly average temperature (°F) as cold, cool, warm or hot
#[wasm_bindgen]
pub fn classify_season(average_temp: f64) -> String {
    classify(average_temp).to_string()
}

/// Check a zip code before sending it to the server
#[wasm_bindgen]
pub fn is_valid_zip_code(zip_code: &str) -> bool {
    validate_zip_code(zip_code).is_ok()
}

/// Run smoothing through window construction over 52 weekly averages.
///
/// Returns the season breakdown as JSON.
#[wasm_bindgen]
pub fn process_season_data(weekly_json: &str, wrap_windows: bool) -> Result<String, JsValue> {
    process_weekly(weekly_json, wrap_windows).map_err(js_error)
}

/// Run the full pipeline over daily max/min temperatures starting at
/// `start_date` (`YYYY-MM-DD`).
///
/// Returns `{ weeklyData, processed }` as JSON.
#[wasm_bindgen]
pub fn analyze_daily_temperatures(
    max_json: &str,
    min_json: &str,
    start_date: &str,
    wrap_windows: bool,
) -> Result<String, JsValue> {
    analyze_daily(max_json, min_json, start_date, wrap_windows).map_err(js_error)
}

fn process_weekly(weekly_json: &str, wrap_windows: bool) -> Result<String, String> {
    let weeks: Vec<WeeklyAverage> =
        serde_json::from_str(weekly_json).map_err(|e| format!("Invalid weekly JSON: {}", e))?;
    let grid = WeekGrid::try_from(weeks).map_err(|e| e.to_string())?;

    let breakdown = SeasonAnalyzer::new(WindowWrap::from_flag(wrap_windows)).analyze_weeks(grid);
    serde_json::to_string(&breakdown).map_err(|e| e.to_string())
}

fn analyze_daily(
    max_json: &str,
    min_json: &str,
    start_date: &str,
    wrap_windows: bool,
) -> Result<String, String> {
    let max_temps: Vec<f64> =
        serde_json::from_str(max_json).map_err(|e| format!("Invalid max temperatures: {}", e))?;
    let min_temps: Vec<f64> =
        serde_json::from_str(min_json).map_err(|e| format!("Invalid min temperatures: {}", e))?;
    let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|e| format!("Invalid start date '{}': {}", start_date, e))?;

    let series = DailyTemperatureSeries::new(start_date, max_temps, min_temps);
    let weekly_data = aggregate_weeks(&series).map_err(|e| e.to_string())?;
    let processed =
        SeasonAnalyzer::new(WindowWrap::from_flag(wrap_windows)).analyze_weeks(weekly_data.clone());

    serde_json::to_string(&DailyAnalysis {
        weekly_data,
        processed,
    })
    .map_err(|e| e.to_string())
}

fn js_error(message: String) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}
