//! HTTP handlers for weather report endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use shared::{validate_zip_code, WeatherReport};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Weather report plus whether it came from the report cache
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    #[serde(flatten)]
    pub report: WeatherReport,
    pub cached: bool,
}

/// Get the seasonal weather report for a US zip code
pub async fn get_weather(
    State(state): State<AppState>,
    Path(zip_code): Path<String>,
) -> AppResult<Json<WeatherResponse>> {
    validate_zip_code(&zip_code).map_err(|message| AppError::Validation {
        field: "zip_code".to_string(),
        message: message.to_string(),
    })?;

    let (report, cached) = state.weather.get_report(&zip_code).await?;
    Ok(Json(WeatherResponse { report, cached }))
}
