//! Error handling for the Garden Planner backend
//!
//! Provides consistent JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::SeasonError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Season analysis errors
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // External service errors
    #[error("Geocoding service error: {0}")]
    Geocoding(String),

    #[error("Weather archive error: {0}")]
    WeatherArchive(String),

    #[error("Google Sheets error: {0}")]
    Sheets(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<SeasonError> for AppError {
    fn from(err: SeasonError) -> Self {
        match err {
            SeasonError::InsufficientData { week, days } => AppError::InsufficientData(format!(
                "week {} has no observations ({} days available)",
                week, days
            )),
            SeasonError::InvalidInput(reason) => AppError::InvalidInput(reason),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        let detail = |code: &str, message: String| ErrorDetail {
            code: code.to_string(),
            message,
            field: None,
        };

        match self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                detail("NOT_FOUND", format!("{} not found", resource)),
            ),
            AppError::InsufficientData(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                detail("INSUFFICIENT_DATA", msg.clone()),
            ),
            AppError::InvalidInput(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                detail("INVALID_INPUT", msg.clone()),
            ),
            AppError::Geocoding(msg) => (
                StatusCode::BAD_GATEWAY,
                detail("GEOCODING_ERROR", format!("Geocoding service error: {}", msg)),
            ),
            AppError::WeatherArchive(msg) => (
                StatusCode::BAD_GATEWAY,
                detail("WEATHER_ARCHIVE_ERROR", format!("Failed to fetch weather data: {}", msg)),
            ),
            AppError::Sheets(msg) => (
                StatusCode::BAD_GATEWAY,
                detail("SHEETS_ERROR", format!("Failed to fetch plant catalog: {}", msg)),
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                detail("CONFIGURATION_ERROR", format!("Configuration error: {}", msg)),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                detail("INTERNAL_ERROR", msg.clone()),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
