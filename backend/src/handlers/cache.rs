//! Cache inspection handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub keys: Vec<String>,
    pub size: u64,
    pub weather_reports: u64,
}

#[derive(Debug, Serialize)]
pub struct CacheCleared {
    pub message: String,
}

/// List cached responses
pub async fn get_cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(CacheStats {
        keys: state.response_cache.keys(),
        size: state.response_cache.size().await,
        weather_reports: state.weather.cached_reports(),
    })
}

/// Clear the response cache and the weather report cache
pub async fn clear_cache(State(state): State<AppState>) -> Json<CacheCleared> {
    state.response_cache.clear();
    state.weather.invalidate_all();
    tracing::info!("Caches cleared");

    Json(CacheCleared {
        message: "Cache cleared".to_string(),
    })
}
