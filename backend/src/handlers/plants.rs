//! HTTP handlers for the plant catalog

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::PlantCatalog;
use crate::AppState;

/// Get the plant catalog
pub async fn get_plants(State(state): State<AppState>) -> AppResult<Json<PlantCatalog>> {
    let catalog = state.plants.get_catalog().await?;
    Ok(Json(catalog))
}
