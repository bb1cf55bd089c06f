//! Geocoding client for resolving US zip codes
//!
//! Integrates with the Nominatim (OpenStreetMap) search API

use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{validate_coordinates, Location};

use crate::error::{AppError, AppResult};

/// Nominatim geocoding client
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

/// Nominatim search result
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl GeocodingClient {
    /// Create a new GeocodingClient
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build geocoding client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a US zip code to a named location
    pub async fn geocode_zip(&self, zip_code: &str) -> AppResult<Location> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("postalcode", zip_code),
                ("country", "US"),
                ("format", "json"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Geocoding(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Geocoding(format!("{} - {}", status, body)));
        }

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| AppError::Geocoding(format!("failed to parse response: {}", e)))?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Zip code".to_string()))?;

        tracing::debug!("Geocoded {} to {}", zip_code, place.display_name);

        let latitude = parse_coordinate(&place.lat)?;
        let longitude = parse_coordinate(&place.lon)?;
        validate_coordinates(latitude, longitude).map_err(|msg| AppError::Geocoding(msg.to_string()))?;

        Ok(Location {
            name: place.display_name,
            latitude,
            longitude,
        })
    }
}

fn parse_coordinate(value: &str) -> AppResult<Decimal> {
    Decimal::from_str(value.trim())
        .map_err(|e| AppError::Geocoding(format!("invalid coordinate '{}': {}", value, e)))
}
