//! Weather service producing seasonal planting reports

use std::time::Duration;

use chrono::{Months, NaiveDate, Utc};
use moka::future::Cache;
use shared::{aggregate_weeks, SeasonAnalyzer, WeatherReport, WindowWrap};

use crate::config::{CacheConfig, SeasonConfig, WeatherConfig};
use crate::error::{AppError, AppResult};
use crate::external::{GeocodingClient, WeatherArchiveClient};

/// Resolves zip codes, fetches a year of temperatures and runs the season
/// analysis, caching finished reports per zip code
#[derive(Clone)]
pub struct WeatherService {
    geocoder: GeocodingClient,
    archive: WeatherArchiveClient,
    analyzer: SeasonAnalyzer,
    cache: Cache<String, WeatherReport>,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(
        geocoder: GeocodingClient,
        archive: WeatherArchiveClient,
        analyzer: SeasonAnalyzer,
        max_capacity: u64,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            geocoder,
            archive,
            analyzer,
            cache: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(cache_ttl)
                .build(),
        }
    }

    /// Create a WeatherService from configuration
    pub fn from_config(
        weather: &WeatherConfig,
        season: &SeasonConfig,
        cache: &CacheConfig,
    ) -> AppResult<Self> {
        let timeout = Duration::from_secs(weather.request_timeout_secs);
        let geocoder = GeocodingClient::new(&weather.geocode_url, &weather.user_agent, timeout)?;
        let archive = WeatherArchiveClient::new(&weather.archive_url, timeout)?;
        let analyzer = SeasonAnalyzer::new(WindowWrap::from_flag(season.wrap_windows));

        Ok(Self::new(
            geocoder,
            archive,
            analyzer,
            cache.max_capacity,
            Duration::from_secs(weather.cache_ttl_secs),
        ))
    }

    /// Get the report for a zip code, from cache when fresh.
    ///
    /// Returns the report and whether it was served from cache. Concurrent
    /// misses for the same zip code share a single upstream fetch.
    pub async fn get_report(&self, zip_code: &str) -> AppResult<(WeatherReport, bool)> {
        let cache_key = format!("weather:{}", zip_code);
        let mut fetched = false;

        let report = self
            .cache
            .try_get_with(cache_key, async {
                fetched = true;
                tracing::info!("Cache MISS: {} - fetching from upstream APIs", zip_code);
                self.build_report(zip_code, Utc::now().date_naive()).await
            })
            .await
            .map_err(|e| (*e).clone())?;

        if !fetched {
            tracing::info!("Cache HIT: {}", zip_code);
        }

        Ok((report, !fetched))
    }

    /// Build a fresh report covering the year up to `today`
    pub async fn build_report(&self, zip_code: &str, today: NaiveDate) -> AppResult<WeatherReport> {
        let location = self.geocoder.geocode_zip(zip_code).await?;

        let start_date = today
            .checked_sub_months(Months::new(12))
            .ok_or_else(|| AppError::Internal("Date out of range".to_string()))?;

        let series = self
            .archive
            .fetch_daily_temperatures(location.latitude, location.longitude, start_date, today)
            .await?;

        tracing::debug!(
            "Fetched {} days of temperatures for {} ({})",
            series.len(),
            zip_code,
            location.name
        );

        let weekly_data = aggregate_weeks(&series)?;
        let processed = self.analyzer.analyze_weeks(weekly_data.clone());

        tracing::debug!(
            "Season analysis for {}: {} planting windows",
            zip_code,
            processed.planting_windows.len()
        );

        Ok(WeatherReport {
            zip_code: zip_code.to_string(),
            location,
            weekly_data,
            processed,
            last_updated: Utc::now(),
        })
    }

    /// Number of cached reports
    pub fn cached_reports(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop every cached report
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
