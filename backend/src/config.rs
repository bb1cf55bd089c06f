//! Configuration management for the Garden Planner backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with GARDEN_ prefix
//! 4. The plain `PORT`, `FRONTEND_URL` and `GOOGLE_API_KEY` variables

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Geocoding and historical weather configuration
    pub weather: WeatherConfig,

    /// Google Sheets plant catalog configuration
    pub sheets: SheetsConfig,

    /// Response cache configuration
    pub cache: CacheConfig,

    /// Season analysis configuration
    #[serde(default)]
    pub season: SeasonConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Allowed front-end origin; any origin when unset
    pub frontend_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Nominatim base URL
    pub geocode_url: String,

    /// Open-Meteo archive base URL
    pub archive_url: String,

    /// User-Agent sent to Nominatim
    pub user_agent: String,

    /// How long a zip code's report stays cached
    pub cache_ttl_secs: u64,

    /// Upstream request timeout
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SheetsConfig {
    /// Google Sheets API base URL
    pub api_url: String,

    /// API key for public sheets
    pub api_key: Option<String>,

    /// Spreadsheet holding the plant catalog; built-in catalog when unset
    pub sheet_id: Option<String>,

    /// A1 range of catalog rows
    pub range: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Maximum cached responses
    pub max_capacity: u64,

    /// TTL for the plant catalog response
    pub plants_ttl_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeasonConfig {
    /// Let planting windows run across the end of the year
    pub wrap_windows: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("GARDEN_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3001)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.geocode_url", "https://nominatim.openstreetmap.org")?
            .set_default("weather.archive_url", "https://archive-api.open-meteo.com")?
            .set_default("weather.user_agent", "GardenPlannerApp/1.0")?
            .set_default("weather.cache_ttl_secs", 6 * 60 * 60)?
            .set_default("weather.request_timeout_secs", 30)?
            .set_default("sheets.api_url", "https://sheets.googleapis.com")?
            .set_default("sheets.range", "Sheet1!A2:I")?
            .set_default("cache.max_capacity", 1_000)?
            .set_default("cache.plants_ttl_secs", 60 * 60)?
            .set_default("season.wrap_windows", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (GARDEN_ prefix)
            .add_source(
                Environment::with_prefix("GARDEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Plain variables used by existing deployments
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("cors.frontend_url", std::env::var("FRONTEND_URL").ok())?
            .set_override_option("sheets.api_key", std::env::var("GOOGLE_API_KEY").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocode_url: "https://nominatim.openstreetmap.org".to_string(),
            archive_url: "https://archive-api.open-meteo.com".to_string(),
            user_agent: "GardenPlannerApp/1.0".to_string(),
            cache_ttl_secs: 6 * 60 * 60,
            request_timeout_secs: 30,
        }
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            api_url: "https://sheets.googleapis.com".to_string(),
            api_key: None,
            sheet_id: None,
            range: "Sheet1!A2:I".to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 1_000,
            plants_ttl_secs: 60 * 60,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            weather: WeatherConfig::default(),
            sheets: SheetsConfig::default(),
            cache: CacheConfig::default(),
            season: SeasonConfig::default(),
        }
    }
}
