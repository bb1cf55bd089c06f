//! Garden Planner - Backend Server
//!
//! Serves seasonal planting windows for US zip codes, derived from a year of
//! historical temperatures, together with the plant catalog.

use anyhow::Context;
use axum::{http::HeaderValue, routing::get, Router};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod middleware;
mod routes;
mod services;

pub use config::Config;

use config::CorsConfig;
use middleware::ResponseCache;
use services::{PlantService, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
    pub plants: PlantService,
    pub response_cache: ResponseCache,
}

impl AppState {
    /// Build every service from configuration
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.weather.request_timeout_secs);

        let weather = WeatherService::from_config(&config.weather, &config.season, &config.cache)
            .context("failed to create weather service")?;
        let plants = PlantService::from_config(&config.sheets, timeout)
            .context("failed to create plant service")?;
        let response_cache = ResponseCache::new(
            config.cache.max_capacity,
            Duration::from_secs(config.cache.plants_ttl_secs),
        );

        Ok(Self {
            config: Arc::new(config),
            weather,
            plants,
            response_cache,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garden_planner_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Garden Planner Server");
    tracing::info!("Environment: {}", config.environment);

    if config.sheets.sheet_id.is_some() {
        tracing::info!("Plant catalog source: Google Sheets");
    } else {
        tracing::info!("Plant catalog source: built-in");
    }
    if config.season.wrap_windows {
        tracing::info!("Planting windows wrap across the year boundary");
    }

    let host: std::net::IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server host '{}'", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);

    let cors = cors_layer(&config.cors)?;

    // Create application state
    let state = AppState::from_config(config)?;

    // Build application
    let app = create_app(state, cors);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS restricted to the front end when its URL is configured
fn cors_layer(cors: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &cors.frontend_url {
        Some(url) => {
            let origin = HeaderValue::from_str(url)
                .with_context(|| format!("invalid frontend url '{}'", url))?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", routes::api_routes(state.response_cache.clone()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Garden Planner API v1.0"
}
