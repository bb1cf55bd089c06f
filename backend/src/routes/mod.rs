//! Route definitions for the Garden Planner API

use axum::{middleware, routing::get, Router};

use crate::{
    handlers,
    middleware::{cache_response, ResponseCache},
    AppState,
};

/// Create API routes
pub fn api_routes(response_cache: ResponseCache) -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/weather/:zip_code", get(handlers::get_weather))
        .route(
            "/plants",
            get(handlers::get_plants)
                .route_layer(middleware::from_fn_with_state(response_cache, cache_response)),
        )
        .route(
            "/cache",
            get(handlers::get_cache_stats).delete(handlers::clear_cache),
        )
}

