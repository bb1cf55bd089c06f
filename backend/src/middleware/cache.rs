//! Response cache middleware
//!
//! Caches successful GET responses in memory, keyed by path and query

use std::time::{Duration, Instant};

use axum::{
    body::{Body, Bytes},
    extract::{OriginalUri, Request, State},
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use moka::future::Cache;

/// Largest response body that will be buffered for caching
const MAX_CACHED_BODY_BYTES: usize = 10 * 1024 * 1024;

pub const X_CACHE: &str = "x-cache";
pub const X_CACHE_AGE: &str = "x-cache-age";

#[derive(Clone)]
struct CachedResponse {
    body: Bytes,
    content_type: Option<HeaderValue>,
    stored_at: Instant,
}

/// In-memory TTL cache of response bodies
#[derive(Clone)]
pub struct ResponseCache {
    entries: Cache<String, CachedResponse>,
}

impl ResponseCache {
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Keys of every live entry
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|(key, _)| (*key).clone()).collect();
        keys.sort();
        keys
    }

    /// Number of live entries
    pub async fn size(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

/// Serve GET requests from the cache, storing successful responses on a miss
pub async fn cache_response(
    State(cache): State<ResponseCache>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    // Nested routers strip their prefix from the request URI
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| original.0.clone())
        .unwrap_or_else(|| request.uri().clone());
    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    if let Some(cached) = cache.entries.get(&key).await {
        let age = cached.stored_at.elapsed().as_secs();
        tracing::debug!("Response cache HIT: {} ({}s old)", key, age);

        let mut response = Response::new(Body::from(cached.body));
        let headers = response.headers_mut();
        if let Some(content_type) = cached.content_type {
            headers.insert(CONTENT_TYPE, content_type);
        }
        headers.insert(X_CACHE, HeaderValue::from_static("HIT"));
        headers.insert(X_CACHE_AGE, HeaderValue::from(age));
        return response;
    }

    tracing::debug!("Response cache MISS: {}", key);

    let response = next.run(request).await;
    if !response.status().is_success() {
        let mut response = response;
        response
            .headers_mut()
            .insert(X_CACHE, HeaderValue::from_static("MISS"));
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let body = match axum::body::to_bytes(body, MAX_CACHED_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Failed to buffer response for {}: {}", key, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    cache
        .entries
        .insert(
            key,
            CachedResponse {
                body: body.clone(),
                content_type: parts.headers.get(CONTENT_TYPE).cloned(),
                stored_at: Instant::now(),
            },
        )
        .await;

    parts
        .headers
        .insert(X_CACHE, HeaderValue::from_static("MISS"));
    Response::from_parts(parts, Body::from(body))
}
