//! Middleware for the Garden Planner backend

pub mod cache;

pub use cache::{cache_response, ResponseCache};
