//! Shared types and season analysis for the Garden Planner platform
//!
//! This crate contains the domain models shared between the backend and the
//! front end (via WASM), plus the pure pipeline that turns a year of daily
//! temperatures into planting windows.

pub mod error;
pub mod models;
pub mod season;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use season::*;
pub use types::*;
pub use validation::*;
