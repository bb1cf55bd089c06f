//! Business logic services for the Garden Planner backend

pub mod plants;
pub mod weather;

pub use plants::{PlantCatalog, PlantService};
pub use weather::WeatherService;
