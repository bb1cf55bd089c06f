//! Domain models for the Garden Planner platform

mod plant;
mod season;
mod weather;

pub use plant::*;
pub use season::*;
pub use weather::*;
