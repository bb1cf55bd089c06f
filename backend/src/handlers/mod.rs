//! HTTP request handlers

pub mod cache;
pub mod health;
pub mod plants;
pub mod weather;

pub use cache::*;
pub use health::*;
pub use plants::*;
pub use weather::*;
