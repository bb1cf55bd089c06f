//! Common types used across the platform

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A resolved place, as returned by the geocoder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub longitude: Decimal,
}
