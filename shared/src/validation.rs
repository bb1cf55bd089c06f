//! Validation utilities for Garden Planner requests

use rust_decimal::Decimal;

/// Validate a US zip code (exactly five ASCII digits)
pub fn validate_zip_code(zip_code: &str) -> Result<(), &'static str> {
    if zip_code.len() != 5 || !zip_code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Zip code must be 5 digits");
    }
    Ok(())
}

/// Validate that coordinates lie on the globe
pub fn validate_coordinates(latitude: Decimal, longitude: Decimal) -> Result<(), &'static str> {
    if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}
