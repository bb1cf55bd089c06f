//! Plant catalog models

use serde::{Deserialize, Serialize};

/// How far outside its temperature band a plant can be pushed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlantTolerance {
    Strict,
    #[default]
    Moderate,
    Flexible,
}

impl PlantTolerance {
    /// Parse a catalog cell, falling back to `Moderate`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => PlantTolerance::Strict,
            "flexible" => PlantTolerance::Flexible,
            _ => PlantTolerance::Moderate,
        }
    }
}

/// Mature plant footprint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlantSize {
    Xs,
    S,
    #[default]
    M,
    L,
    Xl,
}

impl PlantSize {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "XS" => PlantSize::Xs,
            "S" => PlantSize::S,
            "L" => PlantSize::L,
            "XL" => PlantSize::Xl,
            _ => PlantSize::M,
        }
    }
}

/// A plant in the planting catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub name: String,
    pub days_to_maturity: i32,
    /// Lower bound of the preferred growing temperature (°F)
    pub temp_lower: i32,
    /// Upper bound of the preferred growing temperature (°F)
    pub temp_upper: i32,
    pub tolerance: PlantTolerance,
    pub max_weeks_outside: i32,
    pub size: PlantSize,
    /// Spacing in inches
    pub spacing: f64,
    pub category: String,
}

impl Plant {
    /// Build a plant from a catalog row laid out as
    /// `name, days, lower, upper, tolerance, max weeks, size, spacing, category`.
    ///
    /// Missing or unparseable cells take catalog defaults. Rows without a
    /// name yield `None`.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Option<Self> {
        let cell = |i: usize| row.get(i).map(|c| c.as_ref().trim()).unwrap_or("");

        let name = cell(0);
        if name.is_empty() {
            return None;
        }

        let non_empty = |i: usize| Some(cell(i)).filter(|c| !c.is_empty());

        Some(Self {
            name: name.to_string(),
            days_to_maturity: leading_int(cell(1)).unwrap_or(0),
            temp_lower: leading_int(cell(2)).unwrap_or(0),
            temp_upper: leading_int(cell(3)).unwrap_or(0),
            tolerance: non_empty(4).map(PlantTolerance::parse).unwrap_or_default(),
            max_weeks_outside: leading_int(cell(5)).filter(|w| *w != 0).unwrap_or(3),
            size: non_empty(6).map(PlantSize::parse).unwrap_or_default(),
            spacing: cell(7)
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite() && *s != 0.0)
                .unwrap_or(3.0),
            category: non_empty(8).unwrap_or("Vegetable").to_string(),
        })
    }
}

/// Parse the leading integer of a cell, so `"60 days"` reads as 60
fn leading_int(value: &str) -> Option<i32> {
    let end = value
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
