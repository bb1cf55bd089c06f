//! Errors raised by the season analysis pipeline

use thiserror::Error;

/// Failures that can occur while reducing a daily series to weekly data.
///
/// Every stage after weekly aggregation is total over a well-formed
/// 52-week grid, so these are the only ways the pipeline can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeasonError {
    /// The series ran out before week `week` (1-based) received any days
    #[error("Insufficient data: week {week} has no observations ({days} days available)")]
    InsufficientData { week: usize, days: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
