//! Error types for damage calculations and claim loading

use thiserror::Error;

/// Errors raised outside the pure calculation path
///
/// `hoffmann_present_value` and `calculate_damages` never fail; these variants
/// come from the checked discounting entry point and from the loaders.
#[derive(Debug, Error)]
pub enum DamagesError {
    /// Discount denominator `1 + r/12 * m` vanished or an input was not finite
    #[error("Invalid discount rate {annual_rate} at month {month}")]
    InvalidDiscountRate { annual_rate: f64, month: u32 },

    /// A claim row that could not be turned into damage parameters
    #[error("Invalid claim on line {line}: {message}")]
    InvalidClaim { line: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DamagesError>;
