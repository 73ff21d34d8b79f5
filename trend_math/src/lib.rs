//! # Trend Math
//!
//! Calculation primitives for price-trend analysis: trailing moving-average
//! windows and ordinary-least-squares line fitting over explicit samples.

use thiserror::Error;

// Calculation modules
pub mod moving_averages;
pub mod regression;

/// Errors that can occur in trend calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;
