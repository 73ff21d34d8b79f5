//! Error types for the stock_forecast crate

use thiserror::Error;

/// Custom error types for the stock_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Unsupported history span label
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// The fetch returned no bars for the requested ticker and range
    #[error("No data available for {ticker}")]
    NoDataAvailable {
        /// Exchange-qualified symbol the request was for
        ticker: String,
    },

    /// Too little data left to derive features or fit a trend
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error talking to the price history service
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Error related to series validation or request parameters
    #[error("Data error: {0}")]
    Data(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reading or writing the prediction ledger
    #[error("Ledger format error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<trend_math::MathError> for ForecastError {
    fn from(err: trend_math::MathError) -> Self {
        match err {
            trend_math::MathError::InsufficientData(msg) => ForecastError::InsufficientData(msg),
            other => ForecastError::Data(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ForecastError {
    fn from(err: reqwest::Error) -> Self {
        ForecastError::Fetch(err.to_string())
    }
}
