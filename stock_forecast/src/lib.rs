//! # Stock Forecast
//!
//! Fetches daily stock price history, derives 50- and 200-bar trailing
//! moving averages, fits a least-squares trend over date ordinals, and
//! extrapolates 30 days of future closing prices. Every forecast is
//! appended to a flat-file prediction ledger for later review.
//!
//! ## Pipeline
//!
//! One request runs synchronously to completion:
//!
//! resolve range → fetch → enrich → fit/extrapolate → render → append to
//! ledger → report prior predictions
//!
//! ## Quick Start
//!
//! ```no_run
//! use stock_forecast::fetch::YahooFinanceClient;
//! use stock_forecast::forecast::TrendForecaster;
//! use stock_forecast::ledger::PredictionLedger;
//! use stock_forecast::pipeline::run_forecast;
//! use stock_forecast::range::{DateRange, HistorySpan};
//! use stock_forecast::render::TextPresenter;
//!
//! fn main() -> stock_forecast::Result<()> {
//!     let source = YahooFinanceClient::new()?;
//!     let ledger = PredictionLedger::new("predictions.csv");
//!     let mut presenter = TextPresenter::new(std::io::stdout());
//!
//!     let range = DateRange::ending_today(HistorySpan::OneYear);
//!     let outcome = run_forecast(
//!         &source,
//!         &ledger,
//!         &mut presenter,
//!         "INFY.NS",
//!         range,
//!         TrendForecaster::default(),
//!     )?;
//!     println!("forecast of {} points saved", outcome.forecast.len());
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod fetch;
pub mod forecast;
pub mod ledger;
pub mod pipeline;
pub mod range;
pub mod render;

// Re-export commonly used types
pub use crate::data::{enrich, EnrichedBar, EnrichedSeries, PriceBar, PriceSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::forecast::{ForecastPoint, TrendForecaster};
pub use crate::ledger::{PredictionLedger, PredictionRecord};
pub use crate::range::{DateRange, HistorySpan};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
