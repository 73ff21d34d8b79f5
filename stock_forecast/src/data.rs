//! Price series types and moving-average enrichment

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trend_math::moving_averages::TrailingMean;

/// Bars in the short trailing window.
pub const SHORT_WINDOW: usize = 50;
/// Bars in the long trailing window.
pub const LONG_WINDOW: usize = 200;

/// One daily price bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date of the bar
    pub date: NaiveDate,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Traded volume
    pub volume: u64,
}

/// Date-ordered daily bars for one ticker over one range.
///
/// Bar dates are strictly increasing; construction rejects anything else.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    ticker: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series, validating bar order.
    pub fn new(ticker: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self> {
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ForecastError::Data(format!(
                    "Bars out of order: {} does not follow {}",
                    pair[1].date, pair[0].date
                )));
            }
        }

        Ok(Self {
            ticker: ticker.into(),
            bars,
        })
    }

    /// A series with no bars, the "no data" result of a fetch.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            bars: Vec::new(),
        }
    }

    /// Get the ticker the series was fetched for
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Get the bars in date order
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Get the number of bars
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Closing prices in date order
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    /// Date of the last bar, if any
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|bar| bar.date)
    }
}

/// A close price carrying both of its trailing means.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedBar {
    /// Trading date of the bar
    pub date: NaiveDate,
    /// Close price
    pub close: f64,
    /// Trailing mean over [`SHORT_WINDOW`] closes, current bar included
    pub ma50: f64,
    /// Trailing mean over [`LONG_WINDOW`] closes, current bar included
    pub ma200: f64,
}

/// Price series with both trailing windows fully populated on every row.
///
/// Rows from before the long window fills are dropped outright: N input
/// bars yield N − 199 rows, and fewer than 200 bars yield nothing. An
/// empty enriched series means "insufficient data", never a partial
/// window.
#[derive(Debug, Clone, Default)]
pub struct EnrichedSeries {
    rows: Vec<EnrichedBar>,
}

impl EnrichedSeries {
    /// Get the rows in date order
    pub fn rows(&self) -> &[EnrichedBar] {
        &self.rows
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if enrichment dropped every row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Date of the first surviving row, if any
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|row| row.date)
    }

    /// Date of the last row, if any
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|row| row.date)
    }
}

/// Derive both trailing means over the series' closes.
pub fn enrich(series: &PriceSeries) -> Result<EnrichedSeries> {
    let mut short = TrailingMean::new(SHORT_WINDOW)?;
    let mut long = TrailingMean::new(LONG_WINDOW)?;

    let mut rows = Vec::new();
    for bar in series.bars() {
        let short_mean = short.push(bar.close);
        let long_mean = long.push(bar.close);

        // A row survives only once both windows are full
        if let (Some(ma50), Some(ma200)) = (short_mean, long_mean) {
            rows.push(EnrichedBar {
                date: bar.date,
                close: bar.close,
                ma50,
                ma200,
            });
        }
    }

    Ok(EnrichedSeries { rows })
}
