//! Price history retrieval
//!
//! The fetch boundary is a trait so the pipeline and tests can run against
//! canned data; the shipped implementation queries Yahoo Finance's v8
//! chart endpoint for daily bars.

use crate::data::{PriceBar, PriceSeries};
use crate::error::{ForecastError, Result};
use crate::range::DateRange;
use chrono::{DateTime, NaiveTime};
use serde_json::Value;
use tracing::debug;

/// Source of historical daily bars for a ticker over a date range.
///
/// An empty series is the "no data" signal; errors are reserved for
/// transport and payload failures.
pub trait PriceHistorySource {
    /// Fetch daily bars for the ticker, oldest first.
    fn fetch(&self, ticker: &str, range: &DateRange) -> Result<PriceSeries>;
}

/// Daily-bar client for Yahoo Finance's chart API.
#[derive(Debug, Clone)]
pub struct YahooFinanceClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl YahooFinanceClient {
    /// Create a client against the public Yahoo Finance host
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent("Mozilla/5.0")
            .build()?;

        Ok(Self {
            http,
            base_url: "https://query1.finance.yahoo.com".to_string(),
        })
    }

    /// Point the client at a different host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl PriceHistorySource for YahooFinanceClient {
    fn fetch(&self, ticker: &str, range: &DateRange) -> Result<PriceSeries> {
        let period1 = range.start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let period2 = range.end.and_time(NaiveTime::MIN).and_utc().timestamp();
        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url, ticker, period1, period2
        );

        debug!(ticker, url = %url, "fetching price history");

        let response = self.http.get(&url).send()?;
        if !response.status().is_success() {
            return Err(ForecastError::Fetch(format!(
                "Price service returned {} for {}",
                response.status(),
                ticker
            )));
        }

        let payload: Value = response.json()?;
        let bars = parse_chart_payload(&payload)?;
        debug!(ticker, bars = bars.len(), "price history fetched");

        PriceSeries::new(ticker, bars)
    }
}

/// Decode a chart payload into daily bars, oldest first.
///
/// A missing result block means the ticker/range had no data and yields an
/// empty list. Bars with a null close are skipped; the endpoint pads
/// holidays with null quotes and repeats the live session's date at the
/// tail of a daily range, so same-date repeats are skipped too.
pub fn parse_chart_payload(payload: &Value) -> Result<Vec<PriceBar>> {
    if let Some(err) = payload["chart"]["error"].as_object() {
        let code = err.get("code").and_then(Value::as_str).unwrap_or("unknown");
        let description = err
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("no description");
        return Err(ForecastError::Fetch(format!("{}: {}", code, description)));
    }

    let result = match payload["chart"]["result"].get(0) {
        Some(result) => result,
        None => return Ok(Vec::new()),
    };

    let timestamps = match result["timestamp"].as_array() {
        Some(timestamps) => timestamps,
        None => return Ok(Vec::new()),
    };

    let quote = &result["indicators"]["quote"][0];

    let mut bars: Vec<PriceBar> = Vec::with_capacity(timestamps.len());
    for (i, stamp) in timestamps.iter().enumerate() {
        let secs = match stamp.as_i64() {
            Some(secs) => secs,
            None => continue,
        };
        let date = match DateTime::from_timestamp(secs, 0) {
            Some(stamp) => stamp.date_naive(),
            None => continue,
        };
        if bars.last().map_or(false, |bar| bar.date >= date) {
            continue;
        }

        let close = match quote_value(quote, "close", i) {
            Some(close) => close,
            None => continue,
        };
        let open = quote_value(quote, "open", i).unwrap_or(close);
        let high = quote_value(quote, "high", i).unwrap_or(close);
        let low = quote_value(quote, "low", i).unwrap_or(close);
        let volume = quote["volume"].get(i).and_then(Value::as_u64).unwrap_or(0);

        bars.push(PriceBar {
            date,
            open,
            high,
            low,
            close,
            volume,
        });
    }

    Ok(bars)
}

fn quote_value(quote: &Value, field: &str, index: usize) -> Option<f64> {
    quote[field].get(index).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chart_payload(timestamps: Value, quote: Value) -> Value {
        json!({
            "chart": {
                "result": [{
                    "timestamp": timestamps,
                    "indicators": { "quote": [quote] }
                }],
                "error": null
            }
        })
    }

    #[test]
    fn test_parse_daily_bars() {
        // 2023-01-02 and 2023-01-03, midnight UTC
        let payload = chart_payload(
            json!([1672617600, 1672704000]),
            json!({
                "open": [10.0, 11.0],
                "high": [12.0, 13.0],
                "low": [9.0, 10.0],
                "close": [11.0, 12.5],
                "volume": [1000, 1500]
            }),
        );

        let bars = parse_chart_payload(&payload).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date.to_string(), "2023-01-02");
        assert_eq!(bars[0].close, 11.0);
        assert_eq!(bars[1].volume, 1500);
    }

    #[test]
    fn test_null_closes_are_skipped() {
        let payload = chart_payload(
            json!([1672617600, 1672704000, 1672790400]),
            json!({
                "open": [10.0, null, 11.0],
                "high": [12.0, null, 13.0],
                "low": [9.0, null, 10.0],
                "close": [11.0, null, 12.5],
                "volume": [1000, null, 1500]
            }),
        );

        let bars = parse_chart_payload(&payload).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].date.to_string(), "2023-01-04");
    }

    #[test]
    fn test_repeated_session_date_is_skipped() {
        // Same trading day twice: a settled bar plus the live session
        let payload = chart_payload(
            json!([1672617600, 1672644000]),
            json!({
                "open": [10.0, 10.5],
                "high": [12.0, 12.5],
                "low": [9.0, 9.5],
                "close": [11.0, 11.5],
                "volume": [1000, 500]
            }),
        );

        let bars = parse_chart_payload(&payload).unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].close, 11.0);
    }

    #[test]
    fn test_missing_result_block_is_no_data() {
        let payload = json!({ "chart": { "result": null, "error": null } });
        assert!(parse_chart_payload(&payload).unwrap().is_empty());
    }

    #[test]
    fn test_service_error_surfaces_as_fetch_error() {
        let payload = json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" }
            }
        });

        let result = parse_chart_payload(&payload);
        assert!(matches!(result, Err(ForecastError::Fetch(_))));
    }
}
