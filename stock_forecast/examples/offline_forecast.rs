//! Run the full forecast pipeline against synthetic data, with no network
//! and a throwaway ledger.

use chrono::{Duration, NaiveDate};
use stock_forecast::fetch::PriceHistorySource;
use stock_forecast::forecast::TrendForecaster;
use stock_forecast::ledger::PredictionLedger;
use stock_forecast::pipeline::run_forecast;
use stock_forecast::range::{DateRange, HistorySpan};
use stock_forecast::render::TextPresenter;
use stock_forecast::{PriceBar, PriceSeries, Result};

/// Source that serves a gently rising synthetic year of closes.
struct SyntheticHistory;

impl PriceHistorySource for SyntheticHistory {
    fn fetch(&self, ticker: &str, range: &DateRange) -> Result<PriceSeries> {
        let mut bars = Vec::new();
        let mut date = range.start;
        let mut close = 250.0;
        while date <= range.end {
            // A slow uptrend with a small weekly wobble
            let wobble = (bars.len() % 7) as f64 * 0.4;
            close += 0.3;
            bars.push(PriceBar {
                date,
                open: close - 0.2,
                high: close + wobble + 0.5,
                low: close - wobble - 0.5,
                close: close + wobble,
                volume: 10_000,
            });
            date += Duration::days(1);
        }
        PriceSeries::new(ticker, bars)
    }
}

fn main() -> Result<()> {
    let end = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
    let range = DateRange::ending_at(HistorySpan::OneYear, end);

    let ledger_file = std::env::temp_dir().join("offline_forecast_predictions.csv");
    let ledger = PredictionLedger::new(&ledger_file);

    let mut presenter = TextPresenter::new(std::io::stdout());
    let outcome = run_forecast(
        &SyntheticHistory,
        &ledger,
        &mut presenter,
        "DEMO.NS",
        range,
        TrendForecaster::default(),
    )?;

    println!(
        "\n{} enriched rows fitted, {} predictions appended to {}",
        outcome.enriched_rows,
        outcome.forecast.len(),
        ledger_file.display()
    );
    Ok(())
}
