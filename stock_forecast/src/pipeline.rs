//! One forecast request, run start to finish
//!
//! Fetch, enrich, forecast, render, persist, then report prior
//! predictions. Everything runs synchronously on the calling thread; a
//! failure halts this invocation only, and nothing is retried.

use crate::data::{enrich, EnrichedSeries, LONG_WINDOW};
use crate::error::{ForecastError, Result};
use crate::fetch::PriceHistorySource;
use crate::forecast::{ForecastPoint, TrendForecaster};
use crate::ledger::PredictionLedger;
use crate::range::DateRange;
use crate::render::{ChartView, Presenter};
use tracing::info;

/// What a completed forecast request produced.
#[derive(Debug)]
pub struct ForecastOutcome {
    /// Rows that survived enrichment
    pub enriched_rows: usize,
    /// The extrapolated points, one per horizon day
    pub forecast: Vec<ForecastPoint>,
}

/// Run one forecast request against the given collaborators.
pub fn run_forecast<S, P>(
    source: &S,
    ledger: &PredictionLedger,
    presenter: &mut P,
    ticker: &str,
    range: DateRange,
    forecaster: TrendForecaster,
) -> Result<ForecastOutcome>
where
    S: PriceHistorySource + ?Sized,
    P: Presenter + ?Sized,
{
    info!(ticker, range = %range, "fetching price history");
    let series = source.fetch(ticker, &range)?;
    if series.is_empty() {
        return Err(ForecastError::NoDataAvailable {
            ticker: ticker.to_string(),
        });
    }

    let enriched = enrich(&series)?;
    if enriched.is_empty() {
        return Err(ForecastError::InsufficientData(format!(
            "{} bars fetched for {}, fewer than the {}-bar long window",
            series.len(),
            ticker,
            LONG_WINDOW
        )));
    }

    let forecast = forecaster.forecast(&enriched)?;
    info!(
        ticker,
        rows = enriched.len(),
        horizon = forecast.len(),
        "trend fitted"
    );

    let view = session_view(&enriched, &forecast, &range);
    presenter.show_chart(&enriched, &forecast, &view)?;

    ledger.append(ticker, &forecast)?;
    let prior = ledger.query(ticker)?;
    presenter.show_predictions("Previous predictions:", &prior)?;

    Ok(ForecastOutcome {
        enriched_rows: enriched.len(),
        forecast,
    })
}

/// Initial view for this session: the surviving history plus the forecast
/// extension.
fn session_view(
    series: &EnrichedSeries,
    forecast: &[ForecastPoint],
    range: &DateRange,
) -> ChartView {
    match (series.first_date(), forecast.last()) {
        (Some(start), Some(point)) => ChartView::spanning(start, point.date),
        _ => ChartView::spanning(range.start, range.end),
    }
}
