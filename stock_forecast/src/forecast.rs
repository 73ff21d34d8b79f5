//! Linear trend fitting and fixed-horizon extrapolation

use crate::data::EnrichedSeries;
use crate::error::{ForecastError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use trend_math::regression::LeastSquaresLine;

/// Calendar days extrapolated by default.
pub const DEFAULT_HORIZON_DAYS: usize = 30;

/// One extrapolated closing price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    /// Calendar date the prediction is for
    pub date: NaiveDate,
    /// Predicted closing price
    pub predicted_close: f64,
}

/// Fit a least-squares line over date-ordinal vs. close.
///
/// Dates are encoded as proleptic-Gregorian ordinal day counts, so the
/// slope reads as price change per calendar day.
pub fn fit_trend(series: &EnrichedSeries) -> Result<LeastSquaresLine> {
    if series.len() < 2 {
        return Err(ForecastError::InsufficientData(format!(
            "Trend fitting needs at least 2 rows, have {}",
            series.len()
        )));
    }

    let samples: Vec<(f64, f64)> = series
        .rows()
        .iter()
        .map(|row| (f64::from(row.date.num_days_from_ce()), row.close))
        .collect();

    Ok(LeastSquaresLine::fit(&samples)?)
}

/// Extrapolates a fitted trend a fixed number of days forward.
///
/// This is intentionally a naive trend line: one global fit, no
/// regularization, no confidence bounds.
#[derive(Debug, Clone, Copy)]
pub struct TrendForecaster {
    horizon_days: usize,
}

impl Default for TrendForecaster {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl TrendForecaster {
    /// Create a forecaster for the given horizon
    pub fn new(horizon_days: usize) -> Result<Self> {
        if horizon_days == 0 {
            return Err(ForecastError::Data(
                "Forecast horizon must be at least one day".to_string(),
            ));
        }

        Ok(Self { horizon_days })
    }

    /// Get the horizon in days
    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// Fit the series and predict one close per calendar day after the
    /// last observed bar.
    ///
    /// The horizon is anchored to the final bar date rather than the wall
    /// clock, so a stale series forecasts the days that actually follow
    /// its data. Output length always equals the horizon, with strictly
    /// increasing dates one day apart.
    pub fn forecast(&self, series: &EnrichedSeries) -> Result<Vec<ForecastPoint>> {
        let last_date = series.last_date().ok_or_else(|| {
            ForecastError::InsufficientData("Cannot forecast from an empty series".to_string())
        })?;
        let line = fit_trend(series)?;

        let mut points = Vec::with_capacity(self.horizon_days);
        for day in 1..=self.horizon_days as i64 {
            let date = last_date + Duration::days(day);
            let predicted_close = line.predict(f64::from(date.num_days_from_ce()));
            points.push(ForecastPoint {
                date,
                predicted_close,
            });
        }

        Ok(points)
    }
}
