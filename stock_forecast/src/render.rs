//! Presentation boundary
//!
//! Rendering proper (windows, chart widgets, toolbars) lives outside this
//! crate; the pipeline only drives the [`Presenter`] trait. The bundled
//! [`TextPresenter`] writes the plain-text rendition used by the CLI.

use crate::data::EnrichedSeries;
use crate::error::Result;
use crate::forecast::ForecastPoint;
use crate::ledger::PredictionRecord;
use chrono::NaiveDate;
use std::io::Write;

/// Date window one rendering session is currently showing.
///
/// Owned by the session that renders it and handed to whatever drives
/// pan/zoom; never shared process-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartView {
    x_min: NaiveDate,
    x_max: NaiveDate,
}

impl ChartView {
    /// A view spanning the given date bounds
    pub fn spanning(x_min: NaiveDate, x_max: NaiveDate) -> Self {
        Self { x_min, x_max }
    }

    /// Narrow the visible window. Bounds outside the current window are
    /// clamped to it.
    pub fn zoom(&mut self, x_min: NaiveDate, x_max: NaiveDate) {
        self.x_min = x_min.max(self.x_min);
        self.x_max = x_max.min(self.x_max);
    }

    /// Check whether a date falls inside the view
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.x_min && date <= self.x_max
    }

    /// Get the (min, max) date bounds
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.x_min, self.x_max)
    }
}

/// Renders one forecast session's output.
pub trait Presenter {
    /// Render the enriched history plus its forecast extension.
    fn show_chart(
        &mut self,
        series: &EnrichedSeries,
        forecast: &[ForecastPoint],
        view: &ChartView,
    ) -> Result<()>;

    /// Render previously persisted predictions.
    fn show_predictions(&mut self, heading: &str, records: &[PredictionRecord]) -> Result<()>;
}

/// Plain-text presenter writing `{date}: {price:.2f}` lines.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    /// Wrap a writer
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show_chart(
        &mut self,
        series: &EnrichedSeries,
        forecast: &[ForecastPoint],
        view: &ChartView,
    ) -> Result<()> {
        let visible: Vec<_> = series
            .rows()
            .iter()
            .filter(|row| view.contains(row.date))
            .collect();

        let (x_min, x_max) = view.bounds();
        writeln!(
            self.out,
            "Close with moving averages, {} rows in view ({} to {}):",
            visible.len(),
            x_min,
            x_max
        )?;
        if let Some(latest) = visible.last() {
            writeln!(
                self.out,
                "{}: close {:.2}, 50-day {:.2}, 200-day {:.2}",
                latest.date, latest.close, latest.ma50, latest.ma200
            )?;
        }

        writeln!(self.out, "Predicted prices for the next {} days:", forecast.len())?;
        for point in forecast {
            writeln!(self.out, "{}: {:.2}", point.date, point.predicted_close)?;
        }
        Ok(())
    }

    fn show_predictions(&mut self, heading: &str, records: &[PredictionRecord]) -> Result<()> {
        if records.is_empty() {
            writeln!(self.out, "No previous predictions found.")?;
            return Ok(());
        }

        writeln!(self.out, "{}", heading)?;
        for record in records {
            writeln!(self.out, "{}: {:.2}", record.date, record.predicted_price)?;
        }
        Ok(())
    }
}
