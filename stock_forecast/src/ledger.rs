//! Append-only persistence of generated predictions

use crate::error::Result;
use crate::forecast::ForecastPoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One persisted prediction row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Calendar date the prediction is for
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Exchange-qualified symbol the prediction was generated for
    #[serde(rename = "Ticker")]
    pub ticker: String,
    /// Predicted closing price
    #[serde(rename = "Predicted_Price")]
    pub predicted_price: f64,
}

/// Flat-file store of every prediction ever generated.
///
/// Records are only ever appended; there is no update or delete. Each
/// append reads the file whole and rewrites it whole, which is safe under
/// the single-process, single-writer model this tool runs in.
#[derive(Debug, Clone)]
pub struct PredictionLedger {
    path: PathBuf,
}

impl PredictionLedger {
    /// Open a ledger at the given path. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record per forecast point.
    pub fn append(&self, ticker: &str, points: &[ForecastPoint]) -> Result<()> {
        let mut records = self.load_all()?;
        records.extend(points.iter().map(|point| PredictionRecord {
            date: point.date,
            ticker: ticker.to_string(),
            predicted_price: point.predicted_close,
        }));

        let mut writer = csv::Writer::from_path(&self.path)?;
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!(
            ticker,
            appended = points.len(),
            total = records.len(),
            path = %self.path.display(),
            "predictions saved"
        );
        Ok(())
    }

    /// All records for the ticker, in storage order.
    ///
    /// A missing ledger file is the first-run case and reads as empty,
    /// not as an error.
    pub fn query(&self, ticker: &str) -> Result<Vec<PredictionRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|record| record.ticker == ticker)
            .collect())
    }

    fn load_all(&self) -> Result<Vec<PredictionRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "ledger not created yet");
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }
}
