//! History span selection and date range resolution

use crate::error::{ForecastError, Result};
use chrono::{Duration, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// Supported history durations for a forecast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySpan {
    OneYear,
    TwoYears,
    FiveYears,
}

impl HistorySpan {
    /// Span length as a fixed day count. No leap-year adjustment.
    pub fn days(&self) -> i64 {
        match self {
            HistorySpan::OneYear => 365,
            HistorySpan::TwoYears => 2 * 365,
            HistorySpan::FiveYears => 5 * 365,
        }
    }

    /// The label the span parses from
    pub fn label(&self) -> &'static str {
        match self {
            HistorySpan::OneYear => "1 year",
            HistorySpan::TwoYears => "2 years",
            HistorySpan::FiveYears => "5 years",
        }
    }
}

impl FromStr for HistorySpan {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1 year" => Ok(HistorySpan::OneYear),
            "2 years" => Ok(HistorySpan::TwoYears),
            "5 years" => Ok(HistorySpan::FiveYears),
            other => Err(ForecastError::InvalidDuration(format!(
                "Unsupported duration '{}'. Use \"1 year\", \"2 years\", or \"5 years\".",
                other
            ))),
        }
    }
}

impl fmt::Display for HistorySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive start/end bounds for a history fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First date of the range
    pub start: NaiveDate,
    /// Last date of the range
    pub end: NaiveDate,
}

impl DateRange {
    /// Resolve a span against an explicit end date.
    pub fn ending_at(span: HistorySpan, end: NaiveDate) -> Self {
        Self {
            start: end - Duration::days(span.days()),
            end,
        }
    }

    /// Resolve a span against the current calendar date.
    pub fn ending_today(span: HistorySpan) -> Self {
        Self::ending_at(span, Utc::now().date_naive())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
