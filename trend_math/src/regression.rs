//! Ordinary-least-squares line fitting
//!
//! Fits `y = slope * x + intercept` over explicit (x, y) samples, so the
//! x axis can carry real units such as ordinal day counts rather than
//! element indices.

use crate::{MathError, Result};

/// A fitted least-squares line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeastSquaresLine {
    slope: f64,
    intercept: f64,
}

impl LeastSquaresLine {
    /// Fit a line to the given samples.
    ///
    /// Needs at least two samples, with x values that are not all identical.
    pub fn fit(samples: &[(f64, f64)]) -> Result<Self> {
        if samples.len() < 2 {
            return Err(MathError::InsufficientData(
                "Line fitting needs at least 2 points".to_string(),
            ));
        }

        let n = samples.len() as f64;
        let x_mean = samples.iter().map(|s| s.0).sum::<f64>() / n;
        let y_mean = samples.iter().map(|s| s.1).sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for &(x, y) in samples {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate slope: x values are too similar".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        Ok(Self { slope, intercept })
    }

    /// Predict the y value at the given x
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Get the slope (trend direction and strength)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the R-squared value (coefficient of determination) against the
    /// samples the line was fitted on
    pub fn r_squared(&self, samples: &[(f64, f64)]) -> Result<f64> {
        if samples.len() < 2 {
            return Err(MathError::InsufficientData(
                "Not enough data to calculate R-squared. Need at least 2 points.".to_string(),
            ));
        }

        let y_mean = samples.iter().map(|s| s.1).sum::<f64>() / samples.len() as f64;

        let mut ss_total = 0.0; // total sum of squares
        let mut ss_residual = 0.0; // residual sum of squares

        for &(x, y) in samples {
            let y_pred = self.predict(x);
            ss_total += (y - y_mean).powi(2);
            ss_residual += (y - y_pred).powi(2);
        }

        if ss_total.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate R-squared: total sum of squares is too small".to_string(),
            ));
        }

        Ok(1.0 - (ss_residual / ss_total))
    }
}
