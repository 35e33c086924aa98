//! Forecast service boundary
//!
//! The sequence model itself is a black box behind [`CountForecaster`]:
//! it takes one window's counts plus the encoded region id and returns a
//! scalar. [`ForecastService`] wraps any forecaster and enforces the
//! boundary contract — exact window length, region code within the fitted
//! range, and a non-negative integer count out.

use crate::error::{ForecastError, Result};
use crate::window::Window;
use std::fmt::Debug;

/// A model producing a one-step-ahead count prediction from a window.
pub trait CountForecaster: Debug {
    /// Predict the next day's count as a real value
    fn predict(&self, window: &Window) -> Result<f64>;

    /// Name of the forecaster
    fn name(&self) -> &str;
}

/// Baseline forecaster: the mean of the window's counts.
#[derive(Debug, Clone)]
pub struct MeanForecaster {
    name: String,
}

impl MeanForecaster {
    pub fn new() -> Self {
        Self {
            name: "Window mean".to_string(),
        }
    }
}

impl Default for MeanForecaster {
    fn default() -> Self {
        Self::new()
    }
}

impl CountForecaster for MeanForecaster {
    fn predict(&self, window: &Window) -> Result<f64> {
        let counts = window.counts();
        if counts.is_empty() {
            return Err(ForecastError::WindowLength {
                expected: 1,
                actual: 0,
            });
        }
        let sum: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        Ok(sum as f64 / counts.len() as f64)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Baseline forecaster: exponentially recency-weighted window mean.
#[derive(Debug, Clone)]
pub struct RecencyWeightedForecaster {
    name: String,
    /// Smoothing factor; higher weighs recent days more
    alpha: f64,
}

impl RecencyWeightedForecaster {
    /// Create a recency-weighted forecaster with smoothing factor `alpha`.
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "Alpha must be between 0 and 1".to_string(),
            ));
        }
        Ok(Self {
            name: format!("Recency-weighted mean (alpha={alpha})"),
            alpha,
        })
    }
}

impl CountForecaster for RecencyWeightedForecaster {
    fn predict(&self, window: &Window) -> Result<f64> {
        let counts = window.counts();
        if counts.is_empty() {
            return Err(ForecastError::WindowLength {
                expected: 1,
                actual: 0,
            });
        }

        let mut smoothed = f64::from(counts[0]);
        for &count in &counts[1..] {
            smoothed = self.alpha * f64::from(count) + (1.0 - self.alpha) * smoothed;
        }
        Ok(smoothed)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Validated prediction boundary around a forecaster.
///
/// Sized to one training run: `window_size` is the N every window must
/// have, `num_regions` is the encoder's K. Both are checked on every call
/// so a mismatched artifact fails loudly instead of corrupting forecasts.
#[derive(Debug)]
pub struct ForecastService<F: CountForecaster> {
    forecaster: F,
    window_size: usize,
    num_regions: u32,
}

impl<F: CountForecaster> ForecastService<F> {
    /// Wrap a forecaster with the run's window size and region count.
    pub fn new(forecaster: F, window_size: usize, num_regions: u32) -> Result<Self> {
        if window_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }
        if num_regions == 0 {
            return Err(ForecastError::InvalidParameter(
                "Service needs at least one region".to_string(),
            ));
        }
        Ok(Self {
            forecaster,
            window_size,
            num_regions,
        })
    }

    /// Predict the next day's accident count for one window.
    ///
    /// Rejects windows of the wrong length and region codes outside
    /// `[0, K)`; rounds the model's scalar to a non-negative integer.
    pub fn predict_count(&self, window: &Window) -> Result<u32> {
        if window.len() != self.window_size {
            return Err(ForecastError::WindowLength {
                expected: self.window_size,
                actual: window.len(),
            });
        }
        if window.region_code() >= self.num_regions {
            return Err(ForecastError::RegionCodeOutOfRange {
                code: window.region_code(),
                num_regions: self.num_regions,
            });
        }

        let raw = self.forecaster.predict(window)?;
        Ok(raw.round().max(0.0) as u32)
    }

    /// Name of the wrapped forecaster
    pub fn name(&self) -> &str {
        self.forecaster.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_bounds_are_enforced() {
        assert!(RecencyWeightedForecaster::new(0.0).is_err());
        assert!(RecencyWeightedForecaster::new(1.0).is_err());
        assert!(RecencyWeightedForecaster::new(0.3).is_ok());
    }
}
