//! Metrics for evaluating forecast performance

use crate::error::{ForecastError, Result};
use crate::forecast::{CountForecaster, ForecastService};
use crate::window::Window;

/// Forecast performance metrics
#[derive(Debug, Clone)]
pub struct ForecastMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
}

impl std::fmt::Display for ForecastMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Performance Metrics:")?;
        writeln!(f, "  MAE:     {:.4}", self.mae)?;
        writeln!(f, "  MSE:     {:.4}", self.mse)?;
        writeln!(f, "  RMSE:    {:.4}", self.rmse)?;
        Ok(())
    }
}

/// Evaluate forecast accuracy against actual values
pub fn evaluate_forecast(forecast: &[f64], actual: &[f64]) -> Result<ForecastMetrics> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::InvalidParameter(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;
    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;

    Ok(ForecastMetrics {
        mae,
        mse,
        rmse: mse.sqrt(),
    })
}

/// Score a forecast service over held-out labeled windows.
///
/// Runs the service on each window and compares the rounded prediction to
/// the window's label count. Windows must all be labeled.
pub fn evaluate_service<F: CountForecaster>(
    service: &ForecastService<F>,
    windows: &[Window],
) -> Result<ForecastMetrics> {
    if windows.is_empty() {
        return Err(ForecastError::InvalidParameter(
            "No windows to evaluate on".to_string(),
        ));
    }

    let mut forecast = Vec::with_capacity(windows.len());
    let mut actual = Vec::with_capacity(windows.len());

    for window in windows {
        let label = window.label().ok_or_else(|| {
            ForecastError::InvalidParameter("Cannot evaluate on unlabeled windows".to_string())
        })?;
        forecast.push(f64::from(service.predict_count(window)?));
        actual.push(f64::from(label.count));
    }

    evaluate_forecast(&forecast, &actual)
}
