//! Accuracy metrics for forecast evaluation.

use crate::error::{Result, SignalError};

/// Accuracy metrics for evaluating forecast performance.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
}

fn check_pair(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(SignalError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(SignalError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    Ok(())
}

/// Calculate accuracy metrics between actual and predicted values.
///
/// # Arguments
/// * `actual` - Actual observed values
/// * `predicted` - Predicted/forecast values
///
/// # Example
/// ```
/// use anofox_signal::utils::calculate_metrics;
///
/// let m = calculate_metrics(&[1.0, 2.0, 3.0], &[1.0, 2.0, 5.0]).unwrap();
/// assert!((m.mse - 4.0 / 3.0).abs() < 1e-12);
/// ```
pub fn calculate_metrics(actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
    check_pair(actual, predicted)?;

    let n = actual.len() as f64;

    let mae: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / n;

    let mse = mse(actual, predicted)?;

    Ok(AccuracyMetrics {
        mae,
        mse,
        rmse: mse.sqrt(),
    })
}

/// Mean squared error between actual and predicted values.
pub fn mse(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_pair(actual, predicted)?;
    Ok(actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64)
}
