//! Train/test splitting and walk-forward evaluation.
//!
//! Walk-forward validation forecasts one step at a time across the test
//! window. After each forecast the true observation is revealed and becomes
//! the history for the next step.

use crate::error::{Result, SignalError};
use crate::models::StepForecaster;
use crate::utils::metrics::{calculate_metrics, AccuracyMetrics};

/// Split a series into a leading training part and a trailing test part.
///
/// The split index is `floor(len * train_fraction)`.
///
/// # Errors
/// `InvalidParameter` unless `0 < train_fraction < 1` and both parts are
/// non-empty.
///
/// # Example
/// ```
/// use anofox_signal::models::train_test_split;
///
/// let series: Vec<f64> = (0..100).map(|i| i as f64).collect();
/// let (train, test) = train_test_split(&series, 0.66).unwrap();
/// assert_eq!(train.len(), 66);
/// assert_eq!(test.len(), 34);
/// ```
pub fn train_test_split(series: &[f64], train_fraction: f64) -> Result<(&[f64], &[f64])> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(SignalError::invalid(format!(
            "train_fraction must lie strictly between 0 and 1, got {train_fraction}"
        )));
    }

    let split = (series.len() as f64 * train_fraction).floor() as usize;
    if split == 0 || split >= series.len() {
        return Err(SignalError::invalid(format!(
            "split of {} values at fraction {train_fraction} leaves an empty part",
            series.len()
        )));
    }

    Ok(series.split_at(split))
}

/// Forecast every test value one step ahead.
///
/// The first forecast is made from the last training value; each later
/// forecast is made from the previous test value.
///
/// # Errors
/// `EmptyData` if either slice is empty.
pub fn walk_forward<F: StepForecaster + ?Sized>(
    forecaster: &mut F,
    train: &[f64],
    test: &[f64],
) -> Result<Vec<f64>> {
    let mut history = *train.last().ok_or(SignalError::EmptyData)?;
    if test.is_empty() {
        return Err(SignalError::EmptyData);
    }

    let mut predictions = Vec::with_capacity(test.len());
    for &actual in test {
        predictions.push(forecaster.predict_next(history));
        history = actual;
    }

    Ok(predictions)
}

/// Outcome of a walk-forward evaluation.
#[derive(Debug, Clone)]
pub struct WalkForwardResult {
    /// Name of the evaluated model.
    pub model: String,
    /// One-step forecasts, aligned with the test window.
    pub predictions: Vec<f64>,
    /// Accuracy of the forecasts against the test window.
    pub metrics: AccuracyMetrics,
}

/// Run [`walk_forward`] and score the forecasts.
///
/// # Example
/// ```
/// use anofox_signal::models::{evaluate, Persistence};
///
/// let train = [0.0, 1.0, 2.0];
/// let test = [3.0, 2.0, 3.0];
/// let result = evaluate(&mut Persistence::new(), &train, &test).unwrap();
///
/// assert_eq!(result.predictions, vec![2.0, 3.0, 2.0]);
/// assert_eq!(result.metrics.mse, 1.0);
/// ```
pub fn evaluate<F: StepForecaster + ?Sized>(
    forecaster: &mut F,
    train: &[f64],
    test: &[f64],
) -> Result<WalkForwardResult> {
    let predictions = walk_forward(forecaster, train, test)?;
    let metrics = calculate_metrics(test, &predictions)?;

    tracing::debug!(
        "walk-forward {}: n_test={}, mse={:.4}",
        forecaster.name(),
        test.len(),
        metrics.mse
    );

    Ok(WalkForwardResult {
        model: forecaster.name().to_string(),
        predictions,
        metrics,
    })
}
