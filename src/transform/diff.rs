//! Differencing.

use crate::error::{Result, SignalError};

/// Apply lagged differencing: `x[t] - x[t - lag]` for `t >= lag`.
///
/// The output has `series.len() - lag` values. Differencing a random walk
/// with `lag = 1` recovers its independent steps.
///
/// # Errors
/// `InvalidParameter` if `lag == 0`, `InsufficientData` if the series is not
/// longer than `lag`.
///
/// # Example
/// ```
/// use anofox_signal::transform::difference;
///
/// let d = difference(&[0.0, 1.0, 0.0, -1.0, 0.0], 1).unwrap();
/// assert_eq!(d, vec![1.0, -1.0, -1.0, 1.0]);
/// ```
pub fn difference(series: &[f64], lag: usize) -> Result<Vec<f64>> {
    if lag == 0 {
        return Err(SignalError::invalid("difference lag must be positive"));
    }
    if series.len() <= lag {
        return Err(SignalError::InsufficientData {
            needed: lag + 1,
            got: series.len(),
        });
    }

    Ok(series
        .iter()
        .skip(lag)
        .zip(series.iter())
        .map(|(curr, prev)| curr - prev)
        .collect())
}
