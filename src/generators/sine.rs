//! Sampled sine wave covering a whole number of cycles.

use std::f64::consts::PI;

use crate::error::{Result, SignalError};

/// Table of a sampled sine wave.
#[derive(Debug, Clone, PartialEq)]
pub struct SineWave {
    /// Phase at each sample, `cycles * 2π t / n`.
    pub x: Vec<f64>,
    /// Amplitude `sin(x)` at each sample.
    pub y: Vec<f64>,
}

impl SineWave {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// True if the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Largest phase value (the right edge of a phase axis).
    pub fn x_max(&self) -> f64 {
        self.x.last().copied().unwrap_or(0.0)
    }
}

/// Sample `cycles` periods of a unit sine wave at `n_points` evenly spaced
/// phases.
///
/// The phase runs over `[0, cycles * 2π)`; the endpoint is excluded.
///
/// # Example
/// ```
/// use anofox_signal::generators::sine_wave;
///
/// let wave = sine_wave(1000, 3.0).unwrap();
/// assert_eq!(wave.len(), 1000);
/// assert_eq!(wave.y[0], 0.0);
/// ```
pub fn sine_wave(n_points: usize, cycles: f64) -> Result<SineWave> {
    if n_points == 0 {
        return Err(SignalError::invalid("n_points must be positive"));
    }
    if !(cycles.is_finite() && cycles > 0.0) {
        return Err(SignalError::invalid(format!(
            "cycles must be finite and positive, got {cycles}"
        )));
    }

    let n = n_points as f64;
    let x: Vec<f64> = (0..n_points)
        .map(|t| cycles * (2.0 * PI * t as f64) / n)
        .collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();

    Ok(SineWave { x, y })
}
