//! Random-step forecast.
//!
//! Guesses the direction of the next move of a ±step random walk by a coin
//! flip. Its error is expected to be worse than persistence, which shows
//! that the walk has no learnable direction.

use rand::Rng;

use crate::error::{Result, SignalError};
use crate::models::StepForecaster;

/// Forecaster that predicts `last ± step` with equal probability.
#[derive(Debug, Clone)]
pub struct RandomStep<R: Rng> {
    step: f64,
    rng: R,
}

impl<R: Rng> RandomStep<R> {
    /// Create a unit-step forecaster drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { step: 1.0, rng }
    }

    /// Use a step size other than 1.
    ///
    /// # Errors
    /// `InvalidParameter` unless `step` is finite and positive.
    pub fn with_step(mut self, step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(SignalError::invalid(format!(
                "step must be finite and positive, got {step}"
            )));
        }
        self.step = step;
        Ok(self)
    }

    /// The step size.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl<R: Rng> StepForecaster for RandomStep<R> {
    fn predict_next(&mut self, last: f64) -> f64 {
        if self.rng.gen::<f64>() < 0.5 {
            last - self.step
        } else {
            last + self.step
        }
    }

    fn name(&self) -> &str {
        "RandomStep"
    }
}
