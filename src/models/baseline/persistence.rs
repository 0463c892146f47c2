//! Persistence (naive) forecast.
//!
//! Forecasts the last observed value. For a random walk this is the best
//! available predictor, which makes it the reference any other model has to
//! beat.

use crate::models::StepForecaster;

/// Forecaster that repeats the last observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Persistence;

impl Persistence {
    /// Create a persistence forecaster.
    pub fn new() -> Self {
        Self
    }
}

impl StepForecaster for Persistence {
    fn predict_next(&mut self, last: f64) -> f64 {
        last
    }

    fn name(&self) -> &str {
        "Persistence"
    }
}
