//! Core trait for one-step-ahead forecasting models.

/// A model that forecasts the next observation from the most recent one.
///
/// Walk-forward evaluation feeds the forecaster one observation at a time,
/// so implementations may keep internal state (a random source, a running
/// estimate) between calls.
pub trait StepForecaster {
    /// Forecast the next value given the last observed value.
    fn predict_next(&mut self, last: f64) -> f64;

    /// Get the model name.
    fn name(&self) -> &str;
}

impl<F: StepForecaster + ?Sized> StepForecaster for Box<F> {
    fn predict_next(&mut self, last: f64) -> f64 {
        (**self).predict_next(last)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubling;

    impl StepForecaster for Doubling {
        fn predict_next(&mut self, last: f64) -> f64 {
            2.0 * last
        }

        fn name(&self) -> &str {
            "Doubling"
        }
    }

    #[test]
    fn boxed_forecaster_delegates() {
        let mut model: Box<dyn StepForecaster> = Box::new(Doubling);
        assert_eq!(model.predict_next(3.0), 6.0);
        assert_eq!(model.name(), "Doubling");
    }
}
