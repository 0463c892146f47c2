//! Utility functions shared by the generators, tests and baselines.

pub mod metrics;
pub mod ols;
pub mod stats;

pub use metrics::{calculate_metrics, mse, AccuracyMetrics};
pub use ols::{ols_fit, OlsFit};
pub use stats::{mean, population_std_dev, population_variance, std_dev, variance};
