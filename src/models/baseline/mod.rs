//! Baseline forecasting models.
//!
//! Simple methods that serve as benchmarks for more complex models.

mod persistence;
mod random_step;

pub use persistence::Persistence;
pub use random_step::RandomStep;
