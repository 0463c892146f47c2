//! One-step forecasting baselines and walk-forward evaluation.

mod traits;

pub mod baseline;
pub mod walk_forward;

pub use baseline::{Persistence, RandomStep};
pub use traits::StepForecaster;
pub use walk_forward::{evaluate, train_test_split, walk_forward, WalkForwardResult};
