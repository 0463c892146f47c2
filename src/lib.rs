//! # anofox-signal
//!
//! Synthetic time series with controlled serial dependence, and the
//! diagnostics to check them.
//!
//! The centre of the crate is a first-order autoregressive generator
//! calibrated in closed form, so that its output has a prescribed mean,
//! standard deviation and lag-1 autocorrelation. Around it sit a ±1 random
//! walk and uniform noise for contrast, a sine-wave table, autocorrelation
//! estimators, differencing, the Augmented Dickey-Fuller and Ljung-Box
//! tests, and persistence baselines with walk-forward evaluation.
//!
//! All sampling takes an explicit random source, so a seeded generator
//! reproduces every sequence exactly.
//!
//! # Example
//!
//! ```
//! use anofox_signal::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let signal = generate_signal(5000, 0.75, 2.0, 3.0, &mut rng)?;
//!
//! let r1 = lag1_autocorrelation(&signal)?;
//! assert!((r1 - 0.75).abs() < 0.05);
//! # Ok::<(), SignalError>(())
//! ```

#![allow(clippy::needless_range_loop)]

pub mod error;
pub mod features;
pub mod generators;
pub mod models;
pub mod transform;
pub mod utils;
pub mod validation;

pub use error::{Result, SignalError};

pub mod prelude {
    pub use crate::error::{Result, SignalError};
    pub use crate::features::{correlogram, lag1_autocorrelation, Confidence, Correlogram};
    pub use crate::generators::{
        generate_signal, random_walk, sine_wave, Ar1Config, InitialDraw, RandomWalkConfig,
    };
    pub use crate::models::{evaluate, train_test_split, Persistence, RandomStep, StepForecaster};
    pub use crate::transform::difference;
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
    pub use crate::validation::{adf_test, ljung_box, AdfConfig};
}
