//! Statistical tests for generated and observed series.
//!
//! # Example
//!
//! ```
//! use anofox_signal::generators::random_walk;
//! use anofox_signal::transform::difference;
//! use anofox_signal::validation::{adf_test, ljung_box, AdfConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let walk = random_walk(500, &mut rng).unwrap();
//!
//! let adf = adf_test(&walk, &AdfConfig::default()).unwrap();
//! println!("ADF statistic {:.3}, p-value {:.3}", adf.statistic, adf.p_value);
//!
//! let steps = difference(&walk, 1).unwrap();
//! let lb = ljung_box(&steps, Some(10)).unwrap();
//! println!("Ljung-Box Q {:.3}, p-value {:.3}", lb.statistic, lb.p_value);
//! ```

pub mod stationarity;
pub mod white_noise;

pub use stationarity::{adf_test, AdfConfig, AdfResult, CriticalValues};
pub use white_noise::{ljung_box, LjungBoxResult};
