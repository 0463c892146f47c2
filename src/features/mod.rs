//! Serial-correlation features of a signal.
//!
//! # Example
//!
//! ```
//! use anofox_signal::features::{autocorrelation, lag1_autocorrelation};
//!
//! let series = vec![1.0, 3.0, 2.0, 5.0, 4.0, 6.0, 5.5, 7.0];
//!
//! let r1 = lag1_autocorrelation(&series).unwrap();
//! let acf1 = autocorrelation(&series, 1);
//! assert!(r1 > 0.0 && acf1 > 0.0);
//! ```

pub mod autocorrelation;

pub use autocorrelation::{
    autocorrelation, correlogram, lag1_autocorrelation, pearson_correlation, Confidence,
    Correlogram,
};
