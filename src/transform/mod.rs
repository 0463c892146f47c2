//! Data transformations for time series.

pub mod diff;

pub use diff::difference;
