//! Error types for the anofox-signal library.

use thiserror::Error;

/// Result type alias for signal operations.
pub type Result<T> = std::result::Result<T, SignalError>;

/// Errors that can occur while generating or analysing signals.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between paired inputs.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Computation error (e.g., singular regression).
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl SignalError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SignalError::InvalidParameter(msg.into())
    }
}

/// Fails with `InvalidParameter` if any value is NaN or infinite.
pub(crate) fn ensure_finite(series: &[f64], what: &str) -> Result<()> {
    match series.iter().position(|x| !x.is_finite()) {
        Some(i) => Err(SignalError::invalid(format!(
            "{what} contains a non-finite value at index {i}"
        ))),
        None => Ok(()),
    }
}
