//! Portmanteau test for serial correlation.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::{ensure_finite, Result, SignalError};
use crate::features::autocorrelation;

/// Ljung-Box test result.
#[derive(Debug, Clone)]
pub struct LjungBoxResult {
    /// Test statistic Q
    pub statistic: f64,
    /// P-value from the chi-squared distribution
    pub p_value: f64,
    /// Number of lags tested (also the degrees of freedom)
    pub lags: usize,
}

impl LjungBoxResult {
    /// Check if the series passes at given significance level.
    /// Returns true if we fail to reject null (series is white noise).
    pub fn is_white_noise(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

/// Perform the Ljung-Box test.
///
/// Tests null hypothesis that the series is independently distributed:
/// `Q = n (n + 2) Σ_{k=1..h} r_k^2 / (n - k)`, compared against a
/// chi-squared distribution with `h` degrees of freedom.
///
/// # Arguments
/// * `series` - Data to test
/// * `lags` - Number of lags `h` (default: min(10, n/5), at least 1)
///
/// # Errors
/// `InsufficientData` for fewer than 3 values, `InvalidParameter` when
/// `lags` is 0 or not below the series length, or the series contains a
/// non-finite value.
pub fn ljung_box(series: &[f64], lags: Option<usize>) -> Result<LjungBoxResult> {
    let n = series.len();
    if n < 3 {
        return Err(SignalError::InsufficientData { needed: 3, got: n });
    }
    ensure_finite(series, "series")?;

    let lags = lags.unwrap_or_else(|| 10.min(n / 5).max(1));
    if lags == 0 || lags >= n {
        return Err(SignalError::invalid(format!(
            "lags must lie in 1..{n}, got {lags}"
        )));
    }

    let mut q = 0.0;
    for k in 1..=lags {
        let r = autocorrelation(series, k);
        q += r * r / (n - k) as f64;
    }
    q *= n as f64 * (n + 2) as f64;

    let chi2 = ChiSquared::new(lags as f64)
        .map_err(|e| SignalError::ComputationError(e.to_string()))?;
    let p_value = chi2.sf(q);

    Ok(LjungBoxResult {
        statistic: q,
        p_value,
        lags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{generate_signal, random_walk};
    use crate::transform::difference;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ljung_box_differenced_walk_is_white_noise() {
        let mut rng = StdRng::seed_from_u64(1);
        let walk = random_walk(1000, &mut rng).unwrap();
        let steps = difference(&walk, 1).unwrap();

        let result = ljung_box(&steps, None).unwrap();

        assert_eq!(result.lags, 10);
        // Q ~ chi2(10) under the null; a false alarm at 0.1% is very rare
        assert!(result.is_white_noise(0.001), "p = {}", result.p_value);
    }

    #[test]
    fn ljung_box_detects_ar1_dependence() {
        let mut rng = StdRng::seed_from_u64(2);
        let signal = generate_signal(500, 0.75, 0.0, 1.0, &mut rng).unwrap();

        let result = ljung_box(&signal, Some(5)).unwrap();

        assert!(result.statistic > 100.0);
        assert!(!result.is_white_noise(0.05));
    }

    #[test]
    fn ljung_box_constant_series_has_zero_statistic() {
        let result = ljung_box(&[4.0; 20], Some(3)).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ljung_box_default_lags() {
        let series: Vec<f64> = (0..30).map(|i| ((i * 7) % 11) as f64).collect();
        assert_eq!(ljung_box(&series, None).unwrap().lags, 6);
    }

    #[test]
    fn ljung_box_rejects_invalid_arguments() {
        assert_eq!(
            ljung_box(&[1.0, 2.0], None).unwrap_err(),
            SignalError::InsufficientData { needed: 3, got: 2 }
        );
        assert!(ljung_box(&[1.0, 2.0, 3.0], Some(0)).is_err());
        assert!(ljung_box(&[1.0, 2.0, 3.0], Some(3)).is_err());
        assert!(ljung_box(&[1.0, f64::NAN, 3.0], None).is_err());
    }
}
