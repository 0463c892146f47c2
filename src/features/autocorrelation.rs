//! Autocorrelation estimators.
//!
//! Provides the lag-1 Pearson estimator used to validate generated signals,
//! the classical autocorrelation function and a correlogram with white-noise
//! confidence bands.

use crate::error::{ensure_finite, Result, SignalError};
use crate::utils::stats::mean;

/// Standard normal quantile for a two-sided 95% band.
const Z_95: f64 = 1.959_963_984_540_054;
/// Standard normal quantile for a two-sided 99% band.
const Z_99: f64 = 2.575_829_303_548_900_4;

/// Pearson correlation coefficient between two equally long samples.
///
/// # Errors
/// * `DimensionMismatch` if the lengths differ
/// * `InvalidParameter` if there are fewer than two points, a value is not
///   finite, or either sample is constant
/// * `ComputationError` if the spread underflows to zero
///
/// # Example
/// ```
/// use anofox_signal::features::pearson_correlation;
///
/// let r = pearson_correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(SignalError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(SignalError::invalid(format!(
            "correlation needs at least 2 points, got {}",
            x.len()
        )));
    }
    ensure_finite(x, "x")?;
    ensure_finite(y, "y")?;

    let mx = mean(x);
    let my = mean(y);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&a, &b) in x.iter().zip(y.iter()) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if is_constant(x) || is_constant(y) {
        return Err(SignalError::invalid(
            "correlation is undefined for a constant sample",
        ));
    }

    let denom = sxx.sqrt() * syy.sqrt();
    if !(denom > 0.0 && denom.is_finite()) {
        return Err(SignalError::ComputationError(format!(
            "correlation denominator is not positive and finite: {denom}"
        )));
    }

    Ok((sxy / denom).clamp(-1.0, 1.0))
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}

/// Empirical lag-1 autocorrelation of a signal.
///
/// Computed as the Pearson correlation of `signal[..n-1]` against
/// `signal[1..]`, each half centred on its own mean.
///
/// # Errors
/// `InvalidParameter` if the signal has fewer than two samples, contains a
/// non-finite value, or is constant.
///
/// # Example
/// ```
/// use anofox_signal::features::lag1_autocorrelation;
///
/// let r = lag1_autocorrelation(&[1.0, -1.0, 1.0, -1.0, 1.0]).unwrap();
/// assert!((r + 1.0).abs() < 1e-12);
/// assert!(lag1_autocorrelation(&[5.0]).is_err());
/// ```
pub fn lag1_autocorrelation(signal: &[f64]) -> Result<f64> {
    if signal.len() < 2 {
        return Err(SignalError::invalid(format!(
            "lag-1 autocorrelation needs at least 2 samples, got {}",
            signal.len()
        )));
    }
    let n = signal.len();
    pearson_correlation(&signal[..n - 1], &signal[1..])
}

/// Returns the autocorrelation at a specific lag.
///
/// Uses the full-sample mean and variance:
/// `Σ_{t>=lag} (x[t] - m)(x[t-lag] - m) / Σ (x[t] - m)^2`.
///
/// Returns `NaN` when `series.len() <= lag`, `1.0` at lag 0 and `0.0` for a
/// constant series at positive lags.
pub fn autocorrelation(series: &[f64], lag: usize) -> f64 {
    if series.len() <= lag {
        return f64::NAN;
    }
    if lag == 0 {
        return 1.0;
    }

    let m = mean(series);

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (i, &x) in series.iter().enumerate() {
        denominator += (x - m).powi(2);
        if i >= lag {
            numerator += (x - m) * (series[i - lag] - m);
        }
    }

    if denominator < 1e-10 {
        return 0.0;
    }

    numerator / denominator
}

/// Two-sided confidence level of a white-noise band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// 95% band, `1.96 / sqrt(n)`.
    P95,
    /// 99% band, `2.576 / sqrt(n)`.
    P99,
}

/// Autocorrelation by lag with white-noise confidence bands.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlogram {
    /// Lags, starting at 1.
    pub lags: Vec<usize>,
    /// Autocorrelation at each lag.
    pub acf: Vec<f64>,
    /// Number of observations the estimates are based on.
    pub n_obs: usize,
    /// Half-width of the 95% band.
    pub band_95: f64,
    /// Half-width of the 99% band.
    pub band_99: f64,
}

impl Correlogram {
    /// Half-width of the band at the given level.
    pub fn band(&self, level: Confidence) -> f64 {
        match level {
            Confidence::P95 => self.band_95,
            Confidence::P99 => self.band_99,
        }
    }

    /// Lags whose autocorrelation lies outside the band at `level`.
    pub fn significant_lags(&self, level: Confidence) -> Vec<usize> {
        let band = self.band(level);
        self.lags
            .iter()
            .zip(self.acf.iter())
            .filter(|(_, r)| r.abs() > band)
            .map(|(&lag, _)| lag)
            .collect()
    }
}

/// Compute the correlogram of a series for lags `1..=max_lag`.
///
/// `max_lag` defaults to `n - 1`. Under the white-noise hypothesis each
/// estimate is approximately `N(0, 1/n)`, which gives the band widths.
///
/// # Errors
/// * `InsufficientData` if the series has fewer than two samples
/// * `InvalidParameter` if `max_lag` is 0 or not below the series length, or
///   the series contains a non-finite value
///
/// # Example
/// ```
/// use anofox_signal::features::{correlogram, Confidence};
///
/// let series: Vec<f64> = (0..100).map(|i| (i as f64 * 0.3).sin()).collect();
/// let acf = correlogram(&series, Some(20)).unwrap();
///
/// assert_eq!(acf.lags.len(), 20);
/// assert!(acf.significant_lags(Confidence::P95).contains(&1));
/// ```
pub fn correlogram(series: &[f64], max_lag: Option<usize>) -> Result<Correlogram> {
    let n = series.len();
    if n < 2 {
        return Err(SignalError::InsufficientData { needed: 2, got: n });
    }
    ensure_finite(series, "series")?;

    let max_lag = max_lag.unwrap_or(n - 1);
    if max_lag == 0 || max_lag >= n {
        return Err(SignalError::invalid(format!(
            "max_lag must lie in 1..{n}, got {max_lag}"
        )));
    }

    let lags: Vec<usize> = (1..=max_lag).collect();
    let acf: Vec<f64> = lags.iter().map(|&lag| autocorrelation(series, lag)).collect();

    let root_n = (n as f64).sqrt();

    Ok(Correlogram {
        lags,
        acf,
        n_obs: n,
        band_95: Z_95 / root_n,
        band_99: Z_99 / root_n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_signal;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, StandardNormal};

    fn white_noise(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                let z: f64 = StandardNormal.sample(&mut rng);
                z
            })
            .collect()
    }

    // ==================== pearson_correlation ====================

    #[test]
    fn pearson_known_value() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn pearson_is_symmetric_and_scale_free() {
        let x = [0.3, 1.7, -2.0, 4.1, 0.0, 2.2];
        let y = [1.0, 0.5, -1.5, 3.0, 0.7, 1.1];
        let r_xy = pearson_correlation(&x, &y).unwrap();
        let r_yx = pearson_correlation(&y, &x).unwrap();
        assert_relative_eq!(r_xy, r_yx, epsilon = 1e-12);

        let scaled: Vec<f64> = y.iter().map(|v| 10.0 * v - 3.0).collect();
        assert_relative_eq!(pearson_correlation(&x, &scaled).unwrap(), r_xy, epsilon = 1e-12);
    }

    #[test]
    fn pearson_rejects_mismatched_lengths() {
        assert_eq!(
            pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
            Err(SignalError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn pearson_rejects_constant_sample() {
        assert!(matches!(
            pearson_correlation(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]),
            Err(SignalError::InvalidParameter(_))
        ));
        // Rounding residue from an inexact mean must not look like variance
        let tenths = vec![0.1; 10];
        let ramp: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        assert!(pearson_correlation(&tenths, &ramp).is_err());
    }

    #[test]
    fn pearson_accepts_small_spread_around_large_offset() {
        let x = [1e10, 1e10 + 0.5, 1e10 + 1.0, 1e10 + 1.5];
        let y = [0.0, 1.0, 2.0, 3.0];
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    // ==================== lag1_autocorrelation ====================

    #[test]
    fn lag1_linear_trend_is_one() {
        let series: Vec<f64> = (0..50).map(|i| i as f64).collect();
        assert_relative_eq!(lag1_autocorrelation(&series).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn lag1_alternating_is_minus_one() {
        let series: Vec<f64> = (0..20).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        assert_relative_eq!(lag1_autocorrelation(&series).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn lag1_two_samples_is_degenerate() {
        // Each shifted half holds a single point
        assert!(matches!(
            lag1_autocorrelation(&[1.0, 2.0]),
            Err(SignalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn lag1_rejects_short_input() {
        assert!(matches!(
            lag1_autocorrelation(&[]),
            Err(SignalError::InvalidParameter(_))
        ));
        assert!(matches!(
            lag1_autocorrelation(&[5.0]),
            Err(SignalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn lag1_rejects_constant_signal() {
        assert!(matches!(
            lag1_autocorrelation(&[3.0; 100]),
            Err(SignalError::InvalidParameter(_))
        ));
    }

    #[test]
    fn lag1_small_spread_around_large_offset() {
        let mut rng = StdRng::seed_from_u64(1);
        let signal = crate::generators::Ar1Config::new(0.5)
            .with_mean(1e10)
            .with_std_dev(0.5)
            .with_initial_draw(crate::generators::InitialDraw::Stationary)
            .sample(5000, &mut rng)
            .unwrap();

        let r = lag1_autocorrelation(&signal).unwrap();
        // sd ~= sqrt((1 - 0.25) / 5000) ~= 0.012
        assert!((r - 0.5).abs() < 0.06, "lag-1 = {r}");
    }

    #[test]
    fn lag1_rejects_non_finite_samples() {
        assert!(lag1_autocorrelation(&[1.0, f64::NAN, 2.0, 3.0]).is_err());
        assert!(lag1_autocorrelation(&[1.0, 2.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn lag1_white_noise_is_near_zero() {
        let noise = white_noise(4000, 21);
        let r = lag1_autocorrelation(&noise).unwrap();
        // sd ~= 1 / sqrt(4000) ~= 0.016
        assert!(r.abs() < 0.08, "lag-1 = {r}");
    }

    // ==================== autocorrelation ====================

    #[test]
    fn autocorrelation_lag_0() {
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(autocorrelation(&series, 0), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn autocorrelation_known_value() {
        // m = 3, deviations -2..2, denominator 10
        // lag 1 numerator: (-1)(-2) + 0 + 1*0 + 2*1 = 4
        let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(autocorrelation(&series, 1), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn autocorrelation_constant() {
        let series = vec![5.0; 10];
        assert_relative_eq!(autocorrelation(&series, 1), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn autocorrelation_short() {
        assert!(autocorrelation(&[], 1).is_nan());
        assert!(autocorrelation(&[1.0], 1).is_nan());
        assert!(autocorrelation(&[1.0, 2.0], 5).is_nan());
    }

    // ==================== correlogram ====================

    #[test]
    fn correlogram_bands_scale_with_length() {
        let noise = white_noise(400, 1);
        let acf = correlogram(&noise, Some(10)).unwrap();
        assert_eq!(acf.n_obs, 400);
        assert_eq!(acf.lags, (1..=10).collect::<Vec<_>>());
        assert_relative_eq!(acf.band_95, Z_95 / 20.0, epsilon = 1e-12);
        assert_relative_eq!(acf.band_99, Z_99 / 20.0, epsilon = 1e-12);
        assert!(acf.band(Confidence::P99) > acf.band(Confidence::P95));
    }

    #[test]
    fn correlogram_defaults_to_all_lags() {
        let series: Vec<f64> = (0..12).map(|i| (i * i) as f64).collect();
        let acf = correlogram(&series, None).unwrap();
        assert_eq!(acf.lags.len(), 11);
        assert_eq!(*acf.lags.last().unwrap(), 11);
    }

    #[test]
    fn correlogram_white_noise_has_few_significant_lags() {
        let noise = white_noise(1000, 2);
        let acf = correlogram(&noise, Some(40)).unwrap();
        // Expect about 2 of 40 lags outside the 95% band
        assert!(acf.significant_lags(Confidence::P95).len() <= 8);
    }

    #[test]
    fn correlogram_ar1_decays_geometrically() {
        let mut rng = StdRng::seed_from_u64(3);
        let signal = generate_signal(5000, 0.75, 0.0, 1.0, &mut rng).unwrap();
        let acf = correlogram(&signal, Some(5)).unwrap();

        let significant = acf.significant_lags(Confidence::P99);
        assert!(significant.contains(&1));
        assert!(significant.contains(&2));
        // rho(k) = 0.75^k
        for (k, r) in acf.lags.iter().zip(acf.acf.iter()) {
            let expected = 0.75_f64.powi(*k as i32);
            assert!((r - expected).abs() < 0.1, "lag {k}: {r} vs {expected}");
        }
    }

    #[test]
    fn correlogram_rejects_invalid_arguments() {
        assert_eq!(
            correlogram(&[1.0], None),
            Err(SignalError::InsufficientData { needed: 2, got: 1 })
        );
        assert!(matches!(
            correlogram(&[1.0, 2.0, 3.0], Some(0)),
            Err(SignalError::InvalidParameter(_))
        ));
        assert!(matches!(
            correlogram(&[1.0, 2.0, 3.0], Some(3)),
            Err(SignalError::InvalidParameter(_))
        ));
        assert!(correlogram(&[1.0, f64::NAN, 3.0], None).is_err());
    }
}
