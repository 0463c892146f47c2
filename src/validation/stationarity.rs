//! Augmented Dickey-Fuller unit-root test.
//!
//! Tests the null hypothesis that a series has a unit root (is not
//! stationary) against the alternative of a stationary AR process. The test
//! regression includes a constant:
//!
//! ```text
//! Δy[t] = α + β y[t-1] + Σ_{i=1..p} γ_i Δy[t-i] + ε[t]
//! ```
//!
//! and the statistic is the t-ratio of `β`. Under the null it follows the
//! Dickey-Fuller distribution, approximated here by the MacKinnon response
//! surfaces.

use statrs::function::erf::erfc;

use crate::error::{ensure_finite, Result, SignalError};
use crate::utils::ols::ols_fit;

/// Smallest series the test accepts.
const MIN_OBS: usize = 6;

/// Critical values at common significance levels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CriticalValues {
    /// Critical value at 1% significance
    pub cv_1pct: f64,
    /// Critical value at 5% significance
    pub cv_5pct: f64,
    /// Critical value at 10% significance
    pub cv_10pct: f64,
}

/// Configuration for [`adf_test`].
#[derive(Debug, Clone, PartialEq)]
pub struct AdfConfig {
    /// Largest number of lagged differences. Defaults to
    /// `ceil(12 * (n/100)^(1/4))`, capped at `n/2 - 2`.
    pub max_lags: Option<usize>,
    /// Choose the lag order in `0..=max_lags` by AIC. When false the test
    /// uses `max_lags` lagged differences.
    pub autolag: bool,
}

impl Default for AdfConfig {
    fn default() -> Self {
        Self {
            max_lags: None,
            autolag: true,
        }
    }
}

impl AdfConfig {
    /// Default lag bound with AIC selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest number of lagged differences.
    pub fn with_max_lags(mut self, max_lags: usize) -> Self {
        self.max_lags = Some(max_lags);
        self
    }

    /// Enable or disable AIC lag selection.
    pub fn with_autolag(mut self, autolag: bool) -> Self {
        self.autolag = autolag;
        self
    }
}

/// Result of the Augmented Dickey-Fuller test.
#[derive(Debug, Clone)]
pub struct AdfResult {
    /// Test statistic (t-ratio of the lagged level)
    pub statistic: f64,
    /// MacKinnon approximate p-value
    pub p_value: f64,
    /// Number of lagged differences in the final regression
    pub used_lag: usize,
    /// Number of observations in the final regression
    pub n_obs: usize,
    /// Critical values for `n_obs`
    pub critical_values: CriticalValues,
    /// Best AIC of the lag search (None without autolag)
    pub aic: Option<f64>,
}

impl AdfResult {
    /// True if the unit-root null is rejected at significance `alpha`.
    pub fn is_stationary(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Augmented Dickey-Fuller test with constant.
///
/// # Arguments
/// * `series` - Time series data
/// * `config` - Lag configuration
///
/// # Errors
/// * `InsufficientData` for fewer than 6 observations
/// * `InvalidParameter` for non-finite input or a `max_lags` above `n/2 - 2`
/// * `ComputationError` if the regression is singular (e.g. constant input)
///
/// # Example
/// ```
/// use anofox_signal::generators::random_walk;
/// use anofox_signal::transform::difference;
/// use anofox_signal::validation::{adf_test, AdfConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let walk = random_walk(1000, &mut rng).unwrap();
/// let steps = difference(&walk, 1).unwrap();
///
/// let result = adf_test(&steps, &AdfConfig::default()).unwrap();
/// assert!(result.is_stationary(0.01));
/// ```
pub fn adf_test(series: &[f64], config: &AdfConfig) -> Result<AdfResult> {
    let n = series.len();
    if n < MIN_OBS {
        return Err(SignalError::InsufficientData {
            needed: MIN_OBS,
            got: n,
        });
    }
    ensure_finite(series, "series")?;

    let lag_cap = n / 2 - 2;
    let max_lags = match config.max_lags {
        Some(lags) if lags > lag_cap => {
            return Err(SignalError::invalid(format!(
                "max_lags must not exceed {lag_cap} for {n} observations, got {lags}"
            )));
        }
        Some(lags) => lags,
        None => default_max_lags(n).min(lag_cap),
    };

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();

    let (used_lag, aic) = if config.autolag {
        let (lag, aic) = select_lag_aic(series, &diff, max_lags)?;
        (lag, Some(aic))
    } else {
        (max_lags, None)
    };

    // Final regression on the longest sample the chosen lag allows
    let (y, columns) = adf_design(series, &diff, used_lag, used_lag);
    let fit = ols_fit(&y, &columns)?;
    let statistic = fit.t_stat(0);

    if !statistic.is_finite() {
        return Err(SignalError::ComputationError(
            "ADF regression produced a non-finite statistic".into(),
        ));
    }

    let n_obs = fit.n_obs;
    let p_value = mackinnon_p_value(statistic);
    let critical_values = mackinnon_critical_values(n_obs);

    tracing::debug!(
        "ADF: statistic={:.4}, p={:.4}, used_lag={}, n_obs={}",
        statistic,
        p_value,
        used_lag,
        n_obs
    );

    Ok(AdfResult {
        statistic,
        p_value,
        used_lag,
        n_obs,
        critical_values,
        aic,
    })
}

/// Schwert's rule `ceil(12 * (n/100)^(1/4))`.
fn default_max_lags(n: usize) -> usize {
    (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize
}

/// Build the regression for `lags` lagged differences, using rows from
/// `start` on. `start >= lags` keeps the sample common across lag orders.
///
/// Columns are `[y[t-1], Δy[t-1], ..., Δy[t-lags]]`; the intercept is added
/// by the solver.
fn adf_design(level: &[f64], diff: &[f64], lags: usize, start: usize) -> (Vec<f64>, Vec<Vec<f64>>) {
    let m = diff.len();
    let y = diff[start..m].to_vec();

    let mut columns = Vec::with_capacity(lags + 1);
    columns.push(level[start..m].to_vec());
    for j in 1..=lags {
        columns.push(diff[start - j..m - j].to_vec());
    }

    (y, columns)
}

/// Select lag order by AIC over a common sample.
fn select_lag_aic(level: &[f64], diff: &[f64], max_lags: usize) -> Result<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for lags in 0..=max_lags {
        let (y, columns) = adf_design(level, diff, lags, max_lags);
        let fit = ols_fit(&y, &columns)?;

        let n = fit.n_obs as f64;
        let k = fit.num_params() as f64;
        let log_lik = -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + (fit.rss / n).ln() + 1.0);
        let aic = -2.0 * log_lik + 2.0 * k;

        if best.map_or(true, |(_, b)| aic < b) {
            best = Some((lags, aic));
        }
    }

    let (lag, aic) = best.ok_or_else(|| {
        SignalError::ComputationError("ADF lag search evaluated no candidates".into())
    })?;

    tracing::debug!("ADF lag search: max_lags={}, chosen={}, aic={:.4}", max_lags, lag, aic);

    Ok((lag, aic))
}

fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// MacKinnon (1994) approximate p-value, constant-only regression, one
/// series.
fn mackinnon_p_value(statistic: f64) -> f64 {
    const TAU_MAX: f64 = 2.74;
    const TAU_MIN: f64 = -18.83;
    const TAU_STAR: f64 = -1.61;
    const SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
    const LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

    if statistic > TAU_MAX {
        return 1.0;
    }
    if statistic < TAU_MIN {
        return 0.0;
    }

    let coefs: &[f64] = if statistic <= TAU_STAR {
        &SMALL_P
    } else {
        &LARGE_P
    };
    let z = coefs.iter().rev().fold(0.0, |acc, c| acc * statistic + c);

    standard_normal_cdf(z)
}

/// MacKinnon (2010) finite-sample critical values, constant-only regression.
fn mackinnon_critical_values(n_obs: usize) -> CriticalValues {
    const TAU_1PCT: [f64; 4] = [-3.43035, -6.5393, -16.786, -79.433];
    const TAU_5PCT: [f64; 4] = [-2.86154, -2.8903, -4.234, -40.040];
    const TAU_10PCT: [f64; 4] = [-2.56677, -1.5384, -2.809, 0.0];

    let inv = 1.0 / n_obs as f64;
    let surface = |b: &[f64; 4]| b.iter().rev().fold(0.0, |acc, c| acc * inv + c);

    CriticalValues {
        cv_1pct: surface(&TAU_1PCT),
        cv_5pct: surface(&TAU_5PCT),
        cv_10pct: surface(&TAU_10PCT),
    }
}
