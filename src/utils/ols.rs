//! Ordinary Least Squares (OLS) regression with an intercept.
//!
//! Used by the Augmented Dickey-Fuller test, which needs coefficient standard
//! errors as well as point estimates.

use crate::error::{Result, SignalError};

/// Fitted OLS regression `y = intercept + Σ coefficients[j] * columns[j]`.
#[derive(Debug, Clone)]
pub struct OlsFit {
    /// Intercept term.
    pub intercept: f64,
    /// Regression coefficients (one per regressor column).
    pub coefficients: Vec<f64>,
    /// Standard error of the intercept.
    pub intercept_std_error: f64,
    /// Standard errors of the coefficients, aligned with `coefficients`.
    pub std_errors: Vec<f64>,
    /// Residual sum of squares.
    pub rss: f64,
    /// Number of observations used.
    pub n_obs: usize,
}

impl OlsFit {
    /// t-ratio of coefficient `j`.
    pub fn t_stat(&self, j: usize) -> f64 {
        self.coefficients[j] / self.std_errors[j]
    }

    /// Number of estimated parameters including the intercept.
    pub fn num_params(&self) -> usize {
        self.coefficients.len() + 1
    }
}

/// Fit OLS regression with intercept.
///
/// Solves the normal equations with a Cholesky decomposition.
///
/// # Arguments
/// * `y` - Target values (length n)
/// * `columns` - Regressor columns (each length n)
///
/// # Errors
/// `DimensionMismatch` if a column length differs from `y`,
/// `InsufficientData` if there are not more observations than parameters,
/// `ComputationError` if the design matrix is rank deficient.
pub fn ols_fit(y: &[f64], columns: &[Vec<f64>]) -> Result<OlsFit> {
    let n = y.len();
    let k = columns.len();
    let num_params = k + 1;

    for col in columns {
        if col.len() != n {
            return Err(SignalError::DimensionMismatch {
                expected: n,
                got: col.len(),
            });
        }
    }

    if n <= num_params {
        return Err(SignalError::InsufficientData {
            needed: num_params + 1,
            got: n,
        });
    }

    // Design matrix row is [1, x1, x2, ...]
    let row = |obs: usize, j: usize| -> f64 {
        if j == 0 {
            1.0
        } else {
            columns[j - 1][obs]
        }
    };

    let mut xtx = vec![vec![0.0; num_params]; num_params];
    let mut xty = vec![0.0; num_params];

    for obs in 0..n {
        for i in 0..num_params {
            let xi = row(obs, i);
            xty[i] += xi * y[obs];
            for j in 0..=i {
                xtx[i][j] += xi * row(obs, j);
            }
        }
    }
    for i in 0..num_params {
        for j in (i + 1)..num_params {
            xtx[i][j] = xtx[j][i];
        }
    }

    let l = cholesky(&xtx).ok_or_else(|| {
        SignalError::ComputationError(
            "OLS regression failed: design matrix is rank deficient".into(),
        )
    })?;

    let beta = cholesky_solve(&l, &xty);

    let rss: f64 = (0..n)
        .map(|obs| {
            let fitted: f64 = (0..num_params).map(|j| beta[j] * row(obs, j)).sum();
            (y[obs] - fitted).powi(2)
        })
        .sum();

    let sigma_sq = rss / (n - num_params) as f64;

    // Diagonal of (X'X)^-1 via unit-vector solves
    let std_errors: Vec<f64> = (0..num_params)
        .map(|j| {
            let mut e = vec![0.0; num_params];
            e[j] = 1.0;
            let col = cholesky_solve(&l, &e);
            (sigma_sq * col[j]).sqrt()
        })
        .collect();

    Ok(OlsFit {
        intercept: beta[0],
        coefficients: beta[1..].to_vec(),
        intercept_std_error: std_errors[0],
        std_errors: std_errors[1..].to_vec(),
        rss,
        n_obs: n,
    })
}

/// Cholesky decomposition A = L @ L' of a symmetric positive definite matrix.
fn cholesky(a: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let n = a.len();
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                // Relative pivot check catches collinear columns
                if sum <= a[i][i] * 1e-12 || sum <= 0.0 {
                    return None;
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    Some(l)
}

/// Solve L @ L' @ x = b given the Cholesky factor L.
fn cholesky_solve(l: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let n = b.len();

    // Forward substitution: L @ y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * y[j];
        }
        y[i] = sum / l[i][i];
    }

    // Backward substitution: L' @ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    x
}
