//! Calibrated first-order autoregressive (AR(1)) signal generator.
//!
//! Produces a sequence whose stationary distribution has a prescribed mean,
//! standard deviation and lag-1 autocorrelation. The recurrence is
//!
//! ```text
//! x[t] = c + phi * x[t-1] + e[t],   e[t] ~ N(0, sigma_e^2)
//! ```
//!
//! with the closed-form calibration `c = mu * (1 - phi)` and
//! `sigma_e = sqrt(sigma^2 * (1 - phi^2))`, so that the stationary variance
//! `sigma_e^2 / (1 - phi^2)` equals `sigma^2`.
//!
//! # Example
//!
//! ```
//! use anofox_signal::features::lag1_autocorrelation;
//! use anofox_signal::generators::generate_signal;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let signal = generate_signal(5000, 0.75, 2.0, 3.0, &mut rng).unwrap();
//!
//! assert_eq!(signal.len(), 5000);
//! let r1 = lag1_autocorrelation(&signal).unwrap();
//! assert!((r1 - 0.75).abs() < 0.05);
//! ```

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Result, SignalError};

/// How the first sample of the recurrence is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InitialDraw {
    /// Draw `x[0]` from `N(c, sigma_e)`.
    ///
    /// The series starts near the drift offset rather than the target mean,
    /// so the first few samples carry a transient that decays at rate `phi`.
    #[default]
    Innovation,
    /// Draw `x[0]` from the stationary distribution `N(mu, sigma)`.
    Stationary,
}

/// Recurrence constants derived from the target moments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ar1Calibration {
    lag1_corr: f64,
    mean: f64,
    std_dev: f64,
    offset: f64,
    noise_scale: f64,
}

impl Ar1Calibration {
    /// Derive the drift offset and innovation scale for the given targets.
    ///
    /// # Errors
    /// `InvalidParameter` unless `0 < lag1_corr < 1`, `std_dev > 0` and
    /// `mean` is finite.
    pub fn new(lag1_corr: f64, mean: f64, std_dev: f64) -> Result<Self> {
        if !(lag1_corr > 0.0 && lag1_corr < 1.0) {
            return Err(SignalError::invalid(format!(
                "lag1_corr must lie strictly between 0 and 1, got {lag1_corr}"
            )));
        }
        if !mean.is_finite() {
            return Err(SignalError::invalid(format!(
                "mean must be finite, got {mean}"
            )));
        }
        if !(std_dev.is_finite() && std_dev > 0.0) {
            return Err(SignalError::invalid(format!(
                "std_dev must be finite and positive, got {std_dev}"
            )));
        }

        let offset = mean * (1.0 - lag1_corr);
        let noise_scale = std_dev * (1.0 - lag1_corr.powi(2)).sqrt();

        Ok(Self {
            lag1_corr,
            mean,
            std_dev,
            offset,
            noise_scale,
        })
    }

    /// Target lag-1 autocorrelation (the AR coefficient).
    pub fn lag1_corr(&self) -> f64 {
        self.lag1_corr
    }

    /// Target stationary mean.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Target stationary standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Additive drift term `c`.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Standard deviation of the per-step innovation.
    pub fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// Variance of the stationary distribution implied by the constants.
    pub fn stationary_variance(&self) -> f64 {
        self.noise_scale.powi(2) / (1.0 - self.lag1_corr.powi(2))
    }
}

/// Configuration for the calibrated AR(1) generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Ar1Config {
    /// Desired lag-1 autocorrelation, in (0, 1).
    pub lag1_corr: f64,
    /// Desired stationary mean.
    pub mean: f64,
    /// Desired stationary standard deviation, > 0.
    pub std_dev: f64,
    /// Distribution of the first sample.
    pub initial_draw: InitialDraw,
}

impl Ar1Config {
    /// Create a config with mean 0, standard deviation 1 and the
    /// [`InitialDraw::Innovation`] warm-up.
    pub fn new(lag1_corr: f64) -> Self {
        Self {
            lag1_corr,
            mean: 0.0,
            std_dev: 1.0,
            initial_draw: InitialDraw::default(),
        }
    }

    /// Set the target mean.
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    /// Set the target standard deviation.
    pub fn with_std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = std_dev;
        self
    }

    /// Set how the first sample is drawn.
    pub fn with_initial_draw(mut self, initial_draw: InitialDraw) -> Self {
        self.initial_draw = initial_draw;
        self
    }

    /// Validate the targets and derive the recurrence constants.
    pub fn calibrate(&self) -> Result<Ar1Calibration> {
        Ar1Calibration::new(self.lag1_corr, self.mean, self.std_dev)
    }

    /// Sample `n_samples` values of the process.
    ///
    /// All parameters are validated before anything is drawn from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, n_samples: usize, rng: &mut R) -> Result<Vec<f64>> {
        if n_samples == 0 {
            return Err(SignalError::invalid("n_samples must be positive"));
        }
        let cal = self.calibrate()?;

        let innovation = Normal::new(0.0, cal.noise_scale())
            .map_err(|e| SignalError::invalid(e.to_string()))?;

        tracing::debug!(
            "AR(1) calibration: phi={}, c={:.6}, sigma_e={:.6}, n={}, initial={:?}",
            cal.lag1_corr(),
            cal.offset(),
            cal.noise_scale(),
            n_samples,
            self.initial_draw
        );

        let first = match self.initial_draw {
            InitialDraw::Innovation => cal.offset() + innovation.sample(rng),
            InitialDraw::Stationary => {
                let stationary = Normal::new(cal.mean(), cal.std_dev())
                    .map_err(|e| SignalError::invalid(e.to_string()))?;
                stationary.sample(rng)
            }
        };

        let mut signal = Vec::with_capacity(n_samples);
        signal.push(first);

        let mut prev = first;
        for _ in 1..n_samples {
            let next = cal.offset() + cal.lag1_corr() * prev + innovation.sample(rng);
            signal.push(next);
            prev = next;
        }

        Ok(signal)
    }
}

/// Generate an AR(1) signal with the given lag-1 autocorrelation, mean and
/// standard deviation.
///
/// Uses the [`InitialDraw::Innovation`] warm-up. See [`Ar1Config`] to choose
/// a stationary first draw instead.
///
/// # Arguments
/// * `n_samples` - Length of the output, >= 1
/// * `lag1_corr` - Desired lag-1 autocorrelation, strictly in (0, 1)
/// * `mean` - Desired stationary mean
/// * `std_dev` - Desired stationary standard deviation, > 0
/// * `rng` - Random source
///
/// # Errors
/// `InvalidParameter` for any out-of-range argument; nothing is drawn from
/// `rng` in that case.
pub fn generate_signal<R: Rng + ?Sized>(
    n_samples: usize,
    lag1_corr: f64,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    Ar1Config::new(lag1_corr)
        .with_mean(mean)
        .with_std_dev(std_dev)
        .sample(n_samples, rng)
}
