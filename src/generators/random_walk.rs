//! Discrete random walk and uniform integer noise.
//!
//! The random walk moves up or down by a fixed step with equal probability,
//! so it has a unit root and is not stationary. Uniform integer draws serve
//! as the independent, stationary contrast.

use rand::Rng;

use crate::error::{Result, SignalError};

/// Configuration for a symmetric ±step random walk.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalkConfig {
    /// Value of the first sample.
    pub start: f64,
    /// Absolute size of each move, > 0.
    pub step: f64,
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            step: 1.0,
        }
    }
}

impl RandomWalkConfig {
    /// Create a walk starting at `start` with unit steps.
    pub fn new(start: f64) -> Self {
        Self {
            start,
            ..Default::default()
        }
    }

    /// Set the step size.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sample `n` values of the walk, beginning with `start`.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>> {
        if n == 0 {
            return Err(SignalError::invalid("random walk length must be positive"));
        }
        if !self.start.is_finite() {
            return Err(SignalError::invalid(format!(
                "start must be finite, got {}",
                self.start
            )));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SignalError::invalid(format!(
                "step must be finite and positive, got {}",
                self.step
            )));
        }

        let mut walk = Vec::with_capacity(n);
        let mut value = self.start;
        walk.push(value);

        for _ in 1..n {
            let movement = if rng.gen::<f64>() < 0.5 {
                -self.step
            } else {
                self.step
            };
            value += movement;
            walk.push(value);
        }

        Ok(walk)
    }
}

/// Sample a ±1 random walk of length `n` starting at zero.
///
/// # Example
/// ```
/// use anofox_signal::generators::random_walk;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let walk = random_walk(1000, &mut rng).unwrap();
///
/// assert_eq!(walk[0], 0.0);
/// assert!(walk.windows(2).all(|w| (w[1] - w[0]).abs() == 1.0));
/// ```
pub fn random_walk<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<f64>> {
    RandomWalkConfig::default().sample(n, rng)
}

/// Draw `n` independent integers uniformly from `0..upper`, as floats.
///
/// # Errors
/// `InvalidParameter` when `n == 0` or `upper == 0`.
pub fn uniform_integers<R: Rng + ?Sized>(n: usize, upper: u64, rng: &mut R) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(SignalError::invalid("sequence length must be positive"));
    }
    if upper == 0 {
        return Err(SignalError::invalid("upper bound must be positive"));
    }
    Ok((0..n).map(|_| rng.gen_range(0..upper) as f64).collect())
}
