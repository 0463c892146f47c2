//! Synthetic signal generators.
//!
//! Every sampling function takes the random source as an argument, so a
//! seeded generator reproduces the same sequence bit for bit.
//!
//! # Example
//!
//! ```
//! use anofox_signal::generators::{random_walk, sine_wave, Ar1Config, InitialDraw};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let ar = Ar1Config::new(0.75)
//!     .with_mean(2.0)
//!     .with_std_dev(3.0)
//!     .with_initial_draw(InitialDraw::Stationary)
//!     .sample(500, &mut rng)
//!     .unwrap();
//! let walk = random_walk(500, &mut rng).unwrap();
//! let wave = sine_wave(500, 3.0).unwrap();
//!
//! assert_eq!(ar.len(), walk.len());
//! assert_eq!(wave.len(), 500);
//! ```

pub mod ar1;
pub mod random_walk;
pub mod sine;

pub use ar1::{generate_signal, Ar1Calibration, Ar1Config, InitialDraw};
pub use random_walk::{random_walk, uniform_integers, RandomWalkConfig};
pub use sine::{sine_wave, SineWave};
