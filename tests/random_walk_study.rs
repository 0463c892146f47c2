//! End-to-end checks that a random walk looks like one.
//!
//! A series is a random walk when it shows strong, slowly decaying serial
//! dependence, becomes structureless after differencing, and no forecaster
//! beats persistence on it. These tests run that study on a seeded walk and
//! contrast it with uniform noise and a calibrated AR(1) signal.

use anofox_signal::features::{correlogram, lag1_autocorrelation, Confidence};
use anofox_signal::generators::{generate_signal, random_walk, uniform_integers};
use anofox_signal::models::{evaluate, train_test_split, Persistence, RandomStep};
use anofox_signal::transform::difference;
use anofox_signal::utils::stats::{mean, population_std_dev};
use anofox_signal::validation::{adf_test, ljung_box, AdfConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_walk() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(1);
    random_walk(1000, &mut rng).unwrap()
}

#[test]
fn walk_has_slowly_decaying_autocorrelation() {
    let walk = seeded_walk();
    let acf = correlogram(&walk, Some(50)).unwrap();

    assert!(acf.acf[0] > 0.9);
    assert!(acf.acf[9] > 0.5);
    // Decay is gradual: the first ten lags are all significant
    let significant = acf.significant_lags(Confidence::P99);
    assert!((1..=10).all(|lag| significant.contains(&lag)));
}

#[test]
fn uniform_noise_has_no_serial_structure() {
    let mut rng = StdRng::seed_from_u64(1);
    let noise = uniform_integers(1000, 10, &mut rng).unwrap();

    let acf = correlogram(&noise, Some(40)).unwrap();
    assert!(acf.significant_lags(Confidence::P99).len() <= 4);
    assert!(lag1_autocorrelation(&noise).unwrap().abs() < 0.1);
}

#[test]
fn differencing_makes_walk_stationary() {
    let walk = seeded_walk();
    let steps = difference(&walk, 1).unwrap();

    assert!(steps.iter().all(|s| s.abs() == 1.0));

    let adf = adf_test(&steps, &AdfConfig::default()).unwrap();
    assert!(adf.is_stationary(0.01), "ADF p = {}", adf.p_value);

    let lb = ljung_box(&steps, Some(10)).unwrap();
    assert!(lb.is_white_noise(0.001), "Ljung-Box p = {}", lb.p_value);
}

#[test]
fn persistence_beats_random_guessing() {
    let walk = seeded_walk();
    let (train, test) = train_test_split(&walk, 0.66).unwrap();

    let persistence = evaluate(&mut Persistence::new(), train, test).unwrap();
    let random = evaluate(
        &mut RandomStep::new(StdRng::seed_from_u64(1)),
        train,
        test,
    )
    .unwrap();

    assert_eq!(persistence.metrics.mse, 1.0);
    assert!(random.metrics.mse > persistence.metrics.mse);
}

#[test]
fn calibrated_signal_reports_requested_moments() {
    let mut rng = StdRng::seed_from_u64(1);
    let signal = generate_signal(5000, 0.75, 2.0, 3.0, &mut rng).unwrap();

    let r1 = lag1_autocorrelation(&signal).unwrap();
    assert!((r1 - 0.75).abs() < 0.05, "lag-1 = {r1}");
    assert!((population_std_dev(&signal) - 3.0).abs() < 0.2);
    let m = mean(&signal);
    assert!((m - 2.0).abs() < 0.15, "mean = {m}");

    let adf = adf_test(&signal, &AdfConfig::default()).unwrap();
    assert!(adf.is_stationary(0.01));
}
