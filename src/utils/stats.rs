//! Descriptive statistics over sample slices.

/// Calculate the mean of a slice.
///
/// Returns `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from the mean.
pub(crate) fn sum_sq_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum()
}

/// Calculate the variance of a slice (sample variance with n-1 denominator).
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    sum_sq_dev(values) / (values.len() - 1) as f64
}

/// Calculate the population variance of a slice (n denominator).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    sum_sq_dev(values) / values.len() as f64
}

/// Calculate the standard deviation of a slice (n-1 denominator).
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Calculate the population standard deviation of a slice (n denominator).
///
/// This matches what most array libraries report by default.
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}
