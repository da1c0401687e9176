//! Sample statistics for simulation output.
//!
//! Conventions follow the usual numerical-library defaults:
//! - standard deviation is the population estimator (divide by n)
//! - percentiles interpolate linearly between closest ranks, with the
//!   rank at `q / 100 * (n - 1)`
//!
//! All functions return `None` for an empty sample.

/// Arithmetic mean.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation (divides by n, not n - 1).
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::population_std_dev;
///
/// let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev(samples: &[f64]) -> Option<f64> {
    let mu = mean(samples)?;
    let variance = samples
        .iter()
        .map(|x| {
            let d = x - mu;
            d * d
        })
        .sum::<f64>()
        / samples.len() as f64;
    Some(variance.sqrt())
}

/// Percentile with linear interpolation between closest ranks.
///
/// `q` is expressed in percent and clamped to [0, 100]. NaN samples sort
/// last under `f64::total_cmp`.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::percentile;
///
/// let xs = [4.0, 1.0, 3.0, 2.0, 5.0];
/// assert_eq!(percentile(&xs, 50.0), Some(3.0));
/// assert_eq!(percentile(&xs, 0.0), Some(1.0));
/// // rank 0.05 * 4 = 0.2 -> 1 + 0.2 * (2 - 1)
/// assert!((percentile(&xs, 5.0).unwrap() - 1.2).abs() < 1e-12);
/// ```
pub fn percentile(samples: &[f64], q: f64) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let rank = (q.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;

    Some(sorted[lower] + weight * (sorted[upper] - sorted[lower]))
}
