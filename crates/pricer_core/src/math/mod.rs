//! Numerical primitives shared by every pricer.
//!
//! - [`distributions`]: Standard normal CDF and PDF
//! - [`statistics`]: Mean, population standard deviation and percentiles of
//!   simulation output

pub mod distributions;
pub mod statistics;

pub use distributions::{norm_cdf, norm_pdf};
pub use statistics::{mean, percentile, population_std_dev};
