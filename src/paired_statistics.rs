//! Association measures between samples.
//!
//! These operations take their own input slices and compute their means
//! and standard deviations through the shared helpers; they never read or
//! mutate a [`SampleStatistics`](crate::SampleStatistics) instance, so
//! they carry no exclusivity requirement.

use num_traits::Float;

use alloc::vec::Vec;

use crate::{Kbn, helper};

/// Returns the sample covariance of two equal-length series.
///
/// Covariance measures how two variables change together: positive when
/// they move in the same direction, negative when they move apart.
/// Computed as `Σ(xᵢ - meanX)(yᵢ - meanY) / (n - 1)` with a compensated
/// deviation-product sum.
///
/// # Arguments
///
/// * `x` - The first series
/// * `y` - The second series
///
/// # Returns
///
/// * `T` - The covariance, or 0 when the series differ in length or hold
///   fewer than two values
///
/// # Examples
///
/// ```
/// use sample_statistics::covariance;
/// use assert_approx_eq::assert_approx_eq;
///
/// let cov: f64 = covariance(&[2.1, 2.5, 4.0, 3.6], &[8.0, 12.0, 14.0, 10.0]);
/// assert_approx_eq!(cov, 1.5333, 1e-4);
/// ```
pub fn covariance<T>(x: &[T], y: &[T]) -> T
where
    T: Float + Default,
{
    if x.len() != y.len() || x.len() < 2 {
        return T::zero();
    }

    let mean_x = helper::mean_of(x);
    let mean_y = helper::mean_of(y);

    let mut dev_prod_sum = Kbn::default();
    let mut count = T::zero();
    for (&a, &b) in x.iter().zip(y) {
        dev_prod_sum += (a - mean_x) * (b - mean_y);
        count = count + T::one();
    }

    dev_prod_sum.total() / (count - T::one())
}

/// Returns the Pearson correlation coefficient of two equal-length
/// series.
///
/// Correlation normalizes covariance by the product of the sample
/// standard deviations, giving a strength-of-relationship measure between
/// -1 and 1. A zero standard deviation on either side leaves the ratio
/// undefined; the non-finite result is propagated, not guarded.
///
/// # Arguments
///
/// * `x` - The first series
/// * `y` - The second series
///
/// # Returns
///
/// * `T` - The correlation coefficient, or 0 when the series differ in
///   length or hold fewer than two values
///
/// # Examples
///
/// ```
/// use sample_statistics::correlation;
/// use assert_approx_eq::assert_approx_eq;
///
/// let r: f64 = correlation(
///     &[43.0, 21.0, 25.0, 42.0, 57.0, 59.0, 247.0],
///     &[99.0, 65.0, 79.0, 75.0, 87.0, 81.0, 486.0],
/// );
/// assert_approx_eq!(r, 0.98761, 1e-4);
/// ```
pub fn correlation<T>(x: &[T], y: &[T]) -> T
where
    T: Float + Default,
{
    if x.len() != y.len() || x.len() < 2 {
        return T::zero();
    }

    let stddev_x = helper::sample_stddev_of(x);
    let stddev_y = helper::sample_stddev_of(y);

    covariance(x, y) / (stddev_x * stddev_y)
}

/// Returns the lower triangle of the covariance matrix of a rectangular
/// observation matrix.
///
/// Rows are observations, columns are variables. Each column is centered
/// on its mean and the matrix `Cᵗ·C / m` is formed for column pairs
/// `i ≥ j` only, with `m` the observation count (population divisor). The
/// result is square with the upper triangle left at zero; the matrix is
/// symmetric by construction, so mirroring is the caller's responsibility.
///
/// # Arguments
///
/// * `observations` - The observation rows, one value per variable
///
/// # Returns
///
/// * `Vec<Vec<T>>` - The lower-triangular covariance matrix, or an empty
///   vector for empty or ragged input
///
/// # Examples
///
/// ```
/// use sample_statistics::covariance_matrix;
/// use assert_approx_eq::assert_approx_eq;
///
/// let matrix: Vec<Vec<f64>> = covariance_matrix(&[
///     vec![2.1, 8.0],
///     vec![2.5, 12.0],
///     vec![4.0, 14.0],
///     vec![3.6, 10.0],
/// ]);
///
/// assert_approx_eq!(matrix[0][0], 0.6025, 1e-12);
/// assert_approx_eq!(matrix[1][0], 1.15, 1e-12);
/// assert_approx_eq!(matrix[1][1], 5.0, 1e-12);
/// assert_eq!(matrix[0][1], 0.0); // upper triangle is not populated
/// ```
pub fn covariance_matrix<T>(observations: &[Vec<T>]) -> Vec<Vec<T>>
where
    T: Float + Default,
{
    covariance_matrix_impl(observations).unwrap_or_default()
}

fn covariance_matrix_impl<T>(observations: &[Vec<T>]) -> Option<Vec<Vec<T>>>
where
    T: Float + Default,
{
    let rows = observations.len();
    if rows == 0 {
        return None;
    }
    let cols = observations[0].len();
    if cols == 0 || observations.iter().any(|row| row.len() != cols) {
        return None;
    }

    let m = T::from(rows)?;

    let mut sums: Vec<Kbn<T>> = Vec::new();
    sums.resize_with(cols, Kbn::default);
    for row in observations {
        for (sum, &value) in sums.iter_mut().zip(row) {
            *sum += value;
        }
    }
    let means: Vec<T> = sums.iter().map(|sum| sum.total() / m).collect();

    let centered: Vec<Vec<T>> = observations
        .iter()
        .map(|row| row.iter().zip(&means).map(|(&v, &mu)| v - mu).collect())
        .collect();

    let mut matrix = vec![vec![T::zero(); cols]; cols];
    for i in 0..cols {
        for j in 0..=i {
            let mut dev_prod_sum = Kbn::default();
            for row in &centered {
                dev_prod_sum += row[i] * row[j];
            }
            matrix[i][j] = dev_prod_sum.total() / m;
        }
    }
    Some(matrix)
}
