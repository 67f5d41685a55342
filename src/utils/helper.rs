use num_traits::Float;

use alloc::vec::Vec;

use core::cmp::Ordering;

use crate::Kbn;

/// Integer evenness test, `n mod 2 == 0`.
///
/// Every median-style split routes through this to choose between the
/// single-middle-element and averaged-middle-pair formulas.
#[inline]
pub fn is_even(n: usize) -> bool {
    n % 2 == 0
}

/// Returns an ascending copy of `data`, leaving the original order intact.
///
/// NaN values compare as equal and keep their relative position.
#[inline]
pub fn sorted_copy<T: Float>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Returns the median of a sorted slice, or zero for an empty slice.
///
/// # Arguments
///
/// * `ss` - The sorted slice
///
/// # Returns
///
/// * `T` - The median
#[inline]
pub fn median_from_sorted_slice<T: Float>(ss: &[T]) -> T {
    if ss.is_empty() {
        return T::zero();
    }
    let mid = ss.len() / 2;
    let _2 = T::one() + T::one();
    if is_even(ss.len()) {
        (ss[mid - 1] + ss[mid]) / _2
    } else {
        ss[mid]
    }
}

/// Returns the arithmetic mean of `data`, or zero for an empty slice.
///
/// Summation runs left to right through a compensated accumulator.
#[inline]
pub fn mean_of<T: Float + Default>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }
    let mut sum = Kbn::default();
    let mut count = T::zero();
    for &x in data {
        sum += x;
        count = count + T::one();
    }
    sum.total() / count
}

/// Returns the sample variance of `data` via Welford's single-pass
/// recurrence, or zero when fewer than two values are present.
///
/// The recurrence maintains a running mean `m` and running sum of squared
/// deviations `s`; the final variance is `s / (n - 1)`.
pub fn sample_variance_of<T: Float>(data: &[T]) -> T {
    if data.len() < 2 {
        return T::zero();
    }

    let mut count = T::zero();
    let mut mean = T::zero();
    let mut sq_dev_sum = T::zero();
    for &x in data {
        count = count + T::one();
        let delta = x - mean;
        mean = mean + delta / count;
        sq_dev_sum = sq_dev_sum + (x - mean) * delta;
    }

    sq_dev_sum / (count - T::one())
}

/// Returns the sample standard deviation of `data`, or zero when fewer
/// than two values are present.
#[inline]
pub fn sample_stddev_of<T: Float>(data: &[T]) -> T {
    sample_variance_of(data).sqrt()
}
