use ahash::RandomState;
use hashbrown::HashMap;
use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

use alloc::vec::Vec;

use crate::{Cached, Kbn, helper};

/// Symmetric confidence interval around the sample mean.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfidenceInterval<T> {
    /// Lower endpoint, `mean - margin`
    pub left: T,
    /// Upper endpoint, `mean + margin`
    pub right: T,
}

/// A stateful descriptive-statistics engine over a one-dimensional sample.
///
/// The engine owns its sample: [`SampleStatistics::assign`] replaces it
/// wholesale with a deep copy, and every query reads that private copy.
/// The six expensive statistics (minimum, maximum, mean, standard
/// deviation, median, mode) are computed at most once per assignment and
/// then served from per-statistic cache cells until the next assignment
/// invalidates them. All remaining statistics are cheap relative to their
/// call frequency, or depend on extra parameters, and are recomputed on
/// every call.
///
/// Every operation is total: degenerate input (an empty sample, too few
/// values for an estimator) yields a documented neutral value instead of
/// an error, and mathematically undefined results such as a zero standard
/// deviation in a ratio propagate as non-finite floats.
///
/// The `&mut self` receivers on cached accessors make exclusive access a
/// compile-time requirement; a multi-threaded embedding must wrap an
/// instance in a lock or confine it to a single owner.
#[derive(Debug, Clone)]
pub struct SampleStatistics<T> {
    /// Private copy of the current sample, in assignment order
    data: Vec<T>,
    /// Cached minimum
    min: Cached<T>,
    /// Cached maximum
    max: Cached<T>,
    /// Cached arithmetic mean
    mean: Cached<T>,
    /// Cached sample standard deviation
    stddev: Cached<T>,
    /// Cached median
    median: Cached<T>,
    /// Cached mode
    mode: Cached<T>,
}

impl<T> SampleStatistics<T>
where
    T: Float + Default,
{
    /// Creates an engine with an empty sample and every cache cell stale.
    ///
    /// # Returns
    ///
    /// * `Self` - The statistics engine
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            min: Cached::new(),
            max: Cached::new(),
            mean: Cached::new(),
            stddev: Cached::new(),
            median: Cached::new(),
            mode: Cached::new(),
        }
    }

    /// Replaces the current sample with a deep copy of `sample`.
    ///
    /// An empty slice is rejected as a no-op: the engine keeps whatever
    /// sample (possibly none) it held before the call. On a successful
    /// assignment all six cached statistics are invalidated,
    /// unconditionally, so the next query of each recomputes against the
    /// new data. The caller's slice never aliases internal state and may
    /// be mutated or dropped freely afterwards.
    ///
    /// # Arguments
    ///
    /// * `sample` - The new sample values
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The statistics engine
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[2.0, 4.0, 6.0]);
    /// assert_eq!(stats.mean(), 4.0);
    ///
    /// stats.assign(&[]);
    /// assert_eq!(stats.count(), 3); // empty input ignored
    ///
    /// stats.assign(&[10.0, 20.0]);
    /// assert_eq!(stats.mean(), 15.0); // cache invalidated by assignment
    /// ```
    pub fn assign(&mut self, sample: &[T]) -> &mut Self {
        if sample.is_empty() {
            return self;
        }
        self.data.clear();
        self.data.extend_from_slice(sample);
        self.invalidate_all();
        self
    }

    /// Clears the sample and invalidates every cached statistic,
    /// returning the engine to its freshly-created state.
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The statistics engine
    pub fn reset(&mut self) -> &mut Self {
        self.data.clear();
        self.invalidate_all();
        self
    }

    /// Returns the current sample length.
    ///
    /// # Returns
    ///
    /// * `usize` - The number of values in the sample
    #[inline]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no sample has been assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a read-only view of the stored sample, in assignment order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    fn invalidate_all(&mut self) {
        self.min.invalidate();
        self.max.invalidate();
        self.mean.invalidate();
        self.stddev.invalidate();
        self.median.invalidate();
        self.mode.invalidate();
    }

    fn count_t(&self) -> Option<T> {
        T::from(self.data.len())
    }

    /// Returns the minimum value of the sample.
    ///
    /// Cached; recomputed by linear scan only after an assignment. An
    /// empty sample reports 0, the cached default before any assignment.
    ///
    /// # Returns
    ///
    /// * `T` - The minimum, or 0 for an empty sample
    pub fn min(&mut self) -> T {
        self.min.value_or_else(|| {
            self.data
                .iter()
                .copied()
                .reduce(T::min)
                .unwrap_or_else(T::zero)
        })
    }

    /// Returns the maximum value of the sample.
    ///
    /// Cached; recomputed by linear scan only after an assignment. An
    /// empty sample reports 0, the cached default before any assignment.
    ///
    /// # Returns
    ///
    /// * `T` - The maximum, or 0 for an empty sample
    pub fn max(&mut self) -> T {
        self.max.value_or_else(|| {
            self.data
                .iter()
                .copied()
                .reduce(T::max)
                .unwrap_or_else(T::zero)
        })
    }

    /// Returns the arithmetic mean of the sample.
    ///
    /// Cached. The sum runs left to right through a compensated
    /// accumulator before the division by `n`.
    ///
    /// # Returns
    ///
    /// * `T` - The mean, or 0 for an empty sample
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[60.0, 64.0, 70.0, 70.0, 70.0, 75.0, 80.0, 90.0, 95.0, 95.0, 100.0]);
    /// assert_eq!(stats.mean(), 79.0);
    /// ```
    pub fn mean(&mut self) -> T {
        self.mean.value_or_else(|| helper::mean_of(&self.data))
    }

    /// Returns the geometric mean of the sample.
    ///
    /// Uncached. Computed as the product of all elements raised to the
    /// power `1/n`. A negative running product under the fractional power
    /// yields NaN; that result is propagated, not guarded.
    ///
    /// # Returns
    ///
    /// * `T` - The geometric mean, or 0 for an empty sample
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// # use assert_approx_eq::assert_approx_eq;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[10.0, 51.2, 8.0]);
    /// assert_approx_eq!(stats.geometric_mean(), 16.0, 1e-7);
    /// ```
    pub fn geometric_mean(&self) -> T {
        if self.data.is_empty() {
            return T::zero();
        }
        let product = self.data.iter().fold(T::one(), |acc, &x| acc * x);
        self.count_t()
            .map(|n| product.powf(n.recip()))
            .unwrap_or_else(T::zero)
    }

    /// Returns the harmonic mean of the sample.
    ///
    /// Uncached. Computed as `n / Σ(1/xᵢ)`, where any value with
    /// `|xᵢ| ≤ 1e-9` contributes a reciprocal of 0 instead of diverging.
    ///
    /// # Returns
    ///
    /// * `T` - The harmonic mean, or 0 for an empty sample
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// # use assert_approx_eq::assert_approx_eq;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[100.0, 110.0, 90.0, 120.0]);
    /// assert_approx_eq!(stats.harmonic_mean(), 103.8, 1e-2);
    /// ```
    pub fn harmonic_mean(&self) -> T {
        self.harmonic_mean_impl().unwrap_or_else(T::zero)
    }

    fn harmonic_mean_impl(&self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let threshold = T::from(1e-9)?;
        let mut recip_sum = Kbn::default();
        for &x in &self.data {
            if x.abs() > threshold {
                recip_sum += x.recip();
            }
        }
        self.count_t().map(|n| n / recip_sum.total())
    }

    /// Returns the median of the sample.
    ///
    /// Cached. Sorts a private ascending copy, then takes the middle
    /// element for odd `n` or the average of the middle pair for even
    /// `n`. The stored sample's order is never disturbed.
    ///
    /// # Returns
    ///
    /// * `T` - The median, or 0 for an empty sample
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[5.0, 2.0, 8.0, 1.0, 7.0]);
    /// assert_eq!(stats.median(), 5.0);
    ///
    /// stats.assign(&[5.0, 2.0, 8.0, 1.0]);
    /// assert_eq!(stats.median(), 3.5);
    /// ```
    pub fn median(&mut self) -> T {
        self.median
            .value_or_else(|| helper::median_from_sorted_slice(&helper::sorted_copy(&self.data)))
    }

    /// Returns the mode of the sample.
    ///
    /// Cached. Occurrences are counted keyed by exact numeric value, so
    /// equal floating values collide as equal. The reported mode is the
    /// value whose count strictly exceeds every count seen before it in
    /// first-insertion order: on a tie for the maximum count, the value
    /// that occurred first in the sample wins.
    ///
    /// # Returns
    ///
    /// * `T` - The mode, or 0 for an empty sample
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[1.0, 9.0, 4.0, 9.0, 7.0, 4.0, 9.0]);
    /// assert_eq!(stats.mode(), 9.0);
    ///
    /// // Tie between 3 and 1: 3 occurred first.
    /// stats.assign(&[3.0, 1.0, 1.0, 3.0]);
    /// assert_eq!(stats.mode(), 3.0);
    /// ```
    pub fn mode(&mut self) -> T
    where
        T: PrimitiveFloat,
    {
        self.mode.value_or_else(|| Self::mode_of(&self.data))
    }

    fn mode_of(data: &[T]) -> T
    where
        T: PrimitiveFloat,
    {
        let mut counts: HashMap<OrderedFloat<T>, usize, RandomState> =
            HashMap::with_hasher(RandomState::default());
        let mut first_seen: Vec<OrderedFloat<T>> = Vec::new();

        for &x in data {
            let count = counts.entry(OrderedFloat(x)).or_insert(0);
            if *count == 0 {
                first_seen.push(OrderedFloat(x));
            }
            *count += 1;
        }

        let mut mode = T::zero();
        let mut best = 0usize;
        for key in first_seen {
            let count = counts.get(&key).copied().unwrap_or(0);
            if count > best {
                best = count;
                mode = key.0;
            }
        }
        mode
    }

    /// Returns the sample variance.
    ///
    /// Uncached. A single Welford pass maintains the running mean and sum
    /// of squared deviations; the result is `s / (n - 1)`. Fewer than two
    /// values yield exactly 0, with no division by zero.
    ///
    /// # Returns
    ///
    /// * `T` - The sample variance, or 0 when `n < 2`
    pub fn variance(&self) -> T {
        helper::sample_variance_of(&self.data)
    }

    /// Returns the sample standard deviation.
    ///
    /// Cached. The square root of the Welford-pass sample variance;
    /// numerically stable against catastrophic cancellation regardless of
    /// the sample's magnitude.
    ///
    /// # Returns
    ///
    /// * `T` - The standard deviation, or 0 when `n < 2`
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// # use assert_approx_eq::assert_approx_eq;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[60.0, 64.0, 70.0, 70.0, 70.0, 75.0, 80.0, 90.0, 95.0, 95.0, 100.0]);
    /// assert_approx_eq!(stats.stddev(), 13.8564, 1e-4);
    ///
    /// stats.assign(&[42.0]);
    /// assert_eq!(stats.stddev(), 0.0);
    /// ```
    pub fn stddev(&mut self) -> T {
        self.stddev
            .value_or_else(|| helper::sample_stddev_of(&self.data))
    }

    /// Returns the coefficient of variation, `100 · stddev / mean`.
    ///
    /// Uncached, derived. Undefined (infinite or NaN) when the mean is 0;
    /// that result is propagated, not guarded.
    ///
    /// # Returns
    ///
    /// * `T` - The coefficient of variation as a percentage
    pub fn coefficient_of_variation(&mut self) -> T {
        let (stddev, mean) = (self.stddev(), self.mean());
        T::from(100)
            .map(|hundred| hundred * stddev / mean)
            .unwrap_or_else(T::zero)
    }

    /// Returns the standard error of the mean, `stddev / √n`.
    ///
    /// # Returns
    ///
    /// * `T` - The standard error, or 0 for an empty sample
    pub fn standard_error(&mut self) -> T {
        if self.data.is_empty() {
            return T::zero();
        }
        let stddev = self.stddev();
        self.count_t()
            .map(|n| stddev / n.sqrt())
            .unwrap_or_else(T::zero)
    }

    /// Returns the z-score of `value` relative to the sample,
    /// `(value - mean) / stddev`.
    ///
    /// A zero standard deviation propagates as an infinite or NaN result.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to standardize
    ///
    /// # Returns
    ///
    /// * `T` - The z-score
    pub fn zscore(&mut self, value: T) -> T {
        (value - self.mean()) / self.stddev()
    }

    /// Returns the symmetric confidence interval around the mean for
    /// confidence factor `t`.
    ///
    /// A NaN `t` defaults to 0.9; any other value is clamped to
    /// `[0.01, 0.99]`. The margin is `t · stddev / √n` and the interval
    /// is `[mean - margin, mean + margin]`.
    ///
    /// # Arguments
    ///
    /// * `t` - The confidence factor
    ///
    /// # Returns
    ///
    /// * `ConfidenceInterval<T>` - The interval, or `{0, 0}` for an empty
    ///   sample
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// # use assert_approx_eq::assert_approx_eq;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[60.0, 64.0, 70.0, 70.0, 70.0, 75.0, 80.0, 90.0, 95.0, 95.0, 100.0]);
    ///
    /// let interval = stats.confidence_interval(0.9);
    /// assert_approx_eq!(interval.left, 75.2399, 1e-4);
    /// assert_approx_eq!(interval.right, 82.7601, 1e-4);
    /// ```
    pub fn confidence_interval(&mut self, t: T) -> ConfidenceInterval<T> {
        self.confidence_interval_impl(t).unwrap_or_default()
    }

    fn confidence_interval_impl(&mut self, t: T) -> Option<ConfidenceInterval<T>> {
        if self.data.is_empty() {
            return None;
        }
        let t = if t.is_nan() {
            T::from(0.9)?
        } else {
            t.max(T::from(0.01)?).min(T::from(0.99)?)
        };
        let margin = t * self.standard_error();
        let mean = self.mean();
        Some(ConfidenceInterval {
            left: mean - margin,
            right: mean + margin,
        })
    }

    /// Returns the bias-adjusted sample skewness.
    ///
    /// Uncached. The raw third standardized moment `(Σ(xᵢ-mean)³ / n) /
    /// stddev³` is multiplied by the adjustment factor
    /// `√(n(n-1)) / (n-2)`. Undefined for fewer than three values.
    ///
    /// # Returns
    ///
    /// * `T` - The skewness, or 0 when `n < 3`
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// # use assert_approx_eq::assert_approx_eq;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[2.0, 5.0, -1.0, 3.0, 4.0, 5.0, 0.0, 2.0]);
    /// assert_approx_eq!(stats.skew(), -0.35, 1e-2);
    /// ```
    pub fn skew(&mut self) -> T {
        self.skew_impl().unwrap_or_else(T::zero)
    }

    fn skew_impl(&mut self) -> Option<T> {
        if self.count() < 3 {
            return None;
        }
        let (mean, stddev) = (self.mean(), self.stddev());
        let n = self.count_t()?;

        let mut sum_cubed = Kbn::default();
        for &x in &self.data {
            let d = x - mean;
            sum_cubed += d * d * d;
        }
        let m3 = sum_cubed.total() / n;

        let _2 = T::from(2)?;
        let adjustment = (n * (n - T::one())).sqrt() / (n - _2);
        Some(adjustment * m3 / (stddev * stddev * stddev))
    }

    /// Returns the bias-adjusted excess kurtosis.
    ///
    /// Uncached. Computed as
    /// `n(n+1)·Σ(xᵢ-mean)⁴ / ((n-1)(n-2)(n-3)·stddev⁴)` minus the normal
    /// baseline `3(n-1)² / ((n-2)(n-3))`. Undefined for fewer than four
    /// values.
    ///
    /// # Returns
    ///
    /// * `T` - The excess kurtosis, or 0 when `n < 4`
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// # use assert_approx_eq::assert_approx_eq;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[2.0, 5.0, -1.0, 3.0, 4.0, 5.0, 0.0, 2.0]);
    /// assert_approx_eq!(stats.kurt(), -0.94, 1e-2);
    /// ```
    pub fn kurt(&mut self) -> T {
        self.kurt_impl().unwrap_or_else(T::zero)
    }

    fn kurt_impl(&mut self) -> Option<T> {
        if self.count() < 4 {
            return None;
        }
        let (mean, stddev) = (self.mean(), self.stddev());
        let n = self.count_t()?;

        let mut sum_quad = Kbn::default();
        for &x in &self.data {
            let d = x - mean;
            sum_quad += d * d * d * d;
        }

        let _1 = T::one();
        let _2 = T::from(2)?;
        let _3 = T::from(3)?;
        let std_sq = stddev * stddev;

        let a = n * (n + _1) * sum_quad.total() / ((n - _1) * (n - _2) * (n - _3) * std_sq * std_sq);
        let b = _3 * (n - _1) * (n - _1) / ((n - _2) * (n - _3));
        Some(a - b)
    }
}

impl<T> Default for SampleStatistics<T>
where
    T: Float + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn neutral_values_before_any_assignment() {
        let mut stats: SampleStatistics<f64> = SampleStatistics::new();
        assert_eq!(stats.count(), 0);
        assert!(stats.is_empty());
        assert_eq!(stats.min(), 0.0);
        assert_eq!(stats.max(), 0.0);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.stddev(), 0.0);
        assert_eq!(stats.median(), 0.0);
        assert_eq!(stats.mode(), 0.0);
        assert_eq!(stats.geometric_mean(), 0.0);
        assert_eq!(stats.harmonic_mean(), 0.0);
        assert_eq!(stats.variance(), 0.0);
    }

    #[test]
    fn single_value_sample() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[1.0]);

        assert_eq!(stats.count(), 1);
        assert_eq!(stats.min(), 1.0);
        assert_eq!(stats.max(), 1.0);
        assert_eq!(stats.mean(), 1.0);
        assert_eq!(stats.median(), 1.0);
        assert_eq!(stats.mode(), 1.0);
        assert_eq!(stats.stddev(), 0.0);
    }

    #[test]
    fn exam_scores() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[
            60.0, 64.0, 70.0, 70.0, 70.0, 75.0, 80.0, 90.0, 95.0, 95.0, 100.0,
        ]);

        assert_eq!(stats.count(), 11);
        assert_eq!(stats.min(), 60.0);
        assert_eq!(stats.max(), 100.0);
        assert_eq!(stats.mean(), 79.0);
        assert_eq!(stats.median(), 75.0);
        assert_eq!(stats.mode(), 70.0);
        assert_approx_eq!(stats.stddev(), 13.856406460551, 1e-9);
    }

    #[test]
    fn forty_integer_ratings() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[
            14.0, 12.0, 16.0, 15.0, 12.0, 17.0, 13.0, 14.0, 15.0, 21.0, 12.0, 16.0, 18.0, 14.0,
            12.0, 15.0, 19.0, 13.0, 16.0, 12.0, 14.0, 15.0, 17.0, 12.0, 20.0, 14.0, 15.0, 18.0,
            13.0, 16.0, 12.0, 14.0, 21.0, 15.0, 17.0, 13.0, 12.0, 16.0, 15.0, 14.0,
        ]);

        assert_eq!(stats.count(), 40);
        assert_eq!(stats.mean(), 14.975);
        assert_eq!(stats.median(), 15.0);
        assert_eq!(stats.mode(), 12.0);
        assert_approx_eq!(stats.stddev(), 2.496, 1e-3);
    }

    #[test]
    fn empty_assignment_is_ignored() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[3.0, 1.0, 2.0]);
        assert_eq!(stats.count(), 3);
        assert_eq!(stats.mean(), 2.0);

        stats.assign(&[]);
        assert_eq!(stats.count(), 3);
        assert_eq!(stats.mean(), 2.0);
    }

    #[test]
    fn assignment_is_a_deep_copy() {
        let mut source = [4.0, 8.0, 12.0];
        let mut stats = SampleStatistics::new();
        stats.assign(&source);

        source[0] = 1000.0;
        assert_eq!(stats.mean(), 8.0);
        assert_eq!(stats.as_slice(), &[4.0, 8.0, 12.0]);
    }

    #[test]
    fn reassignment_invalidates_every_cached_statistic() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[1.0, 1.0, 5.0]);
        assert_eq!(stats.min(), 1.0);
        assert_eq!(stats.max(), 5.0);
        assert_eq!(stats.mean(), 7.0 / 3.0);
        assert_eq!(stats.median(), 1.0);
        assert_eq!(stats.mode(), 1.0);
        let old_stddev = stats.stddev();

        stats.assign(&[10.0, 20.0, 20.0, 30.0]);
        assert_eq!(stats.min(), 10.0);
        assert_eq!(stats.max(), 30.0);
        assert_eq!(stats.mean(), 20.0);
        assert_eq!(stats.median(), 20.0);
        assert_eq!(stats.mode(), 20.0);
        assert_ne!(stats.stddev(), old_stddev);
    }

    #[test]
    fn cached_values_are_bit_stable_across_queries() {
        let mut stats: SampleStatistics<f64> = SampleStatistics::new();
        stats.assign(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7]);

        let first = stats.mean();
        for _ in 0..10 {
            assert_eq!(stats.mean().to_bits(), first.to_bits());
        }
        let stddev = stats.stddev();
        assert_eq!(stats.stddev().to_bits(), stddev.to_bits());
    }

    #[test]
    fn queries_leave_sample_order_untouched() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[9.0, 1.0, 5.0, 3.0]);
        stats.median();
        stats.mode();
        stats.min();
        assert_eq!(stats.as_slice(), &[9.0, 1.0, 5.0, 3.0]);
    }

    #[test]
    fn mean_lies_between_min_and_max() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[2.5, -1.0, 4.0, 0.5, 3.5, 2.0]);

        let (min, max) = (stats.min(), stats.max());
        assert!(min <= stats.mean() && stats.mean() <= max);
        assert!(min <= stats.median() && stats.median() <= max);
    }

    #[test]
    fn geometric_mean_works() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[10.0, 51.2, 8.0]);
        assert_approx_eq!(stats.geometric_mean(), 16.0, 1e-7);
    }

    #[test]
    fn geometric_mean_of_negative_product_is_nan() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[2.0, -4.0, 8.0]);
        assert!(stats.geometric_mean().is_nan());
    }

    #[test]
    fn harmonic_mean_works() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[100.0, 110.0, 90.0, 120.0]);
        assert_approx_eq!(stats.harmonic_mean(), 103.8, 1e-2);
    }

    #[test]
    fn harmonic_mean_skips_near_zero_values() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[1e-12, 2.0, 4.0]);
        // Only 1/2 + 1/4 contribute; 3 / 0.75 = 4.
        assert_approx_eq!(stats.harmonic_mean(), 4.0, 1e-12);
    }

    #[test]
    fn mode_tie_prefers_first_occurrence() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[3.0, 1.0, 1.0, 3.0]);
        assert_eq!(stats.mode(), 3.0);

        stats.assign(&[1.0, 3.0, 3.0, 1.0]);
        assert_eq!(stats.mode(), 1.0);
    }

    #[test]
    fn skewness_and_kurtosis() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[2.0, 5.0, -1.0, 3.0, 4.0, 5.0, 0.0, 2.0]);
        assert_approx_eq!(stats.skew(), -0.349536636, 1e-6);
        assert_approx_eq!(stats.kurt(), -0.939792387, 1e-6);
    }

    #[test]
    fn shape_statistics_need_enough_values() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[1.0, 2.0]);
        assert_eq!(stats.skew(), 0.0);

        stats.assign(&[1.0, 2.0, 3.0]);
        assert_eq!(stats.kurt(), 0.0);
    }

    #[test]
    fn coefficient_of_variation_works() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[
            60.0, 64.0, 70.0, 70.0, 70.0, 75.0, 80.0, 90.0, 95.0, 95.0, 100.0,
        ]);
        assert_approx_eq!(stats.coefficient_of_variation(), 17.5397550, 1e-6);
    }

    #[test]
    fn coefficient_of_variation_with_zero_mean_is_not_finite() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[-1.0, 1.0]);
        assert!(!stats.coefficient_of_variation().is_finite());
    }

    #[test]
    fn confidence_interval_works() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[
            60.0, 64.0, 70.0, 70.0, 70.0, 75.0, 80.0, 90.0, 95.0, 95.0, 100.0,
        ]);

        let interval = stats.confidence_interval(0.9);
        assert_approx_eq!(interval.left, 75.239922631357, 1e-9);
        assert_approx_eq!(interval.right, 82.760077368643, 1e-9);
    }

    #[test]
    fn confidence_interval_defaults_and_clamps() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[5.0, 7.0, 9.0, 11.0]);

        let defaulted = stats.confidence_interval(f64::NAN);
        let explicit = stats.confidence_interval(0.9);
        assert_eq!(defaulted, explicit);

        let clamped_high = stats.confidence_interval(5.0);
        let max_t = stats.confidence_interval(0.99);
        assert_eq!(clamped_high, max_t);

        let clamped_low = stats.confidence_interval(0.0);
        let min_t = stats.confidence_interval(0.01);
        assert_eq!(clamped_low, min_t);
    }

    #[test]
    fn confidence_interval_of_empty_sample_is_zero() {
        let mut stats: SampleStatistics<f64> = SampleStatistics::new();
        let interval = stats.confidence_interval(0.9);
        assert_eq!(interval, ConfidenceInterval { left: 0.0, right: 0.0 });
    }

    #[test]
    fn standard_error_and_zscore() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        let stddev = stats.stddev();
        assert_approx_eq!(stats.standard_error(), stddev / 8f64.sqrt(), 1e-12);
        assert_approx_eq!(stats.zscore(5.0), (5.0 - 5.0) / stddev, 1e-12);
        assert!(stats.zscore(9.0) > 0.0);
        assert!(stats.zscore(2.0) < 0.0);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut stats = SampleStatistics::new();
        stats.assign(&[1.0, 2.0, 3.0]);
        assert_eq!(stats.count(), 3);

        stats.reset();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.min(), 0.0);

        stats.assign(&[10.0, 30.0]);
        assert_eq!(stats.mean(), 20.0);
    }
}
