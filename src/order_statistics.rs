use num_traits::Float;

use alloc::vec::Vec;

use crate::{SampleStatistics, helper};

/// IQR-based outlier screening thresholds derived from the five-number
/// summary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fences<T> {
    /// Lower fence, `Q1 - 1.5·IQR`
    pub lower: T,
    /// Upper fence, `Q3 + 1.5·IQR`
    pub upper: T,
}

/// Order statistics.
///
/// Every operation here sorts a private ascending copy of the sample; the
/// stored sample's order is never disturbed.
impl<T> SampleStatistics<T>
where
    T: Float + Default,
{
    /// Returns the range of the sample, `max - min`.
    ///
    /// # Returns
    ///
    /// * `T` - The range, or 0 for an empty sample
    pub fn range(&mut self) -> T {
        self.max() - self.min()
    }

    /// Returns the five-number summary `[min, Q1, median, Q3, max]`.
    ///
    /// The quartiles come from recursive median splitting: the sample is
    /// split at the median by the usual even/odd rule, and the same rule
    /// is applied to each half. For odd `n` the median element belongs to
    /// both halves; for even `n` the halves are the disjoint split at the
    /// midpoint. This is a deliberately different quartile estimator from
    /// the interpolation-based [`SampleStatistics::quantiles`]; the two
    /// may disagree at p = 0.25.
    ///
    /// # Returns
    ///
    /// * `Vec<T>` - The five summary values, a single value repeated five
    ///   times when `n == 1`, or an empty vector for an empty sample
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[60.0, 64.0, 70.0, 70.0, 70.0, 75.0, 80.0, 90.0, 95.0, 95.0, 100.0]);
    /// assert_eq!(
    ///     stats.five_number_summary(),
    ///     vec![60.0, 70.0, 75.0, 92.5, 100.0]
    /// );
    /// ```
    pub fn five_number_summary(&self) -> Vec<T> {
        let n = self.count();
        if n == 0 {
            return Vec::new();
        }
        let sorted = helper::sorted_copy(self.as_slice());
        if n == 1 {
            return vec![sorted[0]; 5];
        }

        let median = helper::median_from_sorted_slice(&sorted);
        let mid = n / 2;
        // Even n splits into disjoint halves; odd n keeps the median
        // element at the tail of the lower half and the head of the upper.
        let (lower, upper) = if helper::is_even(n) {
            (&sorted[..mid], &sorted[mid..])
        } else {
            (&sorted[..=mid], &sorted[mid..])
        };
        let q1 = helper::median_from_sorted_slice(lower);
        let q3 = helper::median_from_sorted_slice(upper);

        vec![sorted[0], q1, median, q3, sorted[n - 1]]
    }

    /// Returns the outlier fences `Q1 - 1.5·IQR` and `Q3 + 1.5·IQR`,
    /// with the quartiles taken from the five-number summary.
    ///
    /// The fences are for outlier screening only; no operation enforces
    /// them.
    ///
    /// # Returns
    ///
    /// * `Fences<T>` - The fences, or `{0, 0}` for an empty sample
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// # use assert_approx_eq::assert_approx_eq;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[60.0, 64.0, 70.0, 70.0, 70.0, 75.0, 80.0, 90.0, 95.0, 95.0, 100.0]);
    ///
    /// let fences = stats.fences();
    /// assert_approx_eq!(fences.lower, 36.25, 1e-12);
    /// assert_approx_eq!(fences.upper, 126.25, 1e-12);
    /// ```
    pub fn fences(&self) -> Fences<T> {
        self.fences_impl().unwrap_or_default()
    }

    fn fences_impl(&self) -> Option<Fences<T>> {
        let summary = self.five_number_summary();
        if summary.len() < 5 {
            return None;
        }
        let (q1, q3) = (summary[1], summary[3]);
        let iqr = q3 - q1;
        let k = T::from(1.5)?;
        Some(Fences {
            lower: q1 - k * iqr,
            upper: q3 + k * iqr,
        })
    }

    /// Returns the quantiles of the sample at levels `p, 2p, 3p, …`,
    /// bracketed by the true minimum and maximum.
    ///
    /// `p` must lie in the open interval (0.01, 0.99); a NaN or
    /// out-of-range value is coerced to 0.25 (quartiles). Each interior
    /// level is located against the reference CDF positions of the sorted
    /// sample (`f[0] = 0`, steps of `1/(n-1)`, `f[n-1] = 1`): a level
    /// within 0.001 of a position takes that element exactly, anything
    /// else interpolates linearly between the two bracketing elements.
    ///
    /// # Arguments
    ///
    /// * `p` - The quantile level
    ///
    /// # Returns
    ///
    /// * `Vec<T>` - `floor(1/p) + 1` values, or an empty vector when
    ///   `n < 2`
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_statistics::SampleStatistics;
    /// let mut stats: SampleStatistics<f64> = SampleStatistics::new();
    /// stats.assign(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    /// assert_eq!(
    ///     stats.quantiles(0.25),
    ///     vec![10.0, 20.0, 30.0, 40.0, 50.0]
    /// );
    /// ```
    pub fn quantiles(&self, p: f64) -> Vec<T> {
        self.quantiles_impl(p).unwrap_or_default()
    }

    fn quantiles_impl(&self, p: f64) -> Option<Vec<T>> {
        let p = if p.is_nan() || p <= 0.01 || p >= 0.99 {
            0.25
        } else {
            p
        };
        let n = self.count();
        if n < 2 {
            return None;
        }

        let sorted = helper::sorted_copy(self.as_slice());
        let n_quant = (1.0 / p) as usize;

        // Reference CDF position of every sorted element.
        let step = 1.0 / (n as f64 - 1.0);
        let mut positions = vec![0.0f64; n];
        for i in 1..n {
            positions[i] = positions[i - 1] + step;
        }
        positions[n - 1] = 1.0;

        let mut quantiles = Vec::with_capacity(n_quant + 1);
        quantiles.push(sorted[0]);
        for k in 1..n_quant {
            let q = k as f64 * p;
            let r = (q * (n as f64 - 1.0)) as usize;
            if (positions[r] - q).abs() < 0.001 {
                quantiles.push(sorted[r]);
            } else {
                let t = T::from((q - positions[r]) / (positions[r + 1] - positions[r]))?;
                quantiles.push(sorted[r] + t * (sorted[r + 1] - sorted[r]));
            }
        }
        quantiles.push(sorted[n - 1]);
        Some(quantiles)
    }
}
