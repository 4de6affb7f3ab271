//! Per-channel reduction of raw samples into summary statistics
//!
//! Extremes are taken on the signed samples so that negative excursions are
//! preserved; the remaining measures describe load magnitude and are taken on
//! the absolute value of every sample.

use ndarray::{ArrayBase, Data, Dimension};
use optostat_stats::descriptive::DescriptiveStats;

/// Column suffixes of one channel block, in output order.
pub const STATISTIC_NAMES: [&str; ChannelStatistics::LEN] = ["min", "max", "mean", "median", "std"];

/// Summary of one channel of one recording.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStatistics {
    /// Smallest signed sample.
    pub min: f64,
    /// Largest signed sample.
    pub max: f64,
    /// Mean of the absolute samples.
    pub mean_abs: f64,
    /// Median of the absolute samples.
    pub median_abs: f64,
    /// Population standard deviation of the absolute samples.
    pub std_abs: f64,
}

impl ChannelStatistics {
    /// Number of values produced per channel.
    pub const LEN: usize = 5;

    /// Reduces a sequence of raw signed samples.
    ///
    /// Returns `None` if `samples` is empty. If any sample is NaN, every
    /// statistic is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use optostat_analysis::statistics::ChannelStatistics;
    /// let stats = ChannelStatistics::reduce([-2.0, 0.0, 3.0, -5.0, 5.0]).unwrap();
    /// assert_eq!(stats.min, -5.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean_abs, 3.0);
    /// assert_eq!(stats.median_abs, 3.0);
    /// ```
    #[must_use]
    pub fn reduce<I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let samples = samples.into_iter().collect::<Vec<_>>();
        let signed = DescriptiveStats::new(samples.iter().copied())?;
        let magnitude = DescriptiveStats::new(samples.iter().map(|v| v.abs()))?;
        Some(Self {
            min: signed.min,
            max: signed.max,
            mean_abs: magnitude.mean,
            median_abs: magnitude.median,
            std_abs: magnitude.std_dev,
        })
    }

    /// Reduces an array of any dimensionality as a single flattened row.
    ///
    /// A `1 x N` array and its `N`-length flattening give identical results.
    #[must_use]
    pub fn from_array<S, D>(samples: &ArrayBase<S, D>) -> Option<Self>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        Self::reduce(samples.iter().copied())
    }

    /// The statistics in output order: `[min, max, mean_abs, median_abs, std_abs]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; Self::LEN] {
        [
            self.min,
            self.max,
            self.mean_abs,
            self.median_abs,
            self.std_abs,
        ]
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, arr1};

    use super::*;

    const SAMPLES: [f64; 8] = [-2.5, 0.0, 3.25, -5.0, 5.0, 1.0, -0.75, 4.0];

    #[test]
    fn test_reference_scenario() {
        let stats = ChannelStatistics::reduce([-2.0, 0.0, 3.0, -5.0, 5.0]).unwrap();
        assert_eq!(stats.min, -5.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean_abs, 3.0);
        assert_eq!(stats.median_abs, 3.0);
        // |x| = [2, 0, 3, 5, 5], squared deviations sum to 18 over 5 samples
        assert!((stats.std_abs - 3.6_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_extremes_bound_every_sample() {
        let stats = ChannelStatistics::reduce(SAMPLES).unwrap();
        for sample in SAMPLES {
            assert!(stats.min <= sample && sample <= stats.max);
        }
        assert_eq!(stats.min, -5.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_magnitude_statistics_ignore_sign() {
        let original = ChannelStatistics::reduce(SAMPLES).unwrap();
        let negated = ChannelStatistics::reduce(SAMPLES.map(|v| -v)).unwrap();
        assert_eq!(original.mean_abs, negated.mean_abs);
        assert_eq!(original.median_abs, negated.median_abs);
        assert_eq!(original.std_abs, negated.std_abs);

        let asymmetric = [-1.0, 2.0, 7.0];
        let original = ChannelStatistics::reduce(asymmetric).unwrap();
        let negated = ChannelStatistics::reduce(asymmetric.map(|v| -v)).unwrap();
        assert_eq!((negated.min, negated.max), (-7.0, 1.0));
        assert_ne!((original.min, original.max), (negated.min, negated.max));
    }

    #[test]
    fn test_std_zero_iff_equal_magnitudes() {
        let stats = ChannelStatistics::reduce([3.0, -3.0, 3.0, -3.0]).unwrap();
        assert_eq!(stats.std_abs, 0.0);
        assert_eq!((stats.min, stats.max), (-3.0, 3.0));

        let stats = ChannelStatistics::reduce([3.0, -3.0, 3.5]).unwrap();
        assert!(stats.std_abs > 0.0);
    }

    #[test]
    fn test_all_zeros() {
        let stats = ChannelStatistics::reduce([0.0; 16]).unwrap();
        assert_eq!(stats.to_array(), [0.0; 5]);
    }

    #[test]
    fn test_empty_samples() {
        assert!(ChannelStatistics::reduce(Vec::new()).is_none());
        assert!(ChannelStatistics::from_array(&Array2::<f64>::zeros((1, 0))).is_none());
    }

    #[test]
    fn test_single_row_matches_flat() {
        let flat = arr1(&SAMPLES);
        let row = flat.clone().into_shape_with_order((1, SAMPLES.len())).unwrap();
        assert_eq!(
            ChannelStatistics::from_array(&flat),
            ChannelStatistics::from_array(&row)
        );
    }

    #[test]
    fn test_nan_sample() {
        let stats = ChannelStatistics::reduce([1.0, f64::NAN]).unwrap();
        assert!(stats.to_array().iter().all(|v| v.is_nan()));
    }
}
