//! Median-based point estimators over an [`AbSketch`]
//!
//! Two strategies read the same counters:
//!
//! - [`DirectMedian`]: median of the counter each row hashes the key to.
//!   Collisions only add, so this never underestimates.
//! - [`NeighborCancellation`]: same, minus each counter's paired neighbor
//!   bucket. Collision noise partly cancels, but samples can go negative and
//!   the result can fall on either side of the true count.
//!
//! Both aggregate with [`median`].

use super::AbSketch;
use crate::traits::Estimate;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Median of the samples, sorting them in place
///
/// - no samples: `None`
/// - odd `n`: `Count(r[n/2])`
/// - even `n`: `Midpoint((r[n/2] + r[n/2 + 1]) / 2)`
///
/// The even case deliberately averages the upper-middle sample with the one
/// after it, not the conventional `r[n/2 - 1]` and `r[n/2]`. When `n == 2`
/// the second index is past the end and is clamped to the last sample.
///
/// # Example
///
/// ```
/// use abcount::frequency::median;
/// use abcount::traits::Estimate;
///
/// assert_eq!(median(&mut [3, 1, 2]), Some(Estimate::Count(2)));
/// assert_eq!(median(&mut [4, 3, 2, 1]), Some(Estimate::Midpoint(3.5)));
/// assert_eq!(median(&mut []), None);
/// ```
pub fn median(samples: &mut [i64]) -> Option<Estimate> {
    let n = samples.len();
    if n == 0 {
        return None;
    }

    samples.sort_unstable();

    if n % 2 == 1 {
        return Some(Estimate::Count(samples[n / 2]));
    }

    let lo = samples[n / 2];
    let hi = samples[(n / 2 + 1).min(n - 1)];
    Some(Estimate::Midpoint((lo as f64 + hi as f64) / 2.0))
}

/// Paired bucket of `j`: `j + 1` for even `j`, `j - 1` for odd `j`
///
/// Over an even bucket count this splits `[0, B)` into disjoint pairs
/// `{0, 1}, {2, 3}, ...`.
#[inline]
pub fn neighbor(j: usize) -> usize {
    j ^ 1
}

/// A strategy that turns a sketch's counters into a point estimate
pub trait Estimator {
    /// Estimate how often `key` was inserted into `sketch`
    fn estimate(&self, sketch: &AbSketch, key: i64) -> Option<Estimate>;
}

/// Median of `C[i, h_i(x)]` over all rows
///
/// Biased upward: every sample is at least the true count, so the estimate is
/// too. The bias grows with load (`count / bucket_count`) and is not corrected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectMedian;

impl Estimator for DirectMedian {
    fn estimate(&self, sketch: &AbSketch, key: i64) -> Option<Estimate> {
        let counters = sketch.counters();
        let mut samples: Vec<i64> = sketch
            .buckets(key)
            .map(|(row, col)| to_signed(counters.read(row, col)))
            .collect();
        median(&mut samples)
    }
}

/// Median of `C[i, h_i(x)] - C[i, neighbor(h_i(x))]` over all rows
///
/// The result is signed and unclamped. Unseen or rare keys can come out
/// negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborCancellation;

impl Estimator for NeighborCancellation {
    fn estimate(&self, sketch: &AbSketch, key: i64) -> Option<Estimate> {
        let counters = sketch.counters();
        let mut samples: Vec<i64> = sketch
            .buckets(key)
            .map(|(row, col)| {
                to_signed(counters.read(row, col)) - to_signed(counters.read(row, neighbor(col)))
            })
            .collect();
        median(&mut samples)
    }
}

/// Runtime choice between the two estimators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    DirectMedian,
    NeighborCancellation,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::DirectMedian, Strategy::NeighborCancellation];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DirectMedian => "direct-median",
            Strategy::NeighborCancellation => "neighbor-cancellation",
        }
    }
}

impl Estimator for Strategy {
    fn estimate(&self, sketch: &AbSketch, key: i64) -> Option<Estimate> {
        match self {
            Strategy::DirectMedian => DirectMedian.estimate(sketch, key),
            Strategy::NeighborCancellation => NeighborCancellation.estimate(sketch, key),
        }
    }
}

#[inline]
fn to_signed(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::UniversalHash;

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&mut [7]), Some(Estimate::Count(7)));
        assert_eq!(median(&mut [5, 1, 3]), Some(Estimate::Count(3)));
        assert_eq!(median(&mut [9, -2, 4, 0, 4]), Some(Estimate::Count(4)));
    }

    #[test]
    fn test_median_four_uses_upper_pair() {
        // sorted [1, 2, 3, 4]: r[2] = 3, r[3] = 4
        assert_eq!(median(&mut [4, 1, 3, 2]), Some(Estimate::Midpoint(3.5)));
    }

    #[test]
    fn test_median_six_uses_upper_pair() {
        // sorted [1..=6]: r[3] = 4, r[4] = 5
        assert_eq!(
            median(&mut [6, 5, 4, 3, 2, 1]),
            Some(Estimate::Midpoint(4.5))
        );
    }

    #[test]
    fn test_median_two_clamps_to_last() {
        assert_eq!(median(&mut [10, 2]), Some(Estimate::Midpoint(10.0)));
    }

    #[test]
    fn test_median_negative_samples() {
        assert_eq!(median(&mut [-3, -1, -2, -4]), Some(Estimate::Midpoint(-1.5)));
    }

    #[test]
    fn test_neighbor_pairs() {
        assert_eq!(neighbor(0), 1);
        assert_eq!(neighbor(1), 0);
        assert_eq!(neighbor(6), 7);
        assert_eq!(neighbor(7), 6);
        for j in 0..100 {
            assert_eq!(neighbor(neighbor(j)), j);
        }
    }

    fn single_row_sketch() -> AbSketch {
        // h(x) = (x mod 101) mod 4 for x < 101
        let h = UniversalHash::from_parts(1, 0, 101, 4).unwrap();
        AbSketch::from_hashes(vec![h]).unwrap()
    }

    #[test]
    fn test_direct_median_single_row() {
        let mut sketch = single_row_sketch();
        sketch.insert(2);
        sketch.insert(2);
        sketch.insert(6); // same bucket as 2

        assert_eq!(DirectMedian.estimate(&sketch, 2), Some(Estimate::Count(3)));
        assert_eq!(DirectMedian.estimate(&sketch, 1), Some(Estimate::Count(0)));
    }

    #[test]
    fn test_neighbor_cancellation_single_row() {
        let mut sketch = single_row_sketch();
        sketch.insert(2);
        sketch.insert(2);
        sketch.insert(3); // bucket 3 pairs with bucket 2

        assert_eq!(
            NeighborCancellation.estimate(&sketch, 2),
            Some(Estimate::Count(1))
        );
        assert_eq!(
            NeighborCancellation.estimate(&sketch, 3),
            Some(Estimate::Count(-1))
        );
        assert_eq!(
            NeighborCancellation.estimate(&sketch, 0),
            Some(Estimate::Count(0))
        );
    }

    #[test]
    fn test_strategy_dispatch() {
        let mut sketch = single_row_sketch();
        sketch.insert(1);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.estimate(&sketch, 1), Some(Estimate::Count(1)));
        }
        assert_eq!(Strategy::DirectMedian.name(), "direct-median");
        assert_eq!(
            Strategy::NeighborCancellation.name(),
            "neighbor-cancellation"
        );
    }
}
