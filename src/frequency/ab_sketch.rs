//! A x B counter sketch
//!
//! `A` independent universal hash functions each own one row of `B` counters.
//! Inserting `x` bumps `C[i, h_i(x)]` in every row. Queries hand the rows to an
//! [`Estimator`](super::Estimator), which aggregates them by median.

use super::counters::CounterMatrix;
use super::estimate::{DirectMedian, Estimator, NeighborCancellation};
use super::hash::{UniversalHash, DEFAULT_PRIME};
use crate::math;
use crate::traits::{ConfigError, Estimate, FrequencySketch, Sketch};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Frequency sketch with `A` hash rows of `B` buckets each
///
/// The counters only grow. An insert touches exactly one cell per row.
///
/// # Example
///
/// ```
/// use abcount::frequency::AbSketch;
///
/// let mut sketch = AbSketch::with_seed(5, 64, 42).unwrap();
///
/// for x in [1, 2, 3, 3, 3, 3] {
///     sketch.insert(x);
/// }
///
/// let three = sketch.count_one(3).unwrap();
/// assert!(three.as_f64() >= 4.0);
///
/// // The neighbor-cancelling estimate is signed and may land below the true count.
/// let _ = sketch.count_two(3);
/// ```
#[derive(Clone, Debug)]
pub struct AbSketch {
    /// One hash function per row
    hashes: Vec<UniversalHash>,
    /// `hashes.len() x bucket_count` counters
    counters: CounterMatrix,
    /// Number of insertions
    num_updates: u64,
}

impl AbSketch {
    /// Create a sketch whose hash functions are seeded from OS entropy
    ///
    /// # Arguments
    ///
    /// * `hash_count` - Number of rows (A); more rows tighten the median
    /// * `bucket_count` - Buckets per row (B); must be even
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn new(hash_count: usize, bucket_count: usize) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::from_entropy();
        Self::with_rng(hash_count, bucket_count, DEFAULT_PRIME, &mut rng)
    }

    /// Create a sketch with reproducible hash functions
    ///
    /// Two sketches built with the same arguments hash identically.
    pub fn with_seed(
        hash_count: usize,
        bucket_count: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(hash_count, bucket_count, DEFAULT_PRIME, &mut rng)
    }

    /// Create a sketch drawing its hash parameters from `rng`
    ///
    /// # Arguments
    ///
    /// * `hash_count` - Number of rows (A)
    /// * `bucket_count` - Buckets per row (B); must be even
    /// * `prime` - Modulus of the hash family; must exceed `bucket_count`
    /// * `rng` - Source of each row's multiplier and offset
    pub fn with_rng<R: Rng + ?Sized>(
        hash_count: usize,
        bucket_count: usize,
        prime: u64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        check_dimensions(hash_count, bucket_count)?;

        let hashes = (0..hash_count)
            .map(|_| UniversalHash::new(bucket_count, prime, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::assemble(hashes, bucket_count))
    }

    /// Create a sketch from prebuilt hash functions, one per row
    ///
    /// Every function must map into the same range, which becomes the bucket
    /// count.
    pub fn from_hashes(hashes: Vec<UniversalHash>) -> Result<Self, ConfigError> {
        let bucket_count = hashes.first().ok_or(ConfigError::ZeroHashCount)?.range();
        check_dimensions(hashes.len(), bucket_count)?;

        if let Some(h) = hashes.iter().find(|h| h.range() != bucket_count) {
            return Err(ConfigError::RangeMismatch {
                expected: bucket_count,
                found: h.range(),
            });
        }

        Ok(Self::assemble(hashes, bucket_count))
    }

    fn assemble(hashes: Vec<UniversalHash>, bucket_count: usize) -> Self {
        let counters = CounterMatrix::new(hashes.len(), bucket_count);

        log::debug!(
            "AbSketch created: rows={}, buckets={}, prime={}, bytes={}",
            hashes.len(),
            bucket_count,
            hashes[0].prime(),
            counters.size_bytes()
        );

        Self {
            hashes,
            counters,
            num_updates: 0,
        }
    }

    /// Number of hash functions (A)
    pub fn hash_count(&self) -> usize {
        self.hashes.len()
    }

    /// Buckets per row (B)
    pub fn bucket_count(&self) -> usize {
        self.counters.cols()
    }

    /// Modulus shared by the first row's hash function
    pub fn prime(&self) -> u64 {
        self.hashes[0].prime()
    }

    pub fn hashes(&self) -> &[UniversalHash] {
        &self.hashes
    }

    pub fn counters(&self) -> &CounterMatrix {
        &self.counters
    }

    /// Record one occurrence of `x`
    pub fn insert(&mut self, x: i64) {
        self.num_updates += 1;

        for (row, hash) in self.hashes.iter().enumerate() {
            self.counters.increment(row, hash.bucket(x));
        }
    }

    /// `(row, bucket)` for every row's hash of `key`
    pub fn buckets(&self, key: i64) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.hashes
            .iter()
            .enumerate()
            .map(move |(row, hash)| (row, hash.bucket(key)))
    }

    /// Estimate the frequency of `key` with the given strategy
    pub fn query<E: Estimator + ?Sized>(&self, estimator: &E, key: i64) -> Option<Estimate> {
        estimator.estimate(self, key)
    }

    /// Direct median estimate; never below the true count
    pub fn count_one(&self, x: i64) -> Option<Estimate> {
        self.query(&DirectMedian, x)
    }

    /// Neighbor-cancelling estimate; signed, may under- or overshoot
    pub fn count_two(&self, x: i64) -> Option<Estimate> {
        self.query(&NeighborCancellation, x)
    }

    /// Additive count-min error bound, `ceil(e * count / bucket_count)`
    ///
    /// [`count_one`](Self::count_one) exceeds the true count by more than this
    /// only with small probability, shrinking as rows are added.
    pub fn error_bound(&self) -> u64 {
        let epsilon = core::f64::consts::E / self.bucket_count() as f64;
        math::ceil(epsilon * self.num_updates as f64) as u64
    }
}

fn check_dimensions(hash_count: usize, bucket_count: usize) -> Result<(), ConfigError> {
    if hash_count == 0 {
        return Err(ConfigError::ZeroHashCount);
    }
    if bucket_count == 0 {
        return Err(ConfigError::ZeroBucketCount);
    }
    if bucket_count % 2 != 0 {
        return Err(ConfigError::OddBucketCount { bucket_count });
    }
    Ok(())
}

impl Sketch for AbSketch {
    type Item = i64;

    fn update(&mut self, item: &i64) {
        self.insert(*item);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.counters.size_bytes()
            + self.hashes.len() * core::mem::size_of::<UniversalHash>()
    }

    fn count(&self) -> u64 {
        self.num_updates
    }
}

impl FrequencySketch for AbSketch {
    fn estimate_frequency(&self, item: &i64) -> Option<Estimate> {
        self.count_one(*item)
    }
}
