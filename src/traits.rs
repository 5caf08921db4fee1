//! Core traits and shared value types
//!
//! Every structure in this crate implements the base [`Sketch`] trait. Point
//! queries go through [`FrequencySketch`], which answers with an [`Estimate`].

use core::fmt::{self, Debug};

/// Error raised when a sketch or hash function is built with unusable parameters
///
/// Every variant is a permanent precondition violation. Nothing is deferred
/// to query time: once construction succeeds, inserts and queries cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The sketch needs at least one hash function (row)
    ZeroHashCount,
    /// Every row needs at least one bucket
    ZeroBucketCount,
    /// Neighbor pairing needs an even number of buckets per row
    OddBucketCount { bucket_count: usize },
    /// The modulus must be at least 2 and larger than the bucket count
    PrimeTooSmall { prime: u64, bucket_count: usize },
    /// Multiplier must lie in `[1, prime)`
    InvalidMultiplier { multiplier: u64, prime: u64 },
    /// Offset must lie in `[0, prime)`
    InvalidOffset { offset: u64, prime: u64 },
    /// All hash functions of one sketch must share a range
    RangeMismatch { expected: usize, found: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroHashCount => write!(f, "hash function count must be positive"),
            ConfigError::ZeroBucketCount => write!(f, "bucket count must be positive"),
            ConfigError::OddBucketCount { bucket_count } => {
                write!(f, "bucket count must be even, found {}", bucket_count)
            }
            ConfigError::PrimeTooSmall {
                prime,
                bucket_count,
            } => write!(
                f,
                "prime {} must be at least 2 and exceed bucket count {}",
                prime, bucket_count
            ),
            ConfigError::InvalidMultiplier { multiplier, prime } => {
                write!(f, "multiplier {} outside [1, {})", multiplier, prime)
            }
            ConfigError::InvalidOffset { offset, prime } => {
                write!(f, "offset {} outside [0, {})", offset, prime)
            }
            ConfigError::RangeMismatch { expected, found } => {
                write!(f, "hash range mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// A frequency estimate
///
/// Odd sample counts produce an exact integer [`Estimate::Count`]. Even sample
/// counts average two sorted samples and produce [`Estimate::Midpoint`], which
/// may be fractional. Both convert to `f64` for comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// A single sample picked by the median
    Count(i64),
    /// The mean of two samples picked by the median
    Midpoint(f64),
}

impl Estimate {
    /// The estimate as a float
    pub fn as_f64(&self) -> f64 {
        match *self {
            Estimate::Count(c) => c as f64,
            Estimate::Midpoint(m) => m,
        }
    }

    /// The integer count, if this estimate came from a single sample
    pub fn as_count(&self) -> Option<i64> {
        match *self {
            Estimate::Count(c) => Some(c),
            Estimate::Midpoint(_) => None,
        }
    }

    /// True for midpoints, which may carry a fractional part
    pub fn is_midpoint(&self) -> bool {
        matches!(self, Estimate::Midpoint(_))
    }
}

impl From<Estimate> for f64 {
    fn from(estimate: Estimate) -> f64 {
        estimate.as_f64()
    }
}

impl From<i64> for Estimate {
    fn from(count: i64) -> Self {
        Estimate::Count(count)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Count(c) => write!(f, "{}", c),
            Estimate::Midpoint(m) => write!(f, "{:.1}", m),
        }
    }
}

/// Core trait for all stream summaries
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add one occurrence of an item
    fn update(&mut self, item: &Self::Item);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Frequency estimation sketches
pub trait FrequencySketch: Sketch {
    /// Estimate frequency of an item
    ///
    /// `None` means the estimate is undefined (no samples to aggregate).
    fn estimate_frequency(&self, item: &Self::Item) -> Option<Estimate>;

    /// Check if frequency reaches threshold
    fn exceeds_threshold(&self, item: &Self::Item, threshold: u64) -> bool {
        self.estimate_frequency(item)
            .map(|e| e.as_f64() >= threshold as f64)
            .unwrap_or(false)
    }
}
