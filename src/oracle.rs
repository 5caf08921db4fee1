//! Exact per-key counting
//!
//! [`ExactCounter`] keeps a full key-to-count map. It costs memory linear in
//! the number of distinct keys, which is what the sketches avoid, but it gives
//! the true frequency to check their estimates against.

use crate::traits::{Estimate, FrequencySketch, Sketch};

#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap as HashMap;

/// Exact frequency counter
///
/// # Example
///
/// ```
/// use abcount::oracle::ExactCounter;
///
/// let mut exact = ExactCounter::new();
/// exact.insert(3);
/// exact.insert(3);
///
/// assert_eq!(exact.query(3), 2);
/// assert_eq!(exact.query(4), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExactCounter {
    counts: HashMap<i64, u64>,
    total: u64,
}

impl ExactCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `x`
    pub fn insert(&mut self, x: i64) {
        *self.counts.entry(x).or_insert(0) += 1;
        self.total += 1;
    }

    /// Exact count of `x`, zero if never seen
    pub fn query(&self, x: i64) -> u64 {
        self.counts.get(&x).copied().unwrap_or(0)
    }

    /// Number of distinct keys seen
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of insertions
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate over `(key, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }
}

impl Sketch for ExactCounter {
    type Item = i64;

    fn update(&mut self, item: &i64) {
        self.insert(*item);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.counts.len() * (core::mem::size_of::<i64>() + core::mem::size_of::<u64>())
    }

    fn count(&self) -> u64 {
        self.total
    }
}

impl FrequencySketch for ExactCounter {
    fn estimate_frequency(&self, item: &i64) -> Option<Estimate> {
        Some(Estimate::Count(
            i64::try_from(self.query(*item)).unwrap_or(i64::MAX),
        ))
    }
}
