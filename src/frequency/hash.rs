//! Pairwise-independent hashing over integers
//!
//! Each [`UniversalHash`] is one member of the Carter-Wegman family
//! `h(x) = ((a * x + b) mod p) mod R`, with `a` and `b` drawn at random.

use crate::traits::ConfigError;
use rand::Rng;
use xxhash_rust::xxh3::xxh3_64;

/// Default modulus for the hash family
pub const DEFAULT_PRIME: u64 = 879_190_841;

/// Multipliers are drawn from `[1, MULTIPLIER_BOUND)`
const MULTIPLIER_BOUND: u64 = 1_000_000;

/// Offsets are drawn from `[0, OFFSET_BOUND)`
const OFFSET_BOUND: u64 = 1_000;

/// One hash function of a universal family, mapping `i64` keys to `[0, range)`
///
/// # Example
///
/// ```
/// use abcount::frequency::UniversalHash;
///
/// let h = UniversalHash::from_parts(3, 7, 101, 10).unwrap();
/// assert_eq!(h.bucket(5), ((3 * 5 + 7) % 101) % 10);
/// assert!(h.bucket(-42) < 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniversalHash {
    a: u64,
    b: u64,
    prime: u64,
    range: usize,
}

impl UniversalHash {
    /// Draw a hash function from the family using the given random source
    ///
    /// `prime` should be prime for the pairwise-independence guarantee to hold.
    /// Primality is not verified.
    pub fn new<R: Rng + ?Sized>(
        range: usize,
        prime: u64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        check_range(range, prime)?;

        let a = rng.gen_range(1..MULTIPLIER_BOUND.min(prime));
        let b = rng.gen_range(0..OFFSET_BOUND.min(prime));

        log::trace!(
            "UniversalHash drawn: a={}, b={}, p={}, range={}",
            a,
            b,
            prime,
            range
        );

        Ok(Self { a, b, prime, range })
    }

    /// Draw a hash function modulo [`DEFAULT_PRIME`]
    pub fn with_default_prime<R: Rng + ?Sized>(
        range: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Self::new(range, DEFAULT_PRIME, rng)
    }

    /// Build a hash function from explicit parameters
    ///
    /// Two functions with equal parameters hash identically.
    pub fn from_parts(a: u64, b: u64, prime: u64, range: usize) -> Result<Self, ConfigError> {
        check_range(range, prime)?;
        if a == 0 || a >= prime {
            return Err(ConfigError::InvalidMultiplier {
                multiplier: a,
                prime,
            });
        }
        if b >= prime {
            return Err(ConfigError::InvalidOffset { offset: b, prime });
        }
        Ok(Self { a, b, prime, range })
    }

    /// Map a key to its bucket in `[0, range)`
    ///
    /// Negative keys are reduced with Euclidean remainder first, so `x` and
    /// `x + p` always land in the same bucket.
    #[inline]
    pub fn bucket(&self, x: i64) -> usize {
        let p = self.prime as u128;
        let x = (x as i128).rem_euclid(p as i128) as u128;
        let h = (self.a as u128 * x + self.b as u128) % p;
        (h % self.range as u128) as usize
    }

    pub fn multiplier(&self) -> u64 {
        self.a
    }

    pub fn offset(&self) -> u64 {
        self.b
    }

    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// Number of buckets this function maps into
    pub fn range(&self) -> usize {
        self.range
    }
}

fn check_range(range: usize, prime: u64) -> Result<(), ConfigError> {
    if range == 0 {
        return Err(ConfigError::ZeroBucketCount);
    }
    if prime < 2 || prime as u128 <= range as u128 {
        return Err(ConfigError::PrimeTooSmall {
            prime,
            bucket_count: range,
        });
    }
    Ok(())
}

/// Fold an arbitrary byte item into the integer key space
///
/// Lets string or binary streams feed a sketch that hashes integers.
#[inline]
pub fn item_key(item: &[u8]) -> i64 {
    xxh3_64(item) as i64
}
