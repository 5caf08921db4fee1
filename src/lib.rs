//! # abcount
//!
//! Bounded-memory frequency estimation for integer streams.
//!
//! An [`AbSketch`] keeps `A` universal hash functions and an `A x B` grid of
//! counters. Every insertion bumps one counter per row; a query reads the
//! counters its key hashes to and takes their median. Memory is fixed at
//! `A * B` counters regardless of how many distinct keys the stream holds.
//!
//! ## Features
//!
//! - **Universal hashing**: `((a*x + b) mod p) mod B`, with `a` and `b` drawn
//!   from an injectable random source
//! - **Two estimators**: a direct median that never underestimates, and a
//!   neighbor-cancelling median that trades that guarantee for less
//!   collision bias
//! - **Exact baseline**: [`oracle::ExactCounter`] for checking estimates
//!
//! ## Quick Start
//!
//! ```rust
//! use abcount::prelude::*;
//!
//! let mut sketch = AbSketch::with_seed(100, 200, 42).unwrap();
//! let mut exact = ExactCounter::new();
//!
//! for x in [1, 2, 3, 3, 3, 3] {
//!     sketch.insert(x);
//!     exact.insert(x);
//! }
//!
//! let estimate = sketch.count_one(3).unwrap();
//! assert!(estimate.as_f64() >= exact.query(3) as f64);
//! println!("count_one(3) = {}, count_two(3) = {:?}", estimate, sketch.count_two(3));
//! ```
//!
//! ## Byte items
//!
//! Non-integer items are folded into keys with
//! [`item_key`](frequency::item_key):
//!
//! ```rust
//! use abcount::frequency::{item_key, AbSketch};
//!
//! let mut sketch = AbSketch::with_seed(5, 64, 1).unwrap();
//! sketch.insert(item_key(b"alice"));
//! assert!(sketch.count_one(item_key(b"alice")).unwrap().as_f64() >= 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support and entropy-seeded
//!   [`AbSketch::new`]. Without it the crate is `no_std` + `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod frequency;
pub mod oracle;

mod math;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::frequency::{
        AbSketch, CounterMatrix, DirectMedian, Estimator, NeighborCancellation, Strategy,
        UniversalHash,
    };
    pub use crate::oracle::ExactCounter;
}

pub use frequency::AbSketch;
pub use oracle::ExactCounter;
pub use traits::{ConfigError, Estimate};
