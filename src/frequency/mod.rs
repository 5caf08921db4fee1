//! Frequency estimation
//!
//! This module provides an A x B counter sketch for estimating item
//! frequencies in a data stream, plus the pieces it is built from.
//!
//! # Components
//!
//! - [`UniversalHash`]: one `((a*x + b) mod p) mod B` hash function
//! - [`CounterMatrix`]: the increment-only counter grid
//! - [`AbSketch`]: one hash function per counter row
//! - [`DirectMedian`] / [`NeighborCancellation`]: median estimators
//!
//! # Example
//!
//! ```
//! use abcount::frequency::{AbSketch, Strategy};
//!
//! let mut sketch = AbSketch::with_seed(9, 128, 7).unwrap();
//!
//! for x in [1, 2, 3, 3, 3, 3] {
//!     sketch.insert(x);
//! }
//!
//! for strategy in Strategy::ALL {
//!     let estimate = sketch.query(&strategy, 3).unwrap();
//!     println!("{}: {}", strategy.name(), estimate);
//! }
//! ```

mod ab_sketch;
mod counters;
mod estimate;
mod hash;

pub use ab_sketch::AbSketch;
pub use counters::CounterMatrix;
pub use estimate::{median, neighbor, DirectMedian, Estimator, NeighborCancellation, Strategy};
pub use hash::{item_key, UniversalHash, DEFAULT_PRIME};
