//! Rectangular grid of increment-only counters

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// A `rows x cols` grid of non-negative counters, stored row-major
///
/// Cells start at zero and only ever grow. The shape is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u64>,
}

impl CounterMatrix {
    /// Allocate a zeroed grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0u64; rows * cols],
        }
    }

    /// Add one to a cell
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn increment(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].saturating_add(1);
    }

    /// Current value of a cell
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn read(&self, row: usize, col: usize) -> u64 {
        self.cells[self.index(row, col)]
    }

    /// All counters of one row
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn row(&self, row: usize) -> &[u64] {
        assert!(row < self.rows, "row {} out of bounds ({} rows)", row, self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Sum of the first row
    ///
    /// Every insertion into a sketch touches each row exactly once, so this
    /// equals the number of insertions.
    pub fn total(&self) -> u64 {
        if self.rows == 0 {
            return 0;
        }
        self.row(0).iter().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.cells.len() * core::mem::size_of::<u64>()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "counter ({}, {}) out of bounds ({}x{})",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed() {
        let m = CounterMatrix::new(3, 4);
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        for r in 0..3 {
            assert!(m.row(r).iter().all(|&c| c == 0));
        }
        assert_eq!(m.total(), 0);
    }

    #[test]
    fn test_increment_single_cell() {
        let mut m = CounterMatrix::new(2, 3);
        m.increment(1, 2);
        m.increment(1, 2);
        m.increment(0, 0);

        assert_eq!(m.read(1, 2), 2);
        assert_eq!(m.read(0, 0), 1);
        assert_eq!(m.read(0, 2), 0);
        assert_eq!(m.read(1, 0), 0);
        assert_eq!(m.row(1), &[0, 0, 2]);
    }

    #[test]
    fn test_total_counts_first_row() {
        let mut m = CounterMatrix::new(2, 4);
        for col in [0, 1, 1, 3] {
            m.increment(0, col);
            m.increment(1, 3 - col);
        }
        assert_eq!(m.total(), 4);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_increment_out_of_bounds() {
        let mut m = CounterMatrix::new(2, 2);
        m.increment(0, 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_read_out_of_bounds() {
        let m = CounterMatrix::new(2, 2);
        m.read(2, 0);
    }

    #[test]
    fn test_size_bytes_grows_with_shape() {
        let small = CounterMatrix::new(2, 2);
        let large = CounterMatrix::new(10, 100);
        assert!(large.size_bytes() > small.size_bytes());
    }
}
