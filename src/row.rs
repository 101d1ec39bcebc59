//! CellRow - A fixed-length row of binary cells backed by the bitvec crate.
//!
//! One `CellRow` holds a single generation of the automaton. Cells are
//! bit-packed into 32-bit words (`BitVec<u32, Lsb0>`), which keeps a full
//! evolution history cheap to retain and makes row equality a word-level
//! comparison.
//!
//! # Examples
//!
//! ```
//! use cella::CellRow;
//!
//! let mut row = CellRow::new(100);
//! row.set(50, 1);
//! assert_eq!(row.get(50), 1);
//! assert_eq!(row.count_live(), 1);
//! ```

use crate::error::{CellaError, Result};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// A fixed-length row of binary cells.
///
/// Cell values are exposed as `u8` (0 or 1) at the API surface and stored
/// as packed bits internally. All cell indices are 0-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRow {
    /// Underlying bitvec storage with u32 words, LSB0 ordering
    bv: BitVec<u32, Lsb0>,
}

impl CellRow {
    /// Create a new row of `len` cells, all initialized to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use cella::CellRow;
    ///
    /// let row = CellRow::new(200);
    /// assert_eq!(row.len(), 200);
    /// assert_eq!(row.count_live(), 0);
    /// ```
    #[inline]
    pub fn new(len: usize) -> Self {
        Self {
            bv: BitVec::repeat(false, len),
        }
    }

    /// Create a row from a slice of cell values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInitialCondition` if any value is not 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use cella::CellRow;
    ///
    /// let row = CellRow::from_cells(&[1, 0, 1, 1, 0]).unwrap();
    /// assert_eq!(row.count_live(), 3);
    ///
    /// assert!(CellRow::from_cells(&[0, 2, 0]).is_err());
    /// ```
    pub fn from_cells(cells: &[u8]) -> Result<Self> {
        let mut bv = BitVec::with_capacity(cells.len());
        for (i, &cell) in cells.iter().enumerate() {
            if cell > 1 {
                return Err(CellaError::InvalidInitialCondition(format!(
                    "cell {} has value {}, cells must be 0 or 1",
                    i, cell
                )));
            }
            bv.push(cell == 1);
        }
        Ok(Self { bv })
    }

    /// Get total number of cells.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bv.len()
    }

    /// Check whether the row holds no cells.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bv.is_empty()
    }

    /// Get the cell at position `i` (returns 0 or 1 as u8).
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        self.bv[i] as u8
    }

    /// Set the cell at position `i` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`. Panics in debug mode if `value` is not 0 or 1.
    #[inline]
    pub fn set(&mut self, i: usize, value: u8) {
        debug_assert!(value <= 1, "cell value {} out of range, must be 0 or 1", value);
        self.bv.set(i, value == 1);
    }

    /// Count the live (value 1) cells.
    #[inline]
    pub fn count_live(&self) -> usize {
        self.bv.count_ones()
    }

    /// Iterate over the cells as `u8` values, in position order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cella::CellRow;
    ///
    /// let row = CellRow::from_cells(&[1, 0, 1]).unwrap();
    /// let cells: Vec<u8> = row.cells().collect();
    /// assert_eq!(cells, vec![1, 0, 1]);
    /// ```
    pub fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.bv.iter().by_vals().map(u8::from)
    }

    /// Copy the row out as a `Vec<u8>` of 0/1 values.
    pub fn to_vec(&self) -> Vec<u8> {
        self.cells().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let row = CellRow::new(64);
        assert_eq!(row.len(), 64);
        assert_eq!(row.count_live(), 0);
        for i in 0..64 {
            assert_eq!(row.get(i), 0);
        }
    }

    #[test]
    fn test_set_get() {
        let mut row = CellRow::new(10);
        row.set(3, 1);
        row.set(7, 1);
        assert_eq!(row.get(3), 1);
        assert_eq!(row.get(7), 1);
        assert_eq!(row.get(4), 0);

        row.set(3, 0);
        assert_eq!(row.get(3), 0);
    }

    #[test]
    fn test_from_cells() {
        let row = CellRow::from_cells(&[1, 0, 1, 1, 0]).unwrap();
        assert_eq!(row.len(), 5);
        assert_eq!(row.to_vec(), vec![1, 0, 1, 1, 0]);
    }

    #[test]
    fn test_from_cells_rejects_non_binary() {
        let err = CellRow::from_cells(&[0, 1, 2]).unwrap_err();
        assert!(matches!(err, CellaError::InvalidInitialCondition(_)));
        assert!(err.to_string().contains("cell 2 has value 2"));
    }

    #[test]
    fn test_count_live() {
        let row = CellRow::from_cells(&[1, 1, 0, 1, 0, 0]).unwrap();
        assert_eq!(row.count_live(), 3);
    }

    #[test]
    fn test_equality() {
        let a = CellRow::from_cells(&[1, 0, 1]).unwrap();
        let b = CellRow::from_cells(&[1, 0, 1]).unwrap();
        let c = CellRow::from_cells(&[1, 1, 1]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty() {
        let row = CellRow::new(0);
        assert!(row.is_empty());
        assert_eq!(row.to_vec(), Vec::<u8>::new());
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds() {
        let row = CellRow::new(4);
        row.get(4);
    }
}
