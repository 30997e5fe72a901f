#![allow(non_snake_case)]

use crate::algebra::{IndexError, IntT, ShapedMatrix};
use std::collections::HashMap;

/// Sparse matrix in coordinate (COO) dictionary form.
///
/// Only non-zero entries are stored, keyed by `(row, col)`. Writing a zero
/// removes any stored entry, so the backing map never holds a zero value.
///
/// __Example usage__ : To construct the 2 x 3 matrix
/// ```text
/// A = [5  0   0]
///     [0  0  -2]
/// ```
///
/// ```
/// use coomat::algebra::SparseMatrix;
///
/// let A: SparseMatrix = SparseMatrix::from_entries(
///    2,                        // m
///    3,                        // n
///    [(0, 0, 5), (1, 2, -2)],  // (row, col, value) triples
/// ).unwrap();
///
/// assert_eq!(A.nnz(), 2);
/// assert_eq!(A.get(0, 0), 5);
/// assert_eq!(A.get(0, 1), 0);
/// ```
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// non-zero entries keyed by `(row, col)`
    pub(crate) entries: HashMap<(usize, usize), T>,
}

impl<T> SparseMatrix<T>
where
    T: IntT,
{
    /// An `m` x `n` matrix with no stored entries.
    pub fn zeros(m: usize, n: usize) -> Self {
        Self {
            m,
            n,
            entries: HashMap::new(),
        }
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let entries = (0..n).map(|i| ((i, i), T::one())).collect();
        Self { m: n, n, entries }
    }

    /// Builds a matrix from `(row, col, value)` triples.
    ///
    /// Zero values are dropped rather than stored. Fails with [`IndexError`]
    /// on the first out-of-bounds coordinate, returning no partial matrix.
    pub fn from_entries<I>(m: usize, n: usize, triples: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut A = Self::zeros(m, n);
        for (row, col, value) in triples {
            A.set(row, col, value)?;
        }
        Ok(A)
    }

    /// number of stored non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// true if no non-zero entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value at `(row, col)`, or zero when no entry is stored
    /// there. Coordinates outside the declared dimensions also read as zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Writes `value` at `(row, col)`.
    ///
    /// A zero value removes any stored entry at that coordinate. Fails with
    /// [`IndexError`] when the coordinate falls outside the declared
    /// dimensions, leaving the matrix unchanged.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), IndexError> {
        if row >= self.m || col >= self.n {
            return Err(IndexError {
                row: row as i64,
                col: col as i64,
                nrows: self.m,
                ncols: self.n,
            });
        }
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Iterates over stored entries as `(row, col, value)` triples, in
    /// arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries.iter().map(|(&(row, col), &value)| (row, col, value))
    }
}

impl<T> ShapedMatrix for SparseMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
    fn is_square(&self) -> bool {
        self.m == self.n
    }
}

#[test]
fn test_coo_zero_write_removes_entry() {
    let mut A = SparseMatrix::<i64>::zeros(3, 3);

    A.set(1, 2, 7).unwrap();
    assert_eq!(A.get(1, 2), 7);
    assert_eq!(A.nnz(), 1);

    A.set(1, 2, 0).unwrap();
    assert_eq!(A.get(1, 2), 0);
    assert!(A.is_empty());
}
