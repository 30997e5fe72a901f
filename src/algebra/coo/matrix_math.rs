#![allow(non_snake_case)]

use crate::algebra::{DimensionMismatchError, IntT, SparseMatrix};
use itertools::Itertools;
use std::collections::HashMap;

impl<T> SparseMatrix<T>
where
    T: IntT,
{
    /// Elementwise sum, requiring equal dimensions on both operands.
    pub fn add(&self, other: &Self) -> Result<Self, DimensionMismatchError> {
        self.combine(other, |a, b| a + b)
    }

    /// Elementwise difference, requiring equal dimensions on both operands.
    pub fn subtract(&self, other: &Self) -> Result<Self, DimensionMismatchError> {
        self.combine(other, |a, b| a - b)
    }

    // Apply `op` over the union of both coordinate sets. Coordinates stored
    // in neither operand stay absent, since `0 op 0 == 0`; results that
    // evaluate to zero are likewise not stored.
    fn combine(
        &self,
        other: &Self,
        op: impl Fn(T, T) -> T,
    ) -> Result<Self, DimensionMismatchError> {
        if (self.m, self.n) != (other.m, other.n) {
            return Err(DimensionMismatchError::NotEqual(
                self.m, self.n, other.m, other.n,
            ));
        }

        let mut out = Self::zeros(self.m, self.n);
        for &(row, col) in self.entries.keys().chain(other.entries.keys()).unique() {
            let value = op(self.get(row, col), other.get(row, col));
            if !value.is_zero() {
                out.entries.insert((row, col), value);
            }
        }
        Ok(out)
    }

    /// Matrix product by sparse accumulation.
    ///
    /// Requires `self.ncols() == other.nrows()`; the result is
    /// `self.nrows()` x `other.ncols()`. Only stored entries of either
    /// operand are visited, so the cost is proportional to `nnz(self)`
    /// times the average row density of `other` rather than to the full
    /// dense index range.
    pub fn multiply(&self, other: &Self) -> Result<Self, DimensionMismatchError> {
        if self.n != other.m {
            return Err(DimensionMismatchError::InnerDimension(
                self.m, self.n, other.m, other.n,
            ));
        }

        // index the right operand by row, so each stored entry of the left
        // operand only visits the stored entries of its matching row
        let mut rows: Vec<Vec<(usize, T)>> = vec![Vec::new(); other.m];
        for (&(row, col), &value) in other.entries.iter() {
            rows[row].push((col, value));
        }

        let mut acc: HashMap<(usize, usize), T> = HashMap::new();
        for (&(i, j), &v) in self.entries.iter() {
            for &(k, w) in &rows[j] {
                *acc.entry((i, k)).or_insert_with(T::zero) += v * w;
            }
        }
        // partial products may cancel out
        acc.retain(|_, v| !v.is_zero());

        Ok(Self {
            m: self.m,
            n: other.n,
            entries: acc,
        })
    }
}
