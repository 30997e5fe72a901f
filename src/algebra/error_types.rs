use thiserror::Error;

/// Error type returned by bounds-checked element writes.
///
/// Coordinates are reported as signed values so that negative indices
/// arriving from parsed input can be shown as written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("index ({row},{col}) is out of bounds for a {nrows}x{ncols} matrix")]
pub struct IndexError {
    /// requested row
    pub row: i64,
    /// requested column
    pub col: i64,
    /// row dimension of the target matrix
    pub nrows: usize,
    /// column dimension of the target matrix
    pub ncols: usize,
}

/// Error type returned by arithmetic on dimensionally incompatible operands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionMismatchError {
    /// Elementwise operation on operands of unequal dimensions
    #[error("operands must have equal dimensions ({0}x{1} vs {2}x{3})")]
    NotEqual(usize, usize, usize, usize),
    /// Matrix product with mismatched inner dimensions
    #[error("inner dimensions must agree ({0}x{1} times {2}x{3})")]
    InnerDimension(usize, usize, usize, usize),
}
