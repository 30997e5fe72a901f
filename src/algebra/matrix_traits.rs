/// Dimension queries shared by matrix types.
pub trait ShapedMatrix {
    /// number of rows
    fn nrows(&self) -> usize;
    /// number of columns
    fn ncols(&self) -> usize;
    /// dimensions as a `(rows, cols)` pair
    fn size(&self) -> (usize, usize);
    /// true if `self.nrows() == self.ncols()`
    fn is_square(&self) -> bool;
}
