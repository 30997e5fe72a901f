//! __coomat__ implements integer sparse matrices in coordinate (COO)
//! dictionary form: only non-zero entries are stored, keyed by `(row, col)`
//! coordinate pairs.
//!
//! ## Features
//!
//! * __Zero-suppressed storage__: writing a zero removes the entry, so the
//!   backing map never holds a zero value ([`algebra::SparseMatrix`]).
//!
//! * __Sparse arithmetic__: elementwise addition and subtraction iterate
//!   over the union of stored coordinates, and multiplication uses sparse
//!   accumulation, so costs scale with the number of stored entries rather
//!   than the full dense index range.
//!
//! * __Coordinate-list text format__: matrices read from and render to a
//!   `rows=` / `cols=` header followed by one `(row,col,value)` line per
//!   stored entry, with deterministic output ordering ([`io`]).
//!
//! Scalars are generic over [`algebra::IntT`] (`i32`, `i64` or `i128`),
//! with `i64` as the default type parameter.

/// crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
