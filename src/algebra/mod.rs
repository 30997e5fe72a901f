//! Integer sparse matrix types and arithmetic.

use num_traits::{NumAssign, PrimInt, Signed};

/// Trait for scalars usable as matrix entries.
///
/// Arithmetic uses the scalar's native fixed-width semantics; overflow
/// handling is the caller's concern. The default scalar is `i64`, with
/// `i128` available where extra headroom is needed.
pub trait IntT:
    'static
    + PrimInt
    + Signed
    + NumAssign
    + std::str::FromStr<Err = std::num::ParseIntError>
    + std::fmt::Display
    + std::fmt::Debug
{
}
impl IntT for i32 {}
impl IntT for i64 {}
impl IntT for i128 {}

mod coo;
mod error_types;
mod matrix_traits;
pub use coo::*;
pub use error_types::*;
pub use matrix_traits::*;
