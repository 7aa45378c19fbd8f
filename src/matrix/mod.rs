//! # Dense matrix model
//!
//! Column vectors, a column-major matrix, a row-major matrix and the vector
//! kernels the orthogonalization algorithms are built on.
//!
//! Orientation is a property of the type, not a runtime flag:
//! [`ColMajorMatrix`] stores each column contiguously while
//! [`RowMajorMatrix`] stores each row contiguously. Both expose the same
//! logical shape through [`MatrixLayout`].

pub mod col_major;
pub mod column;
pub mod display;
pub mod kernels;
pub mod layout;
pub mod random;
pub mod row_major;

pub use col_major::ColMajorMatrix;
pub use column::ColumnVector;
pub use kernels::{dot, len, unit, unit_copy};
pub use layout::{MatrixLayout, Orientation};
pub use random::{fill_random, fill_with, RandReal};
pub use row_major::RowMajorMatrix;

use num_traits::{Float, NumCast};
use rand::distr::uniform::SampleUniform;
use std::fmt::{Debug, Display};

/// Floating-point element type a matrix or vector is instantiated with.
pub trait Element: Float + SampleUniform + Debug + Display + Default + Send + Sync + 'static {
    /// Short type name used in verification reports ("f32", "f64")
    const NAME: &'static str;

    /// Nearest representable value (NaN if the cast is impossible)
    fn from_f64(x: f64) -> Self {
        <Self as NumCast>::from(x).unwrap_or_else(Self::nan)
    }

    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Element for f32 {
    const NAME: &'static str = "f32";
}

impl Element for f64 {
    const NAME: &'static str = "f64";
}
