//! Vector kernels: dot product, Euclidean length and normalization.
//!
//! Summation always runs left to right in index order with a single
//! accumulator. Results are reproducible run to run, but no pairwise or
//! compensated summation is attempted.

use super::{ColumnVector, Element};
use crate::error::{LabError, Result};

/// Index-order dot product of two slices.
///
/// # Errors
/// [`LabError::LengthMismatch`] when the lengths differ,
/// [`LabError::EmptyOperand`] when both are empty.
#[inline]
pub fn dot_slices<T: Element>(u: &[T], v: &[T]) -> Result<T> {
    if u.len() != v.len() {
        return Err(LabError::LengthMismatch {
            left: u.len(),
            right: v.len(),
        });
    }
    if u.is_empty() {
        return Err(LabError::EmptyOperand("dot"));
    }

    let mut sum = T::zero();
    for (&a, &b) in u.iter().zip(v.iter()) {
        sum = sum + a * b;
    }
    Ok(sum)
}

/// Sum of elementwise products of `u` and `v`
///
/// ```
/// use gram_schmidt_lab::matrix::{dot, ColumnVector};
///
/// let u = ColumnVector::from_vec(vec![1.0, 2.0, 3.0]);
/// let v = ColumnVector::from_vec(vec![4.0, 5.0, 6.0]);
/// assert_eq!(dot(&u, &v).unwrap(), 32.0);
/// ```
#[inline]
pub fn dot<T: Element>(u: &ColumnVector<T>, v: &ColumnVector<T>) -> Result<T> {
    dot_slices(u.as_slice(), v.as_slice())
}

/// Euclidean length `sqrt(dot(v, v))`
#[inline]
pub fn len<T: Element>(v: &ColumnVector<T>) -> Result<T> {
    Ok(dot(v, v)?.sqrt())
}

/// Normalize `v` in place by multiplying with `1 / len(v)`.
///
/// A zero vector is not special-cased: `1 / 0` is infinite and every
/// element becomes NaN.
pub fn unit<T: Element>(v: &mut ColumnVector<T>) -> Result<()> {
    let scale = T::one() / len(v)?;
    *v *= scale;
    Ok(())
}

/// Normalized copy of `v`; `v` itself is left unchanged
pub fn unit_copy<T: Element>(v: &ColumnVector<T>) -> Result<ColumnVector<T>> {
    let mut r = v.clone();
    unit(&mut r)?;
    Ok(r)
}
