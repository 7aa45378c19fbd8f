//! Scalar dot product: one accumulator, index order.

use crate::error::Result;
use crate::matrix::kernels::dot_slices;
use crate::matrix::Element;

/// Add the dot product of `u` and `v` into `acc` and return the new value.
///
/// Same summation as [`crate::matrix::dot`], over plain slices.
///
/// # Example
/// ```
/// use gram_schmidt_lab::math::dot_product::dot_scalar;
///
/// let mut acc = 0.0;
/// let result = dot_scalar(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut acc).unwrap();
/// assert_eq!(result, 32.0);
/// assert_eq!(acc, 32.0);
/// ```
#[inline]
pub fn dot_scalar<T: Element>(u: &[T], v: &[T], acc: &mut T) -> Result<T> {
    *acc = *acc + dot_slices(u, v)?;
    Ok(*acc)
}
