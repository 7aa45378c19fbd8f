//! Out-of-place modified Gram-Schmidt: the reference oracle.
//!
//! Builds `Q` and `R` as separate matrices and never touches its input.

use crate::error::Result;
use crate::matrix::{dot, len, ColMajorMatrix, Element};

use super::gram_schmidt_inplace;

/// The two factors of `A = Q R`.
#[derive(Clone, Debug, PartialEq)]
pub struct QrFactors<T> {
    /// Orthonormal basis, same shape as the input
    pub q: ColMajorMatrix<T>,
    /// Upper-triangular `cols × cols` coefficients
    pub r: ColMajorMatrix<T>,
}

/// Modified Gram-Schmidt QR of `m`, keeping both factors.
///
/// # Errors
/// Fails with [`crate::error::LabError::EmptyOperand`] if `m` has columns
/// but no rows.
pub fn qr_naive<T: Element>(m: &ColMajorMatrix<T>) -> Result<QrFactors<T>> {
    let mut a = m.clone();
    let n = a.cols();
    let mut q = ColMajorMatrix::new(a.rows(), n);
    let mut r = ColMajorMatrix::new(n, n);

    for k in 0..n {
        r[(k, k)] = len(&a[k])?;
        q[k] = &a[k] / r[(k, k)];
        for j in k + 1..n {
            r[(k, j)] = dot(&q[k], &a[j])?;
            a[j] -= &(&q[k] * r[(k, j)]);
        }
    }

    Ok(QrFactors { q, r })
}

/// Orthonormal basis of `m`'s columns computed by [`qr_naive`]
pub fn gram_schmidt_naive<T: Element>(m: &ColMajorMatrix<T>) -> Result<ColMajorMatrix<T>> {
    qr_naive(m).map(|f| f.q)
}

/// Orthonormal basis of `m`'s columns, computed on a copy with
/// [`gram_schmidt_inplace`]
pub fn gram_schmidt<T: Element>(m: &ColMajorMatrix<T>) -> Result<ColMajorMatrix<T>> {
    let mut q = m.clone();
    gram_schmidt_inplace(&mut q)?;
    Ok(q)
}
