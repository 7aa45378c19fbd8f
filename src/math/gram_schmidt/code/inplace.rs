//! In-place Gram-Schmidt staging the projection through a raw buffer copy.

use crate::error::Result;
use crate::matrix::{dot, len, ColMajorMatrix, Element};

/// Replace the columns of `q` with an orthonormal basis of their span.
///
/// Keeps one working copy `A` of the input. Once column `k` of `Q` is
/// final, `A[:,k]` is dead and its buffer is reused as the scratch column
/// for `R[k][j] * Q[:,k]`, filled with [`crate::matrix::ColumnVector::copy_from`]
/// so the inner loop never allocates.
pub fn gram_schmidt_inplace<T: Element>(q: &mut ColMajorMatrix<T>) -> Result<()> {
    let mut a = q.clone();

    for k in 0..a.cols() {
        q[k].copy_from(&a[k]);
        q[k] /= len(&a[k])?;
        for j in k + 1..a.cols() {
            a[k].copy_from(&q[k]);
            let r = dot(&q[k], &a[j])?;
            a[k] *= r;
            let (target, scratch) = a.column_pair_mut(j, k);
            *target -= scratch;
        }
    }

    Ok(())
}
