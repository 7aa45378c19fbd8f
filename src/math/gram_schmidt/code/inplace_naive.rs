//! In-place Gram-Schmidt written the straightforward way.
//!
//! This is the baseline: every normalization and every projection builds a
//! fresh temporary vector.

use crate::error::Result;
use crate::matrix::{dot, len, ColMajorMatrix, Element};

/// Replace the columns of `q` with an orthonormal basis of their span,
/// allocating one temporary column per update.
pub fn gram_schmidt_inplace_naive<T: Element>(q: &mut ColMajorMatrix<T>) -> Result<()> {
    let mut a = q.clone();

    for k in 0..a.cols() {
        q[k] = &a[k] / len(&a[k])?;
        for j in k + 1..a.cols() {
            let projection = &q[k] * dot(&q[k], &a[j])?;
            a[j] -= &projection;
        }
    }

    Ok(())
}
