//! In-place Gram-Schmidt staging through copy construction.

use crate::error::Result;
use crate::matrix::{dot, len, ColMajorMatrix, Element};

/// Same recurrence as [`super::gram_schmidt_inplace`], but every staged
/// column is a freshly cloned vector assigned over the old one, instead of
/// a raw copy into the existing buffer.
pub fn gram_schmidt_inplace_eliminate_temporary_copy<T: Element>(
    q: &mut ColMajorMatrix<T>,
) -> Result<()> {
    let mut a = q.clone();

    for k in 0..a.cols() {
        q[k] = a[k].clone();
        let norm = len(&a[k])?;
        q[k] /= norm;
        for j in k + 1..a.cols() {
            a[k] = q[k].clone();
            let r = dot(&q[k], &a[j])?;
            a[k] *= r;
            let (target, staged) = a.column_pair_mut(j, k);
            *target -= staged;
        }
    }

    Ok(())
}
