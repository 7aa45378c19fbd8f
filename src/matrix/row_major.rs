//! Row-major matrix: same logical shape, one flat buffer with rows
//! laid out back to back.

use super::layout::{check_non_jagged, MatrixLayout, Orientation};
use super::{ColMajorMatrix, ColumnVector, Element};
use crate::error::Result;
use std::ops::{Index, IndexMut};

/// A `rows × cols` matrix stored in a single buffer, row stride `cols`.
///
/// Element `(i, j)` lives at `i * cols + j`. Walking down a column steps
/// `cols` elements at a time, so column access is strided here while it is
/// contiguous in [`ColMajorMatrix`].
#[derive(Clone, Debug, PartialEq)]
pub struct RowMajorMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> RowMajorMatrix<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Build from a nested literal where each inner slice is one row
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = check_non_jagged(rows)?;
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            data.extend((0..cols).map(|j| f(i, j)));
        }
        Self { rows, cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Contiguous storage of row `i`
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The whole buffer in row order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> MatrixLayout<T> for RowMajorMatrix<T> {
    const ORIENTATION: Orientation = Orientation::RowMajor;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
    }

    fn row_vector(&self, i: usize) -> ColumnVector<T> {
        ColumnVector::from_vec(self.row(i).to_vec())
    }
}

impl<T> Index<(usize, usize)> for RowMajorMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(j < self.cols, "column {} out of range", j);
        &self.data[i * self.cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for RowMajorMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(j < self.cols, "column {} out of range", j);
        &mut self.data[i * self.cols + j]
    }
}

impl<T: Element> From<&ColMajorMatrix<T>> for RowMajorMatrix<T> {
    fn from(m: &ColMajorMatrix<T>) -> Self {
        Self::from_fn(m.rows(), m.cols(), |i, j| m[(i, j)])
    }
}
