//! Column-major matrix: an ordered sequence of equal-length columns.

use super::layout::{check_non_jagged, MatrixLayout, Orientation};
use super::{ColumnVector, Element, RowMajorMatrix};
use crate::error::Result;
use std::ops::{Index, IndexMut};

/// A `rows × cols` matrix whose columns are stored contiguously.
///
/// `Clone` duplicates every column buffer; no storage is ever shared
/// between two matrices. Indexing with a single `usize` yields a whole
/// column, indexing with `(i, j)` yields the element at row `i`, column `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColMajorMatrix<T> {
    rows: usize,
    columns: Vec<ColumnVector<T>>,
}

impl<T: Element> ColMajorMatrix<T> {
    /// Zero-filled matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            columns: (0..cols).map(|_| ColumnVector::zeros(rows)).collect(),
        }
    }

    /// Build from a nested literal where each inner slice is one column.
    ///
    /// The shape is inferred: `rows` is the inner length, `cols` the outer.
    /// A jagged literal is rejected before any column is allocated.
    ///
    /// ```
    /// use gram_schmidt_lab::matrix::ColMajorMatrix;
    ///
    /// let m = ColMajorMatrix::from_columns(&[[11, 21, 31], [12, 22, 32]].map(|c| c.map(f64::from)))
    ///     .unwrap();
    /// assert_eq!((m.rows(), m.cols()), (3, 2));
    /// assert_eq!(m[(2, 0)], 31.0);
    /// ```
    pub fn from_columns<C: AsRef<[T]>>(columns: &[C]) -> Result<Self> {
        let rows = check_non_jagged(columns)?;
        Ok(Self {
            rows,
            columns: columns
                .iter()
                .map(|c| ColumnVector::from_vec(c.as_ref().to_vec()))
                .collect(),
        })
    }

    /// Build element by element from `f(i, j)`
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            rows,
            columns: (0..cols)
                .map(|j| ColumnVector::from_vec((0..rows).map(|i| f(i, j)).collect()))
                .collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn column(&self, j: usize) -> &ColumnVector<T> {
        &self.columns[j]
    }

    #[inline]
    pub fn column_mut(&mut self, j: usize) -> &mut ColumnVector<T> {
        &mut self.columns[j]
    }

    pub fn columns(&self) -> &[ColumnVector<T>] {
        &self.columns
    }

    /// Borrow column `dst` mutably and column `src` shared at the same time.
    ///
    /// # Panics
    /// Panics if `dst == src` or either index is out of range.
    pub fn column_pair_mut(&mut self, dst: usize, src: usize) -> (&mut ColumnVector<T>, &ColumnVector<T>) {
        assert_ne!(dst, src, "column_pair_mut needs two distinct columns");
        if dst < src {
            let (head, tail) = self.columns.split_at_mut(src);
            (&mut head[dst], &tail[0])
        } else {
            let (head, tail) = self.columns.split_at_mut(dst);
            (&mut tail[0], &head[src])
        }
    }

    /// `true` when every element is finite
    pub fn is_finite(&self) -> bool {
        self.columns.iter().all(ColumnVector::is_finite)
    }

    /// Iterator over all elements, column by column
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.columns.iter().flat_map(|c| c.iter())
    }
}

impl<T: Element> MatrixLayout<T> for ColMajorMatrix<T> {
    const ORIENTATION: Orientation = Orientation::ColMajor;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> T {
        self.columns[j][i]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: T) {
        self.columns[j][i] = value;
    }

    fn column_vector(&self, j: usize) -> ColumnVector<T> {
        self.columns[j].clone()
    }
}

impl<T> Index<usize> for ColMajorMatrix<T> {
    type Output = ColumnVector<T>;

    #[inline]
    fn index(&self, j: usize) -> &ColumnVector<T> {
        &self.columns[j]
    }
}

impl<T> IndexMut<usize> for ColMajorMatrix<T> {
    #[inline]
    fn index_mut(&mut self, j: usize) -> &mut ColumnVector<T> {
        &mut self.columns[j]
    }
}

impl<T> Index<(usize, usize)> for ColMajorMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.columns[j][i]
    }
}

impl<T> IndexMut<(usize, usize)> for ColMajorMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.columns[j][i]
    }
}

impl<T: Element> From<&RowMajorMatrix<T>> for ColMajorMatrix<T> {
    fn from(m: &RowMajorMatrix<T>) -> Self {
        Self::from_fn(m.rows(), m.cols(), |i, j| m[(i, j)])
    }
}
