//! Interface shared by the column-major and row-major matrix types.

use super::{ColumnVector, Element};

/// Physical storage orientation of a matrix type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    RowMajor,
    ColMajor,
}

/// Logical view of a `rows × cols` matrix independent of its storage.
///
/// Implementors differ only in which accesses are contiguous; every method
/// here returns the same values for the same logical matrix.
pub trait MatrixLayout<T: Element> {
    /// Orientation of the implementing type
    const ORIENTATION: Orientation;

    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Element at row `i`, column `j`
    fn get(&self, i: usize, j: usize) -> T;

    /// Overwrite the element at row `i`, column `j`
    fn set(&mut self, i: usize, j: usize, value: T);

    fn orientation(&self) -> Orientation {
        Self::ORIENTATION
    }

    /// Total number of elements
    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Copy of column `j`
    fn column_vector(&self, j: usize) -> ColumnVector<T> {
        (0..self.rows()).map(|i| self.get(i, j)).collect::<Vec<_>>().into()
    }

    /// Copy of row `i`
    fn row_vector(&self, i: usize) -> ColumnVector<T> {
        (0..self.cols()).map(|j| self.get(i, j)).collect::<Vec<_>>().into()
    }
}

/// Check that every line of a nested literal has the same length.
///
/// Returns the common inner length (0 for an empty literal).
pub(crate) fn check_non_jagged<T, L: AsRef<[T]>>(lines: &[L]) -> crate::error::Result<usize> {
    let expected = lines.first().map(|l| l.as_ref().len()).unwrap_or(0);
    for (line, l) in lines.iter().enumerate() {
        let actual = l.as_ref().len();
        if actual != expected {
            return Err(crate::error::LabError::JaggedLiteral {
                line,
                expected,
                actual,
            });
        }
    }
    Ok(expected)
}
