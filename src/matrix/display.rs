//! Diagnostic text output for vectors and matrices.
//!
//! A matrix prints as a `matrix[rows,cols]` header followed by one line per
//! row of space-separated values. The alternate flag (`{:#}`) on a
//! column-major matrix labels the header with its orientation. None of this
//! is meant to be parsed back.

use super::{ColMajorMatrix, ColumnVector, Element, MatrixLayout, RowMajorMatrix};
use std::fmt;

impl<T: Element> fmt::Display for ColumnVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.iter().copied())
    }
}

impl<T: Element> fmt::Display for ColMajorMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if f.alternate() { "column-major " } else { "" };
        write_matrix(f, self, label)
    }
}

impl<T: Element> fmt::Display for RowMajorMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, self, "")
    }
}

fn write_matrix<T: Element, M: MatrixLayout<T>>(
    f: &mut fmt::Formatter<'_>,
    m: &M,
    label: &str,
) -> fmt::Result {
    writeln!(f, "{}matrix[{},{}]", label, m.rows(), m.cols())?;
    for i in 0..m.rows() {
        write_values(f, (0..m.cols()).map(|j| m.get(i, j)))?;
        writeln!(f)?;
    }
    Ok(())
}

fn write_values<T: Element>(f: &mut fmt::Formatter<'_>, values: impl Iterator<Item = T>) -> fmt::Result {
    for (n, x) in values.enumerate() {
        if n > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", x)?;
    }
    Ok(())
}
