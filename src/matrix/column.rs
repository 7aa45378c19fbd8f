//! Owned fixed-length column buffer with elementwise arithmetic.

use super::Element;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A dense, contiguous vector of `T` whose length is fixed at construction.
///
/// Binary operators take their operands by reference and allocate a new
/// vector for the result. The compound assignment forms (`+=`, `-=`, `*=`,
/// `/=`) and [`ColumnVector::copy_from`] work inside the existing buffer.
///
/// # Panics
/// Every elementwise operation between two vectors panics if their lengths
/// differ.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnVector<T> {
    data: Vec<T>,
}

impl<T: Element> ColumnVector<T> {
    /// Zero-filled vector of `len` elements
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of elements (not the Euclidean length, see [`super::kernels::len`])
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Copy every element of `src` into this vector's existing buffer.
    ///
    /// Unlike assignment (`*self = src.clone()`) no buffer is allocated or
    /// dropped: this is a plain `memcpy` into storage `self` already owns.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    #[inline]
    pub fn copy_from(&mut self, src: &ColumnVector<T>) {
        check_same_len(self.len(), src.len());
        self.data.copy_from_slice(&src.data);
    }

    /// `true` when no element is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    fn zip_map(&self, rhs: &ColumnVector<T>, f: impl Fn(T, T) -> T) -> ColumnVector<T> {
        check_same_len(self.len(), rhs.len());
        ColumnVector {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    fn map(&self, f: impl Fn(T) -> T) -> ColumnVector<T> {
        ColumnVector {
            data: self.data.iter().map(|&a| f(a)).collect(),
        }
    }
}

#[inline]
#[track_caller]
fn check_same_len(left: usize, right: usize) {
    assert_eq!(
        left, right,
        "column vectors must have the same length ({} vs {})",
        left, right
    );
}

impl<T> Index<usize> for ColumnVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for ColumnVector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Element> From<Vec<T>> for ColumnVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<'a, T: Element> Add<&'a ColumnVector<T>> for &'a ColumnVector<T> {
    type Output = ColumnVector<T>;

    fn add(self, rhs: &'a ColumnVector<T>) -> ColumnVector<T> {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<'a, T: Element> Sub<&'a ColumnVector<T>> for &'a ColumnVector<T> {
    type Output = ColumnVector<T>;

    fn sub(self, rhs: &'a ColumnVector<T>) -> ColumnVector<T> {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T: Element> Mul<T> for &ColumnVector<T> {
    type Output = ColumnVector<T>;

    fn mul(self, scalar: T) -> ColumnVector<T> {
        self.map(|a| a * scalar)
    }
}

impl<T: Element> Div<T> for &ColumnVector<T> {
    type Output = ColumnVector<T>;

    fn div(self, scalar: T) -> ColumnVector<T> {
        self.map(|a| a / scalar)
    }
}

impl<T: Element> Neg for &ColumnVector<T> {
    type Output = ColumnVector<T>;

    fn neg(self) -> ColumnVector<T> {
        self.map(|a| -a)
    }
}

impl<T: Element> AddAssign<&ColumnVector<T>> for ColumnVector<T> {
    fn add_assign(&mut self, rhs: &ColumnVector<T>) {
        check_same_len(self.len(), rhs.len());
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Element> SubAssign<&ColumnVector<T>> for ColumnVector<T> {
    fn sub_assign(&mut self, rhs: &ColumnVector<T>) {
        check_same_len(self.len(), rhs.len());
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Element> MulAssign<T> for ColumnVector<T> {
    fn mul_assign(&mut self, scalar: T) {
        for a in self.data.iter_mut() {
            *a = *a * scalar;
        }
    }
}

impl<T: Element> DivAssign<T> for ColumnVector<T> {
    fn div_assign(&mut self, scalar: T) {
        for a in self.data.iter_mut() {
            *a = *a / scalar;
        }
    }
}
