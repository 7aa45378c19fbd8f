//! Uniform random fill for matrices.

use super::{Element, MatrixLayout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator of uniformly distributed reals in `[low, high)`
pub struct RandReal<T> {
    rng: StdRng,
    low: T,
    high: T,
}

impl<T: Element> RandReal<T> {
    /// # Panics
    /// Panics if `low >= high`.
    pub fn new(low: T, high: T, seed: u64) -> Self {
        assert!(low < high, "empty range [{}, {})", low, high);
        Self {
            rng: StdRng::seed_from_u64(seed),
            low,
            high,
        }
    }

    #[inline]
    pub fn next_value(&mut self) -> T {
        self.rng.random_range(self.low..self.high)
    }
}

/// Overwrite every element of `m`, row by row, with values from `next`
pub fn fill_with<T: Element, M: MatrixLayout<T>>(m: &mut M, mut next: impl FnMut() -> T) {
    for i in 0..m.rows() {
        for j in 0..m.cols() {
            m.set(i, j, next());
        }
    }
}

/// Fill `m` from a [`RandReal`] generator
pub fn fill_random<T: Element, M: MatrixLayout<T>>(m: &mut M, rnd: &mut RandReal<T>) {
    fill_with(m, || rnd.next_value());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{ColMajorMatrix, RowMajorMatrix};

    #[test]
    fn test_values_in_range() {
        let mut rnd = RandReal::new(-100.0f32, 100.0, 7);
        for _ in 0..1000 {
            let x = rnd.next_value();
            assert!((-100.0..100.0).contains(&x));
        }
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let mut a = ColMajorMatrix::<f64>::new(4, 3);
        let mut b = ColMajorMatrix::<f64>::new(4, 3);
        fill_random(&mut a, &mut RandReal::new(-1.0, 1.0, 42));
        fill_random(&mut b, &mut RandReal::new(-1.0, 1.0, 42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_order_is_row_by_row() {
        let mut counter = 0.0;
        let mut m = RowMajorMatrix::<f64>::new(2, 3);
        fill_with(&mut m, || {
            counter += 1.0;
            counter
        });
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }
}
