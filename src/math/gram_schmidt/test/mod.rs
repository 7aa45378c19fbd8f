//! Verification and tests for the Gram-Schmidt implementations.

use super::code::{gram_schmidt, gram_schmidt_naive, GramSchmidtStrategy};
use crate::error::{LabError, Result};
use crate::matrix::{fill_random, ColMajorMatrix, Element, RandReal};

/// Columns of the 3×3 reference input
pub const REFERENCE_INPUT: [[f64; 3]; 3] = [[1.0, 1.0, 1.0], [2.0, 1.0, 0.0], [5.0, 1.0, 3.0]];

/// Exact orthonormal basis of [`REFERENCE_INPUT`], column by column
pub fn reference_output() -> [[f64; 3]; 3] {
    let s3 = 1.0 / 3.0f64.sqrt();
    let s2 = 1.0 / 2.0f64.sqrt();
    let s6 = 1.0 / 6.0f64.sqrt();
    [[s3, s3, s3], [s2, 0.0, -s2], [s6, -2.0 * s6, s6]]
}

fn cast_columns<T: Element>(columns: &[[f64; 3]; 3]) -> Result<ColMajorMatrix<T>> {
    let cast: Vec<Vec<T>> = columns
        .iter()
        .map(|c| c.iter().map(|&x| T::from_f64(x)).collect())
        .collect();
    ColMajorMatrix::from_columns(&cast)
}

fn check_close<T: Element>(
    what: &str,
    got: &ColMajorMatrix<T>,
    want: &ColMajorMatrix<T>,
    tolerance: T,
) -> Result<()> {
    let what = format!("{} [{}]", what, T::NAME);
    if (got.rows(), got.cols()) != (want.rows(), want.cols()) {
        return Err(LabError::Verification(format!(
            "{}: shape [{},{}] differs from [{},{}]",
            what,
            got.rows(),
            got.cols(),
            want.rows(),
            want.cols()
        )));
    }
    for j in 0..got.cols() {
        for i in 0..got.rows() {
            let diff = (got[(i, j)] - want[(i, j)]).abs();
            // NaN never passes
            if !(diff <= tolerance) {
                return Err(LabError::Verification(format!(
                    "{}: element ({}, {}) is {}, expected {} (diff {})",
                    what,
                    i,
                    j,
                    got[(i, j)],
                    want[(i, j)],
                    diff
                )));
            }
        }
    }
    Ok(())
}

/// Well-conditioned random test input: uniform entries plus a diagonal shift
pub fn random_well_conditioned<T: Element>(rows: usize, cols: usize, seed: u64) -> ColMajorMatrix<T> {
    let mut m = ColMajorMatrix::new(rows, cols);
    fill_random(&mut m, &mut RandReal::new(-T::one(), T::one(), seed));
    let shift = T::from_f64(rows as f64);
    for i in 0..rows.min(cols) {
        m[(i, i)] = m[(i, i)] + shift;
    }
    m
}

/// Check every strategy against the reference basis and against the oracle.
pub fn verify_all<T: Element>(tolerance: T) -> Result<()> {
    let a = cast_columns::<T>(&REFERENCE_INPUT)?;
    let expected = cast_columns::<T>(&reference_output())?;

    check_close("naive", &gram_schmidt_naive(&a)?, &expected, tolerance)?;
    check_close("gram_schmidt", &gram_schmidt(&a)?, &expected, tolerance)?;

    for strategy in GramSchmidtStrategy::ALL {
        let mut q = a.clone();
        strategy.apply(&mut q)?;
        check_close(strategy.name(), &q, &expected, tolerance)?;
    }

    for (rows, cols) in [(12, 12), (9, 5)] {
        let m = random_well_conditioned::<T>(rows, cols, 0x5eed + rows as u64);
        let oracle = gram_schmidt_naive(&m)?;
        for strategy in GramSchmidtStrategy::ALL {
            let mut q = m.clone();
            strategy.apply(&mut q)?;
            check_close(strategy.name(), &q, &oracle, tolerance)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::gram_schmidt::code::qr_naive;
    use crate::matrix::{dot, len};
    use proptest::prelude::*;

    fn assert_orthonormal<T: Element>(q: &ColMajorMatrix<T>, tolerance: T) {
        for i in 0..q.cols() {
            let norm = len(&q[i]).unwrap();
            assert!(
                (norm - T::one()).abs() < tolerance,
                "column {} has length {}",
                i,
                norm
            );
            for j in i + 1..q.cols() {
                let d = dot(&q[i], &q[j]).unwrap();
                assert!(d.abs() < tolerance, "columns {} and {}: dot = {}", i, j, d);
            }
        }
    }

    #[test]
    fn test_reference_matrix_f32() {
        verify_all::<f32>(1e-6).unwrap();
    }

    #[test]
    fn test_reference_matrix_f64() {
        verify_all::<f64>(1e-9).unwrap();
    }

    #[test]
    fn test_two_columns_of_four_rows() {
        let a = ColMajorMatrix::from_columns(&[[1.0f64, 1.0, 0.0, 0.0], [0.0, 2.0, 1.0, 1.0]]).unwrap();
        assert_eq!((a.rows(), a.cols()), (4, 2));

        for strategy in GramSchmidtStrategy::ALL {
            let mut q = a.clone();
            strategy.apply(&mut q).unwrap();

            let s2 = 1.0 / 2.0f64.sqrt();
            for (got, want) in q[0].iter().zip([s2, s2, 0.0, 0.0]) {
                assert!((got - want).abs() < 1e-12, "{}: {} vs {}", strategy.name(), got, want);
            }
            for (got, want) in q[1].iter().zip([-0.5, 0.5, 0.5, 0.5]) {
                assert!((got - want).abs() < 1e-12, "{}: {} vs {}", strategy.name(), got, want);
            }
            assert_orthonormal(&q, 1e-12);
        }
    }

    #[test]
    fn test_staging_strategies_compute_identical_values() {
        let m = random_well_conditioned::<f64>(9, 6, 21);
        let outputs: Vec<_> = GramSchmidtStrategy::ALL
            .iter()
            .map(|s| {
                let mut q = m.clone();
                s.apply(&mut q).unwrap();
                q
            })
            .collect();
        assert_eq!(outputs[0], outputs[1]);
        assert_eq!(outputs[1], outputs[2]);
    }

    #[test]
    fn test_out_of_place_leaves_input() {
        let a = ColMajorMatrix::from_columns(&REFERENCE_INPUT).unwrap();
        let before = a.clone();
        let _ = gram_schmidt_naive(&a).unwrap();
        let _ = gram_schmidt(&a).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn test_qr_factors_reconstruct_input() {
        let a = random_well_conditioned::<f64>(7, 5, 11);
        let f = qr_naive(&a).unwrap();
        assert_eq!((f.r.rows(), f.r.cols()), (5, 5));

        for j in 0..5 {
            for i in j + 1..5 {
                assert_eq!(f.r[(i, j)], 0.0, "R must be upper triangular");
            }
            for i in 0..7 {
                let qr: f64 = (0..5).map(|k| f.q[(i, k)] * f.r[(k, j)]).sum();
                assert!((qr - a[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_orthogonality_of_random_matrices() {
        for (rows, cols) in [(11, 11), (4, 3)] {
            let m32 = random_well_conditioned::<f32>(rows, cols, 3);
            let m64 = random_well_conditioned::<f64>(rows, cols, 3);

            for strategy in GramSchmidtStrategy::ALL {
                let mut q32 = m32.clone();
                strategy.apply(&mut q32).unwrap();
                assert_orthonormal(&q32, f32::EPSILON * 1e4);

                let mut q64 = m64.clone();
                strategy.apply(&mut q64).unwrap();
                assert_orthonormal(&q64, f64::EPSILON * 1e4);
            }
        }
    }

    #[test]
    fn test_rank_deficient_input_propagates_non_finite() {
        // Second column is twice the first: its residual is exactly zero
        let a = ColMajorMatrix::from_columns(&[[1.0f64, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 1.0, 0.0]]).unwrap();

        let mut outputs = vec![gram_schmidt_naive(&a).unwrap()];
        for strategy in GramSchmidtStrategy::ALL {
            let mut q = a.clone();
            strategy.apply(&mut q).unwrap();
            outputs.push(q);
        }

        for q in outputs {
            assert!(q[0].is_finite());
            assert!(q[1].iter().all(|x| x.is_nan()));
            assert!(q[2].iter().all(|x| x.is_nan()));
            assert!(!q.is_finite());
        }
    }

    #[test]
    fn test_zero_rows_is_domain_error() {
        let mut q = ColMajorMatrix::<f64>::new(0, 2);
        for strategy in GramSchmidtStrategy::ALL {
            assert!(matches!(strategy.apply(&mut q), Err(LabError::EmptyOperand(_))));
        }
    }

    #[test]
    fn test_zero_columns_is_noop() {
        let mut q = ColMajorMatrix::<f32>::new(3, 0);
        for strategy in GramSchmidtStrategy::ALL {
            strategy.apply(&mut q).unwrap();
        }
        assert_eq!(q.cols(), 0);
    }

    #[test]
    fn test_strategy_lookup_by_name() {
        for strategy in GramSchmidtStrategy::ALL {
            assert_eq!(GramSchmidtStrategy::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(GramSchmidtStrategy::from_name("classical"), None);
    }

    fn shape_and_entries() -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
        (1usize..10)
            .prop_flat_map(|rows| (Just(rows), 1..=rows))
            .prop_flat_map(|(rows, cols)| {
                (
                    Just(rows),
                    Just(cols),
                    prop::collection::vec(-1.0f64..1.0, rows * cols),
                )
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_strategies_agree_and_are_orthonormal((rows, cols, entries) in shape_and_entries()) {
            let mut m = ColMajorMatrix::from_fn(rows, cols, |i, j| entries[j * rows + i]);
            for i in 0..cols {
                m[(i, i)] += rows as f64 + 1.0;
            }

            let oracle = gram_schmidt_naive(&m).unwrap();
            for strategy in GramSchmidtStrategy::ALL {
                let mut q = m.clone();
                strategy.apply(&mut q).unwrap();
                prop_assert!(check_close(strategy.name(), &q, &oracle, 1e-9).is_ok());
                for i in 0..cols {
                    prop_assert!((len(&q[i]).unwrap() - 1.0).abs() < 1e-12);
                    for j in i + 1..cols {
                        prop_assert!(dot(&q[i], &q[j]).unwrap().abs() < 1e-12);
                    }
                }
            }
        }
    }
}
