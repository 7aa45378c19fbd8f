//! Verification and tests for the dot product kernels.

use super::code::{DotOperands, DotStrategy};
use crate::error::{LabError, Result};
use crate::matrix::RandReal;

/// Random operands of length `len`, uniform in `[-100, 100)`
pub fn random_operands(len: usize, seed: u64) -> Result<DotOperands> {
    let mut rnd = RandReal::new(-100.0, 100.0, seed);
    let u: Vec<f64> = (0..len).map(|_| rnd.next_value()).collect();
    let v: Vec<f64> = (0..len).map(|_| rnd.next_value()).collect();
    DotOperands::new(u, v)
}

/// Bound on the rounding difference between two summation orders
fn tolerance(ops: &DotOperands) -> f64 {
    let (u, v) = ops.flat();
    let magnitude: f64 = u.iter().zip(v).map(|(a, b)| (a * b).abs()).sum();
    magnitude * 1e-12
}

/// Check every available kernel against the scalar one.
pub fn verify_all() -> Result<()> {
    for len in [4, 16, 1024, 4096] {
        let ops = random_operands(len, 0xd07 + len as u64)?;
        let expected = DotStrategy::Scalar.dot(&ops, &mut 0.0)?;
        let tol = tolerance(&ops);

        for strategy in DotStrategy::available() {
            let result = strategy.dot(&ops, &mut 0.0)?;
            let diff = (result - expected).abs();
            if !(diff <= tol) {
                return Err(LabError::Verification(format!(
                    "variant '{}' at length {}: expected {}, got {}, diff {}",
                    strategy.name(),
                    len,
                    expected,
                    result,
                    diff
                )));
            }
        }
    }

    // Packed kernels must refuse a partial register
    let ops = random_operands(1023, 1)?;
    for strategy in [DotStrategy::Packed, DotStrategy::PrePacked] {
        if !matches!(strategy.dot(&ops, &mut 0.0), Err(LabError::PackedLength { .. })) {
            return Err(LabError::Verification(format!(
                "variant '{}' accepted a length that is not a multiple of 4",
                strategy.name()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::dot_product::code::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(a: f64, b: f64, msg: &str) {
        let diff = (a - b).abs();
        assert!(diff < EPSILON, "{}: expected {}, got {}, diff = {}", msg, b, a, diff);
    }

    /// Sixteen-element operands with a hand-checked dot product of 193
    fn fixed_operands() -> DotOperands {
        let u = vec![1., 2., 3., 4., 1., 1., 3., 4., 1., 1., 1., 4., 1., 1., 2., 2.];
        let v = vec![4., 5., 6., 7., 4., 5., 6., 7., 4., 5., 6., 7., 4., 5., 6., 7.];
        DotOperands::new(u, v).unwrap()
    }

    #[test]
    fn test_scalar_basic() {
        let mut acc = 0.0;
        let result = dot_scalar(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0], &mut acc).unwrap();
        assert_close(result, 70.0, "scalar basic");
    }

    #[test]
    fn test_fixed_operands_all_kernels() {
        let ops = fixed_operands();
        for strategy in DotStrategy::available() {
            let result = strategy.dot(&ops, &mut 0.0).unwrap();
            assert_close(result, 193.0, strategy.name());
        }
    }

    #[test]
    fn test_result_is_added_into_accumulator() {
        let ops = fixed_operands();
        for strategy in DotStrategy::available() {
            let mut acc = 7.0;
            let result = strategy.dot(&ops, &mut acc).unwrap();
            assert_close(result, 200.0, strategy.name());
            assert_eq!(acc, result);
        }
    }

    #[test]
    fn test_single_register() {
        let mut acc = 0.0;
        let result = dot_packed(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0], &mut acc).unwrap();
        assert_close(result, 70.0, "packed single register");
    }

    #[test]
    fn test_packed_rejects_partial_register() {
        let u = [1.0; 6];
        let err = dot_packed(&u, &u, &mut 0.0).unwrap_err();
        assert!(matches!(err, LabError::PackedLength { len: 6, width: 4 }));
        assert!(pack(&u).is_err());

        let ops = DotOperands::new(u.to_vec(), u.to_vec()).unwrap();
        assert!(ops.packed().is_none());
        assert!(matches!(
            DotStrategy::PrePacked.dot(&ops, &mut 0.0),
            Err(LabError::PackedLength { .. })
        ));
        // The scalar kernel has no such restriction
        assert_close(DotStrategy::Scalar.dot(&ops, &mut 0.0).unwrap(), 6.0, "scalar len 6");
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        assert!(matches!(
            dot_scalar(&[1.0, 2.0], &[1.0], &mut 0.0),
            Err(LabError::LengthMismatch { left: 2, right: 1 })
        ));
        assert!(matches!(
            dot_packed(&[1.0; 8], &[1.0; 4], &mut 0.0),
            Err(LabError::LengthMismatch { .. })
        ));
        assert!(matches!(
            dot_prepacked(&[PackedF64x4::ZERO; 2], &[PackedF64x4::ZERO; 1], &mut 0.0),
            Err(LabError::LengthMismatch { .. })
        ));
        assert!(DotOperands::new(vec![1.0; 3], vec![1.0; 4]).is_err());
    }

    #[test]
    fn test_empty_operands_fail() {
        let ops = DotOperands::new(Vec::new(), Vec::new()).unwrap();
        for strategy in DotStrategy::available() {
            assert!(
                matches!(strategy.dot(&ops, &mut 0.0), Err(LabError::EmptyOperand(_))),
                "{} accepted empty input",
                strategy.name()
            );
        }
    }

    #[test]
    fn test_pack_unpack_preserves_order() {
        let flat: Vec<f64> = (0..12).map(f64::from).collect();
        let packed = pack(&flat).unwrap();
        assert_eq!(packed.len(), 3);
        assert_eq!(packed[1], PackedF64x4([4.0, 5.0, 6.0, 7.0]));
        assert_eq!(unpack(&packed), flat);
    }

    #[test]
    fn test_packed_registers_are_aligned() {
        assert_eq!(std::mem::align_of::<PackedF64x4>(), 32);
        let packed = pack(&[0.0; 16]).unwrap();
        assert_eq!(packed.as_ptr() as usize % 32, 0);
    }

    #[test]
    fn test_hadd_lane_layout() {
        let a = PackedF64x4([1.0, 2.0, 3.0, 4.0]);
        let b = PackedF64x4([10.0, 20.0, 30.0, 40.0]);
        assert_eq!(a.hadd(b), PackedF64x4([3.0, 30.0, 7.0, 70.0]));
        assert_eq!(a.hadd(b).lane_sum(), a.lane_sum() + b.lane_sum());
    }

    #[test]
    fn test_c_kernel_reports_availability() {
        let ops = fixed_operands();
        let result = DotStrategy::CScalar.dot(&ops, &mut 0.0);
        if C_IMPL_AVAILABLE {
            assert_close(result.unwrap(), 193.0, "c-scalar");
        } else {
            assert!(matches!(result, Err(LabError::Unavailable(_))));
        }
    }

    #[test]
    fn test_verify_all() {
        verify_all().unwrap();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_kernels_agree(
            registers in 1usize..64,
            seed in any::<u64>(),
        ) {
            let ops = random_operands(registers * LANES, seed).unwrap();
            let expected = DotStrategy::Scalar.dot(&ops, &mut 0.0).unwrap();
            let tol = tolerance(&ops);
            for strategy in DotStrategy::available() {
                let got = strategy.dot(&ops, &mut 0.0).unwrap();
                prop_assert!((got - expected).abs() <= tol, "{}: {} vs {}", strategy.name(), got, expected);
            }
        }

        #[test]
        fn prop_self_dot_non_negative(data in prop::collection::vec(-1e3f64..1e3, 1..256)) {
            let mut acc = 0.0;
            prop_assert!(dot_scalar(&data, &data, &mut acc).unwrap() >= 0.0);
        }
    }
}
