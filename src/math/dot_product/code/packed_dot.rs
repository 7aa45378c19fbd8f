//! Packed-register dot products (4 × `f64` per step).
//!
//! Both kernels multiply four lanes at a time, fold each product into a
//! packed accumulator with a horizontal pairwise add, then add the four
//! accumulator lanes into the caller's scalar. Input lengths must be a
//! whole number of registers; there is no tail loop.

use super::packed::{check_whole_registers, PackedF64x4};
use crate::error::{LabError, Result};

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
use super::x86_64_avx as lanes;

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
use super::portable as lanes;

/// `true` when the packed kernels run on AVX instructions rather than the
/// portable lane emulation
pub const HARDWARE_PACKED: bool = cfg!(all(target_arch = "x86_64", target_feature = "avx"));

fn check_operands(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(LabError::LengthMismatch { left, right });
    }
    if left == 0 {
        return Err(LabError::EmptyOperand("packed dot"));
    }
    Ok(())
}

/// Dot product of two flat arrays loaded four elements at a time.
///
/// The result is added into `acc`, and the new `acc` is returned.
///
/// # Errors
/// [`LabError::LengthMismatch`], [`LabError::EmptyOperand`], or
/// [`LabError::PackedLength`] when the length is not a multiple of 4.
pub fn dot_packed(u: &[f64], v: &[f64], acc: &mut f64) -> Result<f64> {
    check_operands(u.len(), v.len())?;
    check_whole_registers(u.len())?;

    *acc += lanes::hadd_accumulate_flat(u, v).lane_sum();
    Ok(*acc)
}

/// Dot product of two arrays the caller already grouped into registers.
///
/// # Errors
/// [`LabError::LengthMismatch`] or [`LabError::EmptyOperand`].
pub fn dot_prepacked(u: &[PackedF64x4], v: &[PackedF64x4], acc: &mut f64) -> Result<f64> {
    check_operands(u.len(), v.len())?;

    *acc += lanes::hadd_accumulate_packed(u, v).lane_sum();
    Ok(*acc)
}
