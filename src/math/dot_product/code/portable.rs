//! Lane-emulated packed kernels for targets built without AVX.
//!
//! Performs exactly the lane arithmetic of the AVX path, so both builds
//! return bit-identical results.

use super::packed::{PackedF64x4, LANES};

pub(super) fn hadd_accumulate_flat(u: &[f64], v: &[f64]) -> PackedF64x4 {
    u.chunks_exact(LANES)
        .zip(v.chunks_exact(LANES))
        .fold(PackedF64x4::ZERO, |acc, (a, b)| {
            acc.hadd(PackedF64x4::from_slice(a).mul(PackedF64x4::from_slice(b)))
        })
}

pub(super) fn hadd_accumulate_packed(u: &[PackedF64x4], v: &[PackedF64x4]) -> PackedF64x4 {
    u.iter()
        .zip(v.iter())
        .fold(PackedF64x4::ZERO, |acc, (&a, &b)| acc.hadd(a.mul(b)))
}
