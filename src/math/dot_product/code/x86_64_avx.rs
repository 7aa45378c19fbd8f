//! x86_64 AVX packed kernels.
//!
//! Each step multiplies two 256-bit registers and folds the product into
//! the accumulator with `vhaddpd`. Only compiled when AVX is enabled for
//! the whole build (`-C target-cpu=native` or `-C target-feature=+avx`).

use std::arch::x86_64::*;

use super::packed::{PackedF64x4, LANES};

/// Packed accumulator over flat slices (unaligned loads).
///
/// Callers guarantee equal lengths that are a multiple of 4.
pub(super) fn hadd_accumulate_flat(u: &[f64], v: &[f64]) -> PackedF64x4 {
    debug_assert_eq!(u.len(), v.len());
    let mut out = PackedF64x4::ZERO;
    unsafe {
        let mut acc = _mm256_setzero_pd();
        for (a, b) in u.chunks_exact(LANES).zip(v.chunks_exact(LANES)) {
            let x = _mm256_loadu_pd(a.as_ptr());
            let y = _mm256_loadu_pd(b.as_ptr());
            acc = _mm256_hadd_pd(acc, _mm256_mul_pd(x, y));
        }
        _mm256_store_pd(out.0.as_mut_ptr(), acc);
    }
    out
}

/// Packed accumulator over pre-packed registers (aligned loads)
pub(super) fn hadd_accumulate_packed(u: &[PackedF64x4], v: &[PackedF64x4]) -> PackedF64x4 {
    debug_assert_eq!(u.len(), v.len());
    let mut out = PackedF64x4::ZERO;
    unsafe {
        let mut acc = _mm256_setzero_pd();
        for (a, b) in u.iter().zip(v.iter()) {
            // PackedF64x4 is 32-byte aligned
            let x = _mm256_load_pd(a.0.as_ptr());
            let y = _mm256_load_pd(b.0.as_ptr());
            acc = _mm256_hadd_pd(acc, _mm256_mul_pd(x, y));
        }
        _mm256_store_pd(out.0.as_mut_ptr(), acc);
    }
    out
}
