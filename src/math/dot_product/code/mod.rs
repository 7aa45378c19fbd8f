//! Dot product implementations.
//!
//! All kernels share one calling convention: two operands plus an
//! accumulator that the result is added into.

pub mod c_impl;
pub mod packed;
mod packed_dot;
mod scalar;

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
mod portable;
#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
mod x86_64_avx;

pub use c_impl::{dot_c_scalar, C_IMPL_AVAILABLE};
pub use packed::{pack, unpack, PackedF64x4, LANES};
pub use packed_dot::{dot_packed, dot_prepacked, HARDWARE_PACKED};
pub use scalar::dot_scalar;

use crate::error::{LabError, Result};

/// One pair of input arrays in every form the kernels consume.
///
/// The pre-packed form exists only when the length is a whole number of
/// registers.
#[derive(Clone, Debug)]
pub struct DotOperands {
    u: Vec<f64>,
    v: Vec<f64>,
    packed: Option<(Vec<PackedF64x4>, Vec<PackedF64x4>)>,
}

impl DotOperands {
    /// # Errors
    /// [`LabError::LengthMismatch`] if `u` and `v` differ in length.
    pub fn new(u: Vec<f64>, v: Vec<f64>) -> Result<Self> {
        if u.len() != v.len() {
            return Err(LabError::LengthMismatch {
                left: u.len(),
                right: v.len(),
            });
        }
        let packed = match (pack(&u), pack(&v)) {
            (Ok(pu), Ok(pv)) => Some((pu, pv)),
            _ => None,
        };
        Ok(Self { u, v, packed })
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    pub fn flat(&self) -> (&[f64], &[f64]) {
        (&self.u, &self.v)
    }

    pub fn packed(&self) -> Option<(&[PackedF64x4], &[PackedF64x4])> {
        self.packed.as_ref().map(|(pu, pv)| (pu.as_slice(), pv.as_slice()))
    }
}

/// The dot-product kernels under comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotStrategy {
    /// Single scalar accumulator (baseline)
    Scalar,
    /// Packed registers loaded from flat arrays
    Packed,
    /// Packed registers prepared by the caller
    PrePacked,
    /// Scalar kernel compiled from C
    CScalar,
}

impl DotStrategy {
    /// Every strategy, baseline first
    pub const ALL: [DotStrategy; 4] = [
        DotStrategy::Scalar,
        DotStrategy::Packed,
        DotStrategy::PrePacked,
        DotStrategy::CScalar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DotStrategy::Scalar => "scalar",
            DotStrategy::Packed => "packed",
            DotStrategy::PrePacked => "prepacked",
            DotStrategy::CScalar => "c-scalar",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DotStrategy::Scalar => "Single accumulator, index order",
            DotStrategy::Packed if HARDWARE_PACKED => "AVX 4 x f64 loads from flat arrays, hadd fold",
            DotStrategy::Packed => "Emulated 4 x f64 lanes from flat arrays, hadd fold",
            DotStrategy::PrePacked if HARDWARE_PACKED => "AVX 4 x f64 on pre-packed registers, hadd fold",
            DotStrategy::PrePacked => "Emulated 4 x f64 lanes on pre-packed registers, hadd fold",
            DotStrategy::CScalar => "C single accumulator, index order",
        }
    }

    /// Compiled into this build
    pub fn is_available(self) -> bool {
        match self {
            DotStrategy::CScalar => C_IMPL_AVAILABLE,
            _ => true,
        }
    }

    /// Can run on operands of length `len`
    pub fn accepts_len(self, len: usize) -> bool {
        match self {
            DotStrategy::Packed | DotStrategy::PrePacked => len % LANES == 0,
            _ => true,
        }
    }

    /// Strategies compiled into this build
    pub fn available() -> Vec<DotStrategy> {
        Self::ALL.into_iter().filter(|s| s.is_available()).collect()
    }

    /// Run this kernel on `ops`, adding the result into `acc`
    #[inline]
    pub fn dot(self, ops: &DotOperands, acc: &mut f64) -> Result<f64> {
        let (u, v) = ops.flat();
        match self {
            DotStrategy::Scalar => dot_scalar(u, v, acc),
            DotStrategy::Packed => dot_packed(u, v, acc),
            DotStrategy::PrePacked => match ops.packed() {
                Some((pu, pv)) => dot_prepacked(pu, pv, acc),
                None => Err(LabError::PackedLength {
                    len: ops.len(),
                    width: LANES,
                }),
            },
            DotStrategy::CScalar => dot_c_scalar(u, v, acc),
        }
    }
}
