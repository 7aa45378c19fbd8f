//! 4-lane packed `f64` register values.

use crate::error::{LabError, Result};

/// Number of `f64` lanes in one packed register
pub const LANES: usize = 4;

/// One 256-bit register's worth of `f64`, aligned for aligned vector loads.
///
/// Only the dot-product kernels use this type; arrays of it are built from
/// flat data with [`pack`] and scattered back with [`unpack`].
#[repr(C, align(32))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PackedF64x4(pub [f64; LANES]);

impl PackedF64x4 {
    pub const ZERO: PackedF64x4 = PackedF64x4([0.0; LANES]);

    /// Load four contiguous elements.
    ///
    /// # Panics
    /// Panics if `chunk.len() != 4`.
    #[inline]
    pub fn from_slice(chunk: &[f64]) -> Self {
        let mut lanes = [0.0; LANES];
        lanes.copy_from_slice(chunk);
        PackedF64x4(lanes)
    }

    /// Lane-wise product
    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        PackedF64x4([a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]])
    }

    /// Horizontal pairwise add with the same lane layout as `vhaddpd`:
    /// `[a0+a1, b0+b1, a2+a3, b2+b3]`
    #[inline]
    pub fn hadd(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        PackedF64x4([a[0] + a[1], b[0] + b[1], a[2] + a[3], b[2] + b[3]])
    }

    /// Sum of the four lanes in lane order
    #[inline]
    pub fn lane_sum(self) -> f64 {
        self.0.iter().fold(0.0, |acc, &x| acc + x)
    }
}

/// Group a flat array into packed registers.
///
/// # Errors
/// [`LabError::PackedLength`] if `flat.len()` is not a multiple of 4. No
/// zero padding is ever applied.
pub fn pack(flat: &[f64]) -> Result<Vec<PackedF64x4>> {
    check_whole_registers(flat.len())?;
    Ok(flat.chunks_exact(LANES).map(PackedF64x4::from_slice).collect())
}

/// Scatter packed registers back into a flat array
pub fn unpack(packed: &[PackedF64x4]) -> Vec<f64> {
    packed.iter().flat_map(|p| p.0).collect()
}

#[inline]
pub(crate) fn check_whole_registers(len: usize) -> Result<()> {
    if len % LANES != 0 {
        return Err(LabError::PackedLength { len, width: LANES });
    }
    Ok(())
}
