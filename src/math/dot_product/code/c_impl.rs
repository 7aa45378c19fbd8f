//! FFI binding for the C scalar kernel (`dot_product.c`).

use crate::error::{LabError, Result};

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;

    extern "C" {
        pub fn lab_dot_c_scalar(u: *const f64, v: *const f64, len: size_t) -> f64;
    }
}

/// Whether the C kernel was compiled into this build
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

/// Scalar index-order dot product compiled from C, added into `acc`.
///
/// # Errors
/// Same operand checks as [`super::dot_scalar`];
/// [`LabError::Unavailable`] when no C compiler was found at build time.
pub fn dot_c_scalar(u: &[f64], v: &[f64], acc: &mut f64) -> Result<f64> {
    if u.len() != v.len() {
        return Err(LabError::LengthMismatch {
            left: u.len(),
            right: v.len(),
        });
    }
    if u.is_empty() {
        return Err(LabError::EmptyOperand("dot"));
    }
    *acc += c_scalar(u, v)?;
    Ok(*acc)
}

#[cfg(c_implementation_active)]
fn c_scalar(u: &[f64], v: &[f64]) -> Result<f64> {
    // SAFETY: both pointers cover `u.len()` elements, checked above
    Ok(unsafe { ffi::lab_dot_c_scalar(u.as_ptr(), v.as_ptr(), u.len()) })
}

#[cfg(not(c_implementation_active))]
fn c_scalar(_u: &[f64], _v: &[f64]) -> Result<f64> {
    Err(LabError::Unavailable("c-scalar (no C compiler at build time)"))
}
