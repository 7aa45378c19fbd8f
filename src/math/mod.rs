//! Numerical kernels under measurement.

pub mod dot_product;
pub mod gram_schmidt;
