//! # Gram-Schmidt Lab
//!
//! Column-oriented dense matrices, modified Gram-Schmidt orthonormalization
//! in several buffer-management strategies, scalar and packed dot-product
//! kernels, and a micro-benchmark harness comparing them.
//!
//! ```
//! use gram_schmidt_lab::prelude::*;
//!
//! let mut q = ColMajorMatrix::<f64>::from_columns(&[[3.0, 4.0], [1.0, 0.0]])?;
//! GramSchmidtStrategy::InPlace.apply(&mut q)?;
//! assert!((q[(0, 0)] - 0.6).abs() < 1e-12);
//! assert!(dot(q.column(0), q.column(1))?.abs() < 1e-12);
//! # Ok::<(), gram_schmidt_lab::LabError>(())
//! ```

pub mod error;
pub mod math;
pub mod matrix;
pub mod registry;
pub mod utils;

pub use error::{LabError, Result};

pub mod prelude {
    pub use crate::error::{LabError, Result};
    pub use crate::math::dot_product::{DotOperands, DotStrategy};
    pub use crate::math::gram_schmidt::{gram_schmidt, qr_naive, GramSchmidtStrategy, QrFactors};
    pub use crate::matrix::{
        dot, len, unit, ColMajorMatrix, ColumnVector, Element, MatrixLayout, RowMajorMatrix,
    };
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();

        for algo in registry.all() {
            if let Err(e) = algo.verify() {
                panic!("algorithm '{}' failed verification: {}", algo.name(), e);
            }
        }
    }
}
