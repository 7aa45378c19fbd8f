//! # Gram-Schmidt orthonormalization
//!
//! Modified Gram-Schmidt over the columns of a column-major matrix:
//!
//! ```text
//! for k in 0..cols:
//!     R[k][k] = len(A[:,k]);  Q[:,k] = A[:,k] / R[k][k]
//!     for j in k+1..cols:
//!         R[k][j] = dot(Q[:,k], A[:,j]);  A[:,j] -= R[k][j] * Q[:,k]
//! ```
//!
//! The in-place variants compute identical values and differ only in how
//! the projection `R[k][j] * Q[:,k]` is staged: a fresh temporary per
//! update, a raw copy into the dead column `A[:,k]`, or a copy-assignment
//! into that column.
//!
//! Each benchmark sample restores a random square matrix outside the timed
//! region, then times one in-place run on it.

pub mod code;
pub mod test;

pub use code::*;

use std::sync::Arc;

use crate::error::Result;
use crate::matrix::{fill_random, ColMajorMatrix, Element, RandReal};
use crate::measure;
use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

/// Element type a runner works in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    F32,
    F64,
}

pub struct GramSchmidtRunner {
    precision: Precision,
}

impl GramSchmidtRunner {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }
}

/// Square `side × side` matrix, uniform in `[-100, 100)`
pub fn random_square<T: Element>(side: usize, seed: u64) -> ColMajorMatrix<T> {
    let mut m = ColMajorMatrix::new(side, side);
    fill_random(&mut m, &mut RandReal::new(T::from_f64(-100.0), T::from_f64(100.0), seed));
    m
}

fn element_sum<T: Element>(m: &ColMajorMatrix<T>) -> f64 {
    m.iter().map(|x| x.to_f64_lossy()).sum()
}

fn variant_closures<'a, T: Element>(side: usize, seed: u64) -> Vec<Variant<'a>> {
    let base = Arc::new(random_square::<T>(side, seed));

    GramSchmidtStrategy::ALL
        .into_iter()
        .map(|strategy| {
            let base = Arc::clone(&base);
            let mut work = (*base).clone();
            Variant {
                name: strategy.name(),
                description: strategy.description(),
                run: Box::new(move || -> Result<_> {
                    for j in 0..work.cols() {
                        work.column_mut(j).copy_from(base.column(j));
                    }
                    let (elapsed, result) = measure!(strategy.apply(&mut work));
                    result?;
                    Ok((elapsed, Some(element_sum(&work))))
                }),
            }
        })
        .collect()
}

impl AlgorithmRunner for GramSchmidtRunner {
    fn name(&self) -> &'static str {
        match self.precision {
            Precision::F32 => "gram_schmidt_f32",
            Precision::F64 => "gram_schmidt_f64",
        }
    }

    fn description(&self) -> &'static str {
        match self.precision {
            Precision::F32 => "In-place modified Gram-Schmidt on f32 square matrices",
            Precision::F64 => "In-place modified Gram-Schmidt on f64 square matrices",
        }
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        GramSchmidtStrategy::ALL.iter().map(|s| s.name()).collect()
    }

    fn default_sizes(&self) -> Vec<usize> {
        vec![6, 10, 20, 40, 80, 160, 320, 640, 800, 1000]
    }

    fn size_label(&self, size: usize) -> String {
        format!("{}x{}", size, size)
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        match self.precision {
            Precision::F32 => variant_closures::<f32>(size, seed),
            Precision::F64 => variant_closures::<f64>(size, seed),
        }
    }

    fn verify(&self) -> Result<()> {
        match self.precision {
            Precision::F32 => test::verify_all::<f32>(1e-6),
            Precision::F64 => test::verify_all::<f64>(1e-9),
        }
    }
}
