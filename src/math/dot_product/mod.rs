//! # Dot product
//!
//! `dot(u, v) = Σ u[i] * v[i]` over `f64` arrays, comparing a scalar
//! index-order loop, packed 4-lane kernels (AVX when compiled with it, a
//! portable lane emulation otherwise) and the same scalar loop compiled
//! from C.
//!
//! The packed kernels only take whole registers, so sizes that are not a
//! multiple of 4 run the scalar kernels alone.

pub mod code;
pub mod test;

pub use code::*;

use std::sync::Arc;

use crate::error::Result;
use crate::measure;
use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

pub struct DotProductRunner;

impl AlgorithmRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product_f64"
    }

    fn description(&self) -> &'static str {
        "Sum of products of two f64 arrays"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        DotStrategy::available().into_iter().map(|s| s.name()).collect()
    }

    fn default_sizes(&self) -> Vec<usize> {
        (0..20).map(|i| 40 << i).collect()
    }

    fn size_label(&self, size: usize) -> String {
        format!("{} elements", size)
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        let ops = match test::random_operands(size, seed) {
            Ok(ops) => Arc::new(ops),
            Err(_) => return Vec::new(),
        };

        DotStrategy::available()
            .into_iter()
            .filter(|s| s.accepts_len(size))
            .map(|strategy| {
                let ops = Arc::clone(&ops);
                Variant {
                    name: strategy.name(),
                    description: strategy.description(),
                    run: Box::new(move || -> Result<_> {
                        let mut acc = 0.0;
                        let (elapsed, result) = measure!(strategy.dot(&ops, &mut acc));
                        Ok((elapsed, Some(result?)))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}
