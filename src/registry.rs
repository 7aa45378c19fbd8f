//! Registry of benchmarkable algorithms.
//!
//! Each algorithm implements [`AlgorithmRunner`]; the CLI finds runners by
//! name and drives them through the same sampling loop.

use crate::error::Result;
use crate::utils::timer::Variant;

/// An algorithm with several competing variants
pub trait AlgorithmRunner: Send + Sync {
    /// Unique name (e.g. "gram_schmidt_f64")
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Category (e.g. "math")
    fn category(&self) -> &'static str;

    /// Variants compiled into this build, baseline first
    fn available_variants(&self) -> Vec<&'static str>;

    /// Sizes run when the user gives none
    fn default_sizes(&self) -> Vec<usize>;

    /// What one size unit means, for table headers
    fn size_label(&self, size: usize) -> String {
        size.to_string()
    }

    /// One closure per variant for inputs of `size`, generated from `seed`.
    /// Each call performs and times exactly one execution.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>>;

    /// Check every variant against the reference
    fn verify(&self) -> Result<()>;
}

#[derive(Default)]
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }
}

/// Registry with every algorithm of the lab
pub fn build_registry() -> AlgorithmRegistry {
    use crate::math::dot_product::DotProductRunner;
    use crate::math::gram_schmidt::{GramSchmidtRunner, Precision};

    let mut registry = AlgorithmRegistry::new();
    registry.register(GramSchmidtRunner::new(Precision::F32));
    registry.register(GramSchmidtRunner::new(Precision::F64));
    registry.register(DotProductRunner);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let registry = build_registry();
        assert_eq!(
            registry.list_names(),
            vec!["gram_schmidt_f32", "gram_schmidt_f64", "dot_product_f64"]
        );
        assert!(registry.all().iter().all(|a| a.category() == "math"));
        assert!(registry.find("dot_product_f64").is_some());
        assert!(registry.find("nope").is_none());
    }

    #[test]
    fn test_every_runner_yields_one_closure_per_variant() {
        let registry = build_registry();
        for algo in registry.all() {
            let size = algo.default_sizes()[0];
            let closures = algo.get_variant_closures(size, 3);
            let names: Vec<_> = closures.iter().map(|v| v.name).collect();
            assert_eq!(names, algo.available_variants(), "{}", algo.name());
        }
    }
}
