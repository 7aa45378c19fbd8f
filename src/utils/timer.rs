//! Sampling loop for comparing variants of one algorithm.
//!
//! - every variant is warmed up first
//! - samples run in a shuffled order so no variant always runs first
//! - the thread is pinned to one core while sampling
//! - raw samples are kept for export

use std::hint::black_box;

use super::bench::{shuffle, to_units, Measurement};
use super::cpu_affinity::CpuPinGuard;
use crate::error::Result;

/// When the thread is pinned during sampling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Once around the whole schedule
    Global,
    /// Around every single sample
    #[default]
    PerExecution,
    /// Never
    Off,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Samples per variant (default: 30)
    pub runs_per_variant: usize,
    /// Untimed calls per variant before sampling (default: 3)
    pub warmup_iterations: usize,
    pub pin_strategy: PinStrategy,
    /// Seed of the sample schedule shuffle
    pub schedule_seed: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 3,
            pin_strategy: PinStrategy::default(),
            schedule_seed: 0,
        }
    }
}

/// Returns the time of one call and an optional checksum of its output, or
/// the error the call failed with
pub type VariantFn<'a> = Box<dyn FnMut() -> Result<(Measurement, Option<f64>)> + 'a>;

/// One variant ready to be sampled
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    pub run: VariantFn<'a>,
}

/// Statistics of one variant, all in measurement units
#[derive(Clone, Debug, PartialEq)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg: f64,
    pub median: u64,
    pub min: u64,
    pub max: u64,
    pub std_dev: f64,
    /// Every sample in execution order
    pub samples: Vec<u64>,
    /// Checksum from the last sample
    pub result_sample: Option<f64>,
}

impl VariantResult {
    /// Coefficient of variation (std-dev / avg)
    pub fn cv(&self) -> f64 {
        if self.avg > 0.0 {
            self.std_dev / self.avg
        } else {
            0.0
        }
    }
}

/// A variant dropped from the results because one of its calls failed
#[derive(Clone, Debug, PartialEq)]
pub struct VariantFailure {
    pub name: String,
    pub error: String,
}

/// Outcome of [`measure_variants`]
#[derive(Clone, Debug, Default)]
pub struct Measured {
    /// Variants whose every call succeeded, in input order
    pub results: Vec<VariantResult>,
    /// Variants with a failed call; none of their samples are kept
    pub failed: Vec<VariantFailure>,
}

/// Warm up, then sample every variant in a shuffled order.
///
/// A variant stops being scheduled at its first failed call and its
/// samples are discarded.
pub fn measure_variants(mut variants: Vec<Variant<'_>>, config: &TimingConfig) -> Measured {
    if variants.is_empty() {
        return Measured::default();
    }

    let samples = config.runs_per_variant;
    let mut errors: Vec<Option<String>> = vec![None; variants.len()];

    for (variant, error) in variants.iter_mut().zip(errors.iter_mut()) {
        for _ in 0..config.warmup_iterations {
            if let Err(e) = black_box((variant.run)()) {
                *error = Some(e.to_string());
                break;
            }
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .filter(|&v| errors[v].is_none())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    shuffle(&mut tasks, config.schedule_seed);

    let mut measurements: Vec<Vec<u64>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for idx in tasks {
        if errors[idx].is_some() {
            continue;
        }
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        match (variants[idx].run)() {
            Ok((elapsed, result)) => {
                measurements[idx].push(to_units(elapsed));
                result_samples[idx] = result;
            }
            Err(e) => errors[idx] = Some(e.to_string()),
        }
    }

    let mut measured = Measured::default();
    for (((variant, samples), result_sample), error) in variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .zip(errors)
    {
        match error {
            Some(error) => measured.failed.push(VariantFailure {
                name: variant.name.to_string(),
                error,
            }),
            None => measured.results.push(summarize(
                variant.name,
                variant.description,
                samples,
                result_sample,
            )),
        }
    }
    measured
}

/// Statistics over raw samples; an empty sample set gives all zeros
pub fn summarize(
    name: &str,
    description: &str,
    samples: Vec<u64>,
    result_sample: Option<f64>,
) -> VariantResult {
    let mut sorted = samples.clone();
    sorted.sort_unstable();

    let (avg, std_dev) = if samples.is_empty() {
        (0.0, 0.0)
    } else {
        let n = samples.len() as f64;
        let avg = samples.iter().map(|&s| s as f64).sum::<f64>() / n;
        let var = samples
            .iter()
            .map(|&s| {
                let d = s as f64 - avg;
                d * d
            })
            .sum::<f64>()
            / (samples.len() - 1).max(1) as f64;
        (avg, var.sqrt())
    };

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg,
        median: median(&sorted),
        min: sorted.first().copied().unwrap_or(0),
        max: sorted.last().copied().unwrap_or(0),
        std_dev,
        samples,
        result_sample,
    }
}

/// Upper median of an already sorted slice
fn median(sorted: &[u64]) -> u64 {
    sorted.get(sorted.len() / 2).copied().unwrap_or(0)
}
