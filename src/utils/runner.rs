//! Runs algorithms over their sizes and exports raw timings.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::registry::AlgorithmRunner;
use crate::utils::bench::unit_name;
use crate::utils::timer::{measure_variants, TimingConfig, VariantFailure, VariantResult};

/// All variants of one algorithm at one size
#[derive(Clone, Debug)]
pub struct SizeResults {
    pub size: usize,
    pub label: String,
    pub results: Vec<VariantResult>,
    /// Variants left out of `results` because a call failed
    pub failed: Vec<VariantFailure>,
}

#[derive(Clone, Debug)]
pub struct AlgorithmResults {
    pub algorithm: &'static str,
    pub sizes: Vec<SizeResults>,
}

/// One CSV row
#[derive(Clone, Debug, PartialEq)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg: f64,
    pub median: u64,
    pub min: u64,
    pub max: u64,
    pub result_sample: Option<f64>,
}

/// Sample every variant of `algo` at each size.
///
/// Size `i` generates its inputs from `seed + i`, so a fixed seed
/// reproduces the inputs of a whole run.
pub fn run_algorithm(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    seed: u64,
    config: &TimingConfig,
) -> AlgorithmResults {
    let sizes = sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| {
            let input_seed = seed.wrapping_add(i as u64);
            let variants = algo.get_variant_closures(size, input_seed);
            let config = TimingConfig {
                schedule_seed: input_seed.rotate_left(17),
                ..config.clone()
            };
            let measured = measure_variants(variants, &config);
            SizeResults {
                size,
                label: algo.size_label(size),
                results: measured.results,
                failed: measured.failed,
            }
        })
        .collect();

    AlgorithmResults {
        algorithm: algo.name(),
        sizes,
    }
}

/// Flatten results into CSV rows
pub fn raw_data(results: &[AlgorithmResults]) -> Vec<RawTimingData> {
    results
        .iter()
        .flat_map(|algo| {
            algo.sizes.iter().flat_map(move |size| {
                size.results.iter().map(move |r| RawTimingData {
                    algo_name: algo.algorithm.to_string(),
                    variant_name: r.name.clone(),
                    input_size: size.size,
                    avg: r.avg,
                    median: r.median,
                    min: r.min,
                    max: r.max,
                    result_sample: r.result_sample,
                })
            })
        })
        .collect()
}

/// Compiler column: the C compiler for C variants, empty otherwise
fn compiler_for(variant: &str) -> &'static str {
    if variant.starts_with("c-") {
        crate::utils::C_COMPILER_NAME.unwrap_or("unknown")
    } else {
        ""
    }
}

/// Write timing rows to `path` as CSV.
///
/// # Errors
/// [`crate::LabError::Io`] on any file error.
pub fn export_csv(path: impl AsRef<Path>, data: &[RawTimingData]) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(
        file,
        "algorithm,variant,compiler,input_size,avg,median,min,max,unit,result"
    )?;

    for entry in data {
        writeln!(
            file,
            "{},{},{},{},{:.1},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler_for(&entry.variant_name),
            entry.input_size,
            entry.avg,
            entry.median,
            entry.min,
            entry.max,
            unit_name(),
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    file.flush()?;
    Ok(())
}
