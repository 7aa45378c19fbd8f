//! Console presentation: header, info boxes, result tables and the demo.
//!
//! Everything is written through a [`SessionLog`] so a `--log` file gets
//! the same text as the terminal.

use terminal_size::{terminal_size, Width};

use crate::error::Result;
use crate::math::gram_schmidt::{gram_schmidt_inplace, GramSchmidtStrategy};
use crate::matrix::{fill_random, ColMajorMatrix, RandReal};
use crate::registry::{AlgorithmRegistry, AlgorithmRunner};
use crate::utils::bench::format_measurement;
use crate::utils::runner::SizeResults;
use crate::utils::session_log::SessionLog;

/// Terminal width clamped to a usable range, 80 when unknown
fn term_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).clamp(40, 200),
        None => 80,
    }
}

/// Cut `s` to `width` characters, ending in "..." when shortened
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}

pub fn print_header(log: &mut SessionLog) {
    let width = term_width().min(80);
    let title = " Gram-Schmidt Lab ";
    let left = width.saturating_sub(title.len()) / 2;
    let right = width.saturating_sub(left + title.len());

    log.line(format!("╔{}╗", "═".repeat(width)));
    log.line(format!("║{}{}{}║", " ".repeat(left), title, " ".repeat(right)));
    log.line(format!("╚{}╝", "═".repeat(width)));
    log.blank();
}

pub fn print_algo_info_box(log: &mut SessionLog, algo: &dyn AlgorithmRunner) {
    let max_width = term_width().saturating_sub(4).max(40);
    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants:  {}", algo.available_variants().join(", ")),
    ];
    let width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_width);
    let border = "─".repeat(width + 2);

    log.line(format!("┌{}┐", border));
    for (i, text) in lines.iter().enumerate() {
        if i == 3 {
            log.line(format!("├{}┤", border));
        }
        log.line(format!("│ {:<w$} │", truncate(text, width), w = width));
    }
    log.line(format!("└{}┘", border));
    log.blank();
}

/// Relative difference of `value` from `baseline` (absolute near zero)
fn relative_error(value: Option<f64>, baseline: Option<f64>) -> Option<f64> {
    let (v, b) = (value?, baseline?);
    let diff = (v - b).abs();
    Some(if b.abs() > 1e-9 { diff / b.abs() } else { diff })
}

/// Table of one size; speedup and error are relative to the first row.
pub fn print_results_table(log: &mut SessionLog, size: &SizeResults, runs: usize) {
    let Some(baseline) = size.results.first() else {
        print_failures(log, size);
        return;
    };

    let variant_width = term_width().saturating_sub(72).max(24);
    let table_width = variant_width + 70;

    log.line(format!("  Size: {} ({} runs)", size.label, runs));
    log.line(format!("  {}", "─".repeat(table_width)));
    log.line(format!(
        "  {:<vw$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        vw = variant_width
    ));
    log.line(format!("  {}", "─".repeat(table_width)));

    for result in &size.results {
        let speedup = if result.avg > 0.0 {
            baseline.avg / result.avg
        } else {
            0.0
        };
        let error = match relative_error(result.result_sample, baseline.result_sample) {
            Some(e) => format!("{:.2e}", e),
            None => "-".to_string(),
        };
        let display_name = match (result.name.starts_with("c-"), crate::utils::C_COMPILER_NAME) {
            (true, Some(cc)) => format!("{} ({})", result.name, cc),
            _ => result.name.clone(),
        };

        log.line(format!(
            "  {:<vw$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10}",
            truncate(&display_name, variant_width),
            format_measurement(result.avg),
            format_measurement(result.min as f64),
            format_measurement(result.max as f64),
            speedup,
            result.cv() * 100.0,
            error,
            vw = variant_width
        ));
    }
    print_failures(log, size);
    log.blank();
}

fn print_failures(log: &mut SessionLog, size: &SizeResults) {
    for failure in &size.failed {
        log.line(format!(
            "  skipped {} at {}: {}",
            failure.name, size.label, failure.error
        ));
    }
}

pub fn print_help(log: &mut SessionLog) {
    let text = [
        "Usage: gs-lab [OPTIONS] [ALGORITHM]",
        "",
        "Options:",
        "  --list, -l       List all algorithms",
        "  --help, -h       Show this help message",
        "  --sizes SIZES    Comma-separated sizes (default: per algorithm)",
        "  --runs N, -r N   Measured runs per variant (default: 30)",
        "  --warmup N       Untimed runs per variant (default: 3)",
        "  --seed N         Input seed for reproducible runs (default: time-based)",
        "  --csv PATH       Export raw timings to CSV",
        "  --log PATH       Copy all output to a log file",
        "  --demo           Orthonormalize a few small matrices and print them",
        "",
        "Arguments:",
        "  ALGORITHM        Name of one algorithm to run (omit for all)",
        "",
        "Examples:",
        "  gs-lab                          # Verify and run all algorithms",
        "  gs-lab gram_schmidt_f64         # Run one algorithm",
        "  gs-lab --sizes 8,64 --runs 100  # Custom sizes and sample count",
        "  gs-lab --demo --log demo.log    # Demo, also written to demo.log",
    ];
    for line in text {
        log.line(line);
    }
}

pub fn print_available_algorithms(log: &mut SessionLog, registry: &AlgorithmRegistry) {
    log.line("Available algorithms:");
    log.blank();
    for algo in registry.all() {
        log.line(format!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        ));
    }
}

fn print_matrix(log: &mut SessionLog, title: &str, m: &ColMajorMatrix<f64>) {
    log.line(title);
    for line in format!("{}", m).lines() {
        log.line(line);
    }
    if !m.is_finite() {
        log.line("(non-finite entries: a column was zero before normalization)");
    }
    log.blank();
}

/// Orthonormalize a few small matrices and print them.
///
/// A two-column literal, a random 2x3 (more columns than rows, so the last
/// column is rounding noise) and a random 3x2 through every strategy.
pub fn run_demo(log: &mut SessionLog, seed: u64) -> Result<()> {
    let mut a = ColMajorMatrix::from_columns(&[[1.0, 1.0, 0.0, 0.0], [0.0, 2.0, 1.0, 1.0]])?;
    print_matrix(log, "Input A:", &a);
    gram_schmidt_inplace(&mut a)?;
    print_matrix(log, "Orthonormalized A:", &a);

    let mut rnd = RandReal::new(-10.0, 10.0, seed);

    let mut m = ColMajorMatrix::new(2, 3);
    fill_random(&mut m, &mut rnd);
    print_matrix(log, "Random M:", &m);
    gram_schmidt_inplace(&mut m)?;
    print_matrix(log, "Orthonormalized M:", &m);

    let mut n = ColMajorMatrix::new(3, 2);
    fill_random(&mut n, &mut rnd);
    print_matrix(log, "Random N:", &n);
    for strategy in GramSchmidtStrategy::ALL {
        let mut q = n.clone();
        strategy.apply(&mut q)?;
        print_matrix(log, &format!("N via {}:", strategy.name()), &q);
    }
    Ok(())
}
