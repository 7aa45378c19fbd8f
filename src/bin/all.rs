//! Command-line driver for the lab.
//!
//! Usage:
//!   gs-lab                    # Verify and benchmark every algorithm
//!   gs-lab --list             # List available algorithms
//!   gs-lab gram_schmidt_f64   # Benchmark one algorithm
//!   gs-lab --demo             # Print a worked example
//!   gs-lab --help             # Show help

use std::env;
use std::process::ExitCode;

use gram_schmidt_lab::registry::{build_registry, AlgorithmRunner};
use gram_schmidt_lab::utils::{runner, time_seed, tui, SessionLog, TimingConfig};

struct Options {
    show_list: bool,
    show_help: bool,
    demo: bool,
    sizes: Option<Vec<usize>>,
    timing: TimingConfig,
    seed: Option<u64>,
    csv_path: Option<String>,
    log_path: Option<String>,
    algorithm: Option<String>,
}

fn value_of<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn parse_number<T: std::str::FromStr>(text: &str, flag: &str) -> Result<T, String> {
    text.trim()
        .parse()
        .map_err(|_| format!("{}: '{}' is not a valid number", flag, text))
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        show_list: false,
        show_help: false,
        demo: false,
        sizes: None,
        timing: TimingConfig::default(),
        seed: None,
        csv_path: None,
        log_path: None,
        algorithm: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => opts.show_list = true,
            "--help" | "-h" => opts.show_help = true,
            "--demo" => opts.demo = true,
            "--sizes" => {
                let text = value_of(args, &mut i, "--sizes")?;
                let sizes = text
                    .split(',')
                    .map(|s| parse_number(s, "--sizes"))
                    .collect::<Result<Vec<usize>, _>>()?;
                opts.sizes = Some(sizes);
            }
            "--runs" | "-r" => {
                opts.timing.runs_per_variant = parse_number(value_of(args, &mut i, "--runs")?, "--runs")?;
            }
            "--warmup" => {
                opts.timing.warmup_iterations =
                    parse_number(value_of(args, &mut i, "--warmup")?, "--warmup")?;
            }
            "--seed" => opts.seed = Some(parse_number(value_of(args, &mut i, "--seed")?, "--seed")?),
            "--csv" => opts.csv_path = Some(value_of(args, &mut i, "--csv")?.to_string()),
            "--log" => opts.log_path = Some(value_of(args, &mut i, "--log")?.to_string()),
            arg if !arg.starts_with('-') => opts.algorithm = Some(arg.to_string()),
            other => return Err(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(opts)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("try --help");
            return ExitCode::FAILURE;
        }
    };

    let mut log = match SessionLog::open(opts.log_path.as_deref()) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("error: cannot open log file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let registry = build_registry();

    if opts.show_help {
        tui::print_help(&mut log);
        return ExitCode::SUCCESS;
    }
    if opts.show_list {
        tui::print_available_algorithms(&mut log, &registry);
        return ExitCode::SUCCESS;
    }

    let seed = opts.seed.unwrap_or_else(time_seed);
    tui::print_header(&mut log);

    if opts.demo {
        if let Err(e) = tui::run_demo(&mut log, seed) {
            eprintln!("error: demo failed: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let selected: Vec<&dyn AlgorithmRunner> = match &opts.algorithm {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("algorithm '{}' not found", name);
                eprintln!("available: {}", registry.list_names().join(", "));
                return ExitCode::FAILURE;
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    log.line(format!("Seed: {}", seed));
    log.blank();

    let mut all_results = Vec::with_capacity(selected.len());
    for algo in selected {
        tui::print_algo_info_box(&mut log, algo);

        if let Err(e) = algo.verify() {
            eprintln!("error: '{}' failed verification: {}", algo.name(), e);
            return ExitCode::FAILURE;
        }

        let sizes = opts.sizes.clone().unwrap_or_else(|| algo.default_sizes());
        let results = runner::run_algorithm(algo, &sizes, seed, &opts.timing);
        for size in &results.sizes {
            tui::print_results_table(&mut log, size, opts.timing.runs_per_variant);
        }
        all_results.push(results);
    }

    if let Some(path) = &opts.csv_path {
        match runner::export_csv(path, &runner::raw_data(&all_results)) {
            Ok(()) => log.line(format!("  Raw data exported to: {}", path)),
            Err(e) => eprintln!("  Warning: failed to export CSV: {}", e),
        }
        log.blank();
    }

    log.line("Note: speedup and error are relative to the first (baseline) variant.");
    ExitCode::SUCCESS
}
