//! Benchmark harness and console output.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod session_log;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

pub use bench::{format_measurement, shuffle, time_call, time_seed, unit_name, Measurement};
pub use cpu_affinity::CpuPinGuard;
pub use runner::{export_csv, run_algorithm, AlgorithmResults, RawTimingData, SizeResults};
pub use session_log::SessionLog;
pub use timer::{
    measure_variants, Measured, PinStrategy, TimingConfig, Variant, VariantFailure, VariantResult,
};

/// C compiler detected at build time, if the C kernels were built
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");
