//! Measurement primitives shared by every runner.
//!
//! With the default `cpu_cycles` feature a [`Measurement`] is a raw cycle
//! count; with `use_time` (or without `cpu_cycles`) it is a wall-clock
//! [`Duration`]. Either way [`to_units`] flattens it to an integer in
//! [`unit_name`] units for statistics and display.

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Start = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Start = Instant;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Start {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Start {
    Instant::now()
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Start) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: Start) -> Measurement {
    start.elapsed()
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_units(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_units(m: Measurement) -> u64 {
    u64::try_from(m.as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    if cfg!(target_arch = "aarch64") {
        "ticks"
    } else {
        "cycles"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Human-readable value in measurement units, scaled with k/M/G suffixes
pub fn format_measurement(units: f64) -> String {
    let (value, prefix) = if units >= 1e9 {
        (units / 1e9, "G")
    } else if units >= 1e6 {
        (units / 1e6, "M")
    } else if units >= 1e4 {
        (units / 1e3, "k")
    } else {
        (units, "")
    };
    if prefix.is_empty() {
        format!("{:.0} {}", value, unit_name())
    } else {
        format!("{:.2} {}{}", value, prefix, unit_name())
    }
}

/// Time one call of `f`.
#[inline(always)]
pub fn time_call<F, R>(f: F) -> (Measurement, R)
where
    F: FnOnce() -> R,
{
    let start = now();
    let result = f();
    (elapsed(start), std::hint::black_box(result))
}

/// Time one expression, yielding `(Measurement, value)`.
///
/// The value passes through `black_box` so the timed work is not discarded.
///
/// ```
/// let (_elapsed, value) = gram_schmidt_lab::measure!(6 * 7);
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let result = $e;
        let elapsed = $crate::utils::bench::elapsed(start);
        (elapsed, ::std::hint::black_box(result))
    }};
}

/// Seed from the wall clock, for runs without `--seed`
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x9e37_79b9_7f4a_7c15)
}

/// Deterministic shuffle for a given seed
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    slice.shuffle(&mut rng);
}
