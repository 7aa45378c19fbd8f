//! Cycle counter reads for the `cpu_cycles` measurement unit.
//!
//! x86_64 reads the TSC between two `lfence`s; aarch64 reads the virtual
//! counter `cntvct_el0`, which ticks at a fixed frequency rather than the
//! core clock.

#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        use core::arch::x86_64::{_mm_lfence, _rdtsc};
        // SAFETY: lfence and rdtsc are available on every x86_64 CPU
        unsafe {
            _mm_lfence();
            let t = _rdtsc();
            _mm_lfence();
            t
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let t: u64;
        // SAFETY: cntvct_el0 is readable from EL0
        unsafe {
            core::arch::asm!("mrs {}, cntvct_el0", out(reg) t, options(nomem, nostack));
        }
        t
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        compile_error!("the cpu_cycles feature needs x86_64 or aarch64; build with --features use_time");
    }
}
