//! Thread pinning for stable timings.
//!
//! On Linux the calling thread is restricted to the core it is currently
//! running on and the previous affinity mask is restored when the guard is
//! dropped. Other platforms get a guard that pins nothing.

#[cfg(target_os = "linux")]
mod platform {
    use std::mem;

    /// Saved affinity mask of the calling thread
    pub struct SavedMask(pub(super) libc::cpu_set_t);

    pub fn online_cores() -> Option<usize> {
        // SAFETY: sysconf has no memory-safety preconditions
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        (n > 0).then_some(n as usize)
    }

    pub fn current_core() -> Option<usize> {
        // SAFETY: sched_getcpu has no preconditions
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn save() -> Option<SavedMask> {
        // SAFETY: an all-zero cpu_set_t is a valid empty set, and the
        // kernel writes at most `size_of::<cpu_set_t>()` bytes
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            (libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(SavedMask(set))
        }
    }

    pub fn pin(core: usize) -> bool {
        // SAFETY: `set` is a valid cpu_set_t for the duration of the calls
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &SavedMask) -> bool {
        // SAFETY: `saved.0` was filled by sched_getaffinity
        unsafe { libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0 }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct SavedMask;

    pub fn online_cores() -> Option<usize> {
        std::thread::available_parallelism().ok().map(|n| n.get())
    }

    pub fn current_core() -> Option<usize> {
        None
    }

    pub fn save() -> Option<SavedMask> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn restore(_saved: &SavedMask) -> bool {
        true
    }
}

/// Number of online CPU cores, if the platform reports it
pub fn online_cores() -> Option<usize> {
    platform::online_cores()
}

/// Core the calling thread is running on right now
pub fn current_core() -> Option<usize> {
    platform::current_core()
}

/// Pins the calling thread on creation, restores its affinity on drop.
///
/// ```
/// use gram_schmidt_lab::utils::CpuPinGuard;
///
/// let guard = CpuPinGuard::new();
/// if let Some(core) = guard.core_id() {
///     assert!(core < 4096);
/// }
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::SavedMask>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is currently on, falling back to core 0.
    pub fn new() -> Self {
        Self::with_core(current_core().unwrap_or(0))
    }

    /// Pin to `core`. The guard is inert if pinning fails.
    pub fn with_core(core: usize) -> Self {
        let saved = platform::save();
        let pinned_core = (saved.is_some() && platform::pin(core)).then_some(core);
        Self { pinned_core, saved }
    }

    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            if let Some(saved) = &self.saved {
                platform::restore(saved);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_cores() {
        assert!(online_cores().map_or(true, |n| n >= 1));
    }

    #[test]
    fn test_guard_reports_its_core() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
            #[cfg(target_os = "linux")]
            assert_eq!(current_core(), guard.core_id());
        }
    }

    #[test]
    fn test_nested_guards_restore() {
        let outer = CpuPinGuard::new();
        {
            let inner = CpuPinGuard::new();
            assert_eq!(inner.is_pinned(), outer.is_pinned());
        }
        drop(outer);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_restore_widens_affinity_again() {
        let cores = online_cores().unwrap_or(1);
        let allowed = || {
            platform::save().map(|m| {
                (0..cores)
                    .filter(|&c| unsafe { libc::CPU_ISSET(c, &m.0) })
                    .count()
            })
        };
        let before = allowed();
        drop(CpuPinGuard::with_core(0));
        assert_eq!(before, allowed());
    }
}
