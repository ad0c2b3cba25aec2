//! Performance instrumentation for the gesture hot path.
//!
//! Pointer moves arrive at display rate while dragging, and every one of them
//! runs through the reducer and the render sink. Scoped timers report any
//! scope that overruns its budget through `tracing`.
//!
//! Enable with the `profiling` feature flag; without it the macros compile to
//! nothing:
//! ```ignore
//! use swipeboard::profile_scope;
//!
//! fn step() {
//!     profile_scope!("carousel_reduce", 2.0);
//!     // ... work ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Default budget (ms) for scopes profiled without an explicit threshold
pub const DEFAULT_SCOPE_BUDGET_MS: f64 = 4.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::DEFAULT_SCOPE_BUDGET_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer: measures from construction to drop and warns on overrun.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Milliseconds since the timer started
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Returns true if the scope has run longer than its budget
    pub fn is_over_budget(&self) -> bool {
        self.elapsed_ms() > self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                scope = self.name,
                elapsed_ms = elapsed,
                budget_ms = self.threshold_ms,
                "slow scope"
            );
        } else {
            #[cfg(feature = "profiling")]
            trace!(scope = self.name, elapsed_ms = elapsed, "scope timing");
        }
    }
}
