//! Performance monitoring utilities.
//!
//! Pointer-move handlers run on every delivered event during a drag, so the
//! hot paths are instrumented with [`profile_scope!`]. Instrumentation is
//! zero-cost unless the `profiling` cargo feature is enabled.
//!
//! ```toml
//! [dependencies]
//! dragboard = { features = ["profiling"] }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

/// Scopes slower than this get a warning instead of a trace line.
pub const WARN_THRESHOLD_MS: f64 = 1.0;

/// RAII timer for a named scope. Logs on drop.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, WARN_THRESHOLD_MS)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > self.threshold_ms {
            warn!(scope = self.name, elapsed_ms, "slow scope");
        } else {
            trace!(scope = self.name, elapsed_ms, "scope timing");
        }
    }
}

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}
