#![forbid(unsafe_code)]

//! Time sources for scheduling primitives.
//!
//! Production code reads real monotonic time. Tests drive a [`LabClock`]
//! manually, so timing-sensitive behavior (debounce windows, due times) is
//! fully reproducible without sleeping.
//!
//! # Invariants
//!
//! 1. `Clock::now()` never goes backwards, for either variant.
//! 2. All clones of a `LabClock` (and every `Clock` built from them) observe
//!    the same time.
//! 3. `LabClock::advance` only moves time forward.
//!
//! # Example
//!
//! ```
//! use zentui_core::{Clock, LabClock};
//! use web_time::Duration;
//!
//! let lab = LabClock::new();
//! let clock = Clock::lab(&lab);
//!
//! let t0 = clock.now();
//! lab.advance(Duration::from_millis(80));
//! assert_eq!(clock.now().duration_since(t0), Duration::from_millis(80));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use web_time::{Duration, Instant};

/// Time source for cells and wrappers that schedule work.
///
/// The default is real wall-clock time; [`Clock::lab`] swaps in a shared,
/// manually advanced clock for deterministic tests.
#[derive(Debug, Clone, Default)]
pub enum Clock {
    /// Real wall-clock time.
    #[default]
    Real,
    /// Deterministic lab clock for testing.
    Lab(LabClock),
}

impl Clock {
    /// Real monotonic time source.
    #[must_use]
    pub fn real() -> Self {
        Self::Real
    }

    /// Deterministic time source driven by `clock`.
    #[must_use]
    pub fn lab(clock: &LabClock) -> Self {
        Self::Lab(clock.clone())
    }

    /// Current time according to this source.
    #[must_use]
    pub fn now(&self) -> Instant {
        match self {
            Self::Real => Instant::now(),
            Self::Lab(c) => c.now(),
        }
    }

    /// Whether this source is a lab clock.
    #[inline]
    #[must_use]
    pub fn is_lab(&self) -> bool {
        matches!(self, Self::Lab(_))
    }
}

/// A manually-advanceable clock for deterministic tests.
///
/// All holders of the same `LabClock` (clones share state) see the same
/// time.
#[derive(Debug, Clone)]
pub struct LabClock {
    epoch: Instant,
    offset_us: Arc<AtomicU64>,
}

impl LabClock {
    /// Create a new lab clock starting at `Instant::now()`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            offset_us: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Advance the lab clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        let us = delta.as_micros().min(u64::MAX as u128) as u64;
        self.offset_us.fetch_add(us, Ordering::Release);
    }

    /// Current lab time.
    #[must_use]
    pub fn now(&self) -> Instant {
        let offset = Duration::from_micros(self.offset_us.load(Ordering::Acquire));
        self.epoch + offset
    }
}

impl Default for LabClock {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
