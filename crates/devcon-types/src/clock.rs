//! Monotonic clock abstraction.
//!
//! The suggestion debounce compares keystroke timestamps against a short
//! window, so it needs a clock that never goes backwards. Wall-clock time
//! can jump under NTP adjustment; `MonotonicClock` wraps `std::time::Instant`
//! instead. `ManualClock` lets tests drive time explicitly through the same
//! trait, injected via `Terminal::with_clock`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A monotonic nanosecond counter.
pub trait Clock {
    /// Nanoseconds elapsed since some fixed origin. Never decreases.
    fn now_nanos(&self) -> u64;
}

// The engine is single-threaded, so a shared clock handle is an `Rc`.
impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_nanos(&self) -> u64 {
        (**self).now_nanos()
    }
}

/// Real clock backed by `std::time::Instant`, anchored at construction.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is "now".
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_nanos(&self) -> u64 {
        // u64 nanoseconds covers ~584 years of process uptime.
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Hand-advanced clock for deterministic tests.
pub struct ManualClock {
    nanos: Cell<u64>,
}

impl ManualClock {
    /// Create a manual clock starting at zero.
    pub fn new() -> Self {
        Self {
            nanos: Cell::new(0),
        }
    }

    /// Advance the clock by `n` nanoseconds.
    pub fn advance_nanos(&self, n: u64) {
        self.nanos.set(self.nanos.get() + n);
    }

    /// Advance the clock by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance_nanos(ms * 1_000_000);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_nanos(&self) -> u64 {
        self.nanos.get()
    }
}
