//! Time abstraction for frame scheduling.

use std::time::{Duration, Instant};

/// Trait for abstracting time sources.
///
/// Returns the monotonic time elapsed since the source was created. The
/// animator only ever compares and subtracts these values, so any fixed
/// origin works.
pub trait TimeSource {
    /// Returns the current time as elapsed time since the origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time source backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
