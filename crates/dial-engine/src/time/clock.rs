use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source in whole milliseconds since an arbitrary epoch.
///
/// Readings never go backwards and are immune to wall-clock adjustments.
pub trait MonotonicClock {
    fn now_ms(&self) -> u64;

    /// Blocks until `deadline_ms` has been reached. Only event loops call this.
    fn wait_until(&self, deadline_ms: u64) {
        let now = self.now_ms();
        if deadline_ms > now {
            std::thread::sleep(Duration::from_millis(deadline_ms - now));
        }
    }
}

/// `Instant`-backed clock. The epoch is the moment the clock was created.
#[derive(Debug, Clone)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to.
///
/// Used by tests and by drivers that replay a recorded timeline.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    /// Jumps to `ms`. Ignored if it would move the clock backwards.
    pub fn set(&self, ms: u64) {
        if ms >= self.now.get() {
            self.now.set(ms);
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    /// Jumps straight to the deadline instead of sleeping.
    fn wait_until(&self, deadline_ms: u64) {
        self.set(deadline_ms);
    }
}
