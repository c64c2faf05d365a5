//! Time subsystem.
//!
//! Provides monotonic time sources and a one-shot timer queue without coupling
//! to any event loop. Intended usage:
//! - one shared `MonotonicClock` per application
//! - one shared `TimerQueue` per event loop; owners arm one-shot timers and the
//!   loop hands due entries back to them

mod clock;
mod timer_queue;

pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use timer_queue::{DueTimer, Scheduler, TimerHandle, TimerQueue, TimerToken};
