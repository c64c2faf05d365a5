//! Headless runtime loop.
//!
//! Owns the wait/dispatch/draw cycle: sleeps on the shared clock until the next
//! timer deadline, hands due timers to the app, and draws a frame whenever the
//! app asked for one. There is no window; frames go to a surface that only
//! counts and traces draw items.

mod runtime;

pub use runtime::{RunStats, Runtime, RuntimeConfig, RuntimeCtx};
