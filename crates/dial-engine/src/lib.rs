//! Dial engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! geometry, the recorded draw stream, image handles, time sources and the
//! one-shot timer queue, plus a headless runtime loop that drives them.

pub mod core;
pub mod image;
pub mod runtime;
pub mod time;

pub mod logging;
pub mod coords;
pub mod scene;
