use crate::runtime::RuntimeCtx;
use crate::time::DueTimer;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Every callback runs on the loop's thread, one at a time.
pub trait App {
    /// Called once before the first frame.
    fn on_start(&mut self, runtime: &mut RuntimeCtx) -> AppControl {
        let _ = runtime;
        AppControl::Continue
    }

    /// Called for each timer whose deadline has passed, in deadline order.
    fn on_timer(&mut self, timer: DueTimer, runtime: &mut RuntimeCtx) -> AppControl {
        let _ = (timer, runtime);
        AppControl::Continue
    }

    /// Called once per frame the runtime decides to draw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once after the loop stops, before the runtime returns.
    fn on_shutdown(&mut self) {}
}
