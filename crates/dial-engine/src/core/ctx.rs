use crate::coords::Vec2;
use crate::runtime::RuntimeCtx;
use crate::scene::{DrawCmd, DrawList};

/// Per-frame surface metadata.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceCtx {
    /// Surface size in logical pixels.
    pub size: Vec2,
}

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameTime {
    /// Monotonic timestamp taken when the frame started.
    pub now_ms: u64,

    /// Frame counter, starting at zero.
    pub frame_index: u64,
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub surface: SurfaceCtx,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
    pub(crate) presented: usize,
}

impl<'a> FrameCtx<'a> {
    /// Hands a finished draw list to the surface.
    ///
    /// The headless surface has no pixels; it records how many items were
    /// presented and traces each one.
    pub fn present(&mut self, draw_list: &DrawList) {
        for item in draw_list.items() {
            match &item.cmd {
                DrawCmd::Image(img) => log::trace!(
                    "frame {}: image {:?} dest={:?} transform={:?}",
                    self.time.frame_index,
                    img.image,
                    img.dest,
                    item.transform,
                ),
            }
        }
        self.presented += draw_list.len();
    }
}
