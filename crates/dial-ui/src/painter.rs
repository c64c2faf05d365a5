use dial_engine::coords::{Rect, Vec2};
use dial_engine::image::ImageAsset;
use dial_engine::scene::DrawList;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a canvas-style API: images are drawn into
/// destination rects under a transform stack driven by `save` / `restore`,
/// `rotate` and `scale`.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Image stretched into `dest` (local coordinates).
    pub fn draw_image(&mut self, image: ImageAsset, dest: Rect) {
        self.draw_list.push_image(image.id, dest);
    }

    // ── transform stack ───────────────────────────────────────────────────

    /// Snapshot the current transform. Must be paired with [`restore`](Self::restore).
    pub fn save(&mut self) {
        self.draw_list.save();
    }

    /// Return to the most recent snapshot.
    pub fn restore(&mut self) {
        self.draw_list.restore();
    }

    /// Rotate subsequent drawing clockwise by `degrees` around `pivot`.
    pub fn rotate(&mut self, degrees: f32, pivot: Vec2) {
        self.draw_list.rotate(degrees, pivot);
    }

    /// Scale subsequent drawing uniformly by `factor` around `pivot`.
    pub fn scale(&mut self, factor: f32, pivot: Vec2) {
        self.draw_list.scale(factor, pivot);
    }
}
