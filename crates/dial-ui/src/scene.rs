use dial_engine::coords::{Rect, Vec2};
use dial_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Element;

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns the per-frame draw list.
///
/// The root widget lives in the caller and persists across frames; the scene
/// only lays it out, paints it and routes host events into it. The root always
/// occupies the full viewport.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// ui.dispatch(&mut root, &UiEvent::Visibility { visible: true }, viewport);
/// let draw_list = ui.frame(&root, viewport);
/// frame_ctx.present(draw_list);
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Size the root would like within `viewport`.
    pub fn preferred_size(&self, root: &Element, viewport: Vec2) -> Vec2 {
        root.measure(Constraints::loose(viewport))
    }

    /// Paint the root into a fresh draw list covering `viewport`.
    ///
    /// The returned list is owned by the scene and valid until the next call.
    pub fn frame(&mut self, root: &Element, viewport: Vec2) -> &DrawList {
        self.draw_list.clear();
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }
        debug_assert_eq!(self.draw_list.save_depth(), 0, "unbalanced save/restore in paint");
        &self.draw_list
    }

    /// Route one host event into the root.
    pub fn dispatch(&mut self, root: &mut Element, event: &UiEvent, viewport: Vec2) -> EventResult {
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        root.on_event(event, rect)
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
