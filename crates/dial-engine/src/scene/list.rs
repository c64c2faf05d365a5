use crate::coords::{Transform, Vec2};

use super::DrawCmd;

/// A single draw item: command + the canvas transform active when it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// Local-to-surface transform, already composed with every enclosing
    /// `rotate` / `scale` call.
    pub transform: Transform,
}

/// Recorded draw stream for a frame.
///
/// Items are painted back-to-front in insertion order.
///
/// # Transform stack
///
/// Mirrors a canvas: [`save`] snapshots the current transform, [`rotate`] and
/// [`scale`] pre-concatenate onto it, [`restore`] returns to the last snapshot.
///
/// ```ignore
/// draw_list.save();
/// draw_list.rotate(90.0, center);
/// draw_list.push_image(hand, rect);   // recorded with the rotation
/// draw_list.restore();
/// ```
///
/// [`save`]: DrawList::save
/// [`rotate`]: DrawList::rotate
/// [`scale`]: DrawList::scale
/// [`restore`]: DrawList::restore
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,

    /// Current transform. Starts as identity.
    transform: Transform,
    /// Snapshots taken by `save`, innermost last.
    saved: Vec<Transform>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the transform stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.transform = Transform::IDENTITY;
        self.saved.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command under the current transform.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem { cmd, transform: self.transform });
    }

    /// Current local-to-surface transform.
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Number of unmatched [`save`](DrawList::save) calls.
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Snapshots the current transform. Calls must be balanced with [`restore`].
    ///
    /// [`restore`]: DrawList::restore
    #[inline]
    pub fn save(&mut self) {
        self.saved.push(self.transform);
    }

    /// Returns to the transform captured by the most recent [`save`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `save`.
    ///
    /// [`save`]: DrawList::save
    #[inline]
    pub fn restore(&mut self) {
        debug_assert!(!self.saved.is_empty(), "restore called without matching save");
        if let Some(t) = self.saved.pop() {
            self.transform = t;
        }
    }

    /// Pre-concatenates `t` onto the current transform.
    #[inline]
    pub fn concat(&mut self, t: Transform) {
        self.transform = self.transform * t;
    }

    /// Rotates subsequent items by `degrees` (clockwise) around `pivot`.
    #[inline]
    pub fn rotate(&mut self, degrees: f32, pivot: Vec2) {
        self.concat(Transform::rotation_about(degrees, pivot));
    }

    /// Scales subsequent items by `factor` around `pivot`.
    #[inline]
    pub fn scale(&mut self, factor: f32, pivot: Vec2) {
        self.concat(Transform::scale_about(factor, pivot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::image::ImageRegistry;

    #[test]
    fn items_keep_insertion_order_and_transform() {
        let mut reg = ImageRegistry::new();
        let a = reg.register("a", 10.0, 10.0).unwrap();
        let b = reg.register("b", 10.0, 10.0).unwrap();

        let mut dl = DrawList::new();
        dl.push_image(a.id, Rect::new(0.0, 0.0, 10.0, 10.0));
        dl.save();
        dl.rotate(90.0, Vec2::new(5.0, 5.0));
        dl.push_image(b.id, Rect::new(0.0, 0.0, 10.0, 10.0));
        dl.restore();

        let items = dl.items();
        assert_eq!(items.len(), 2);
        assert!(items[0].transform.is_identity());
        assert_eq!(items[1].transform, Transform::rotation_about(90.0, Vec2::new(5.0, 5.0)));
        assert!(dl.transform().is_identity());
        assert_eq!(dl.save_depth(), 0);
    }

    #[test]
    fn nested_save_restore_composes() {
        let mut dl = DrawList::new();
        let pivot = Vec2::new(100.0, 100.0);
        dl.save();
        dl.scale(0.5, pivot);
        dl.save();
        dl.rotate(30.0, pivot);
        assert_eq!(
            dl.transform(),
            Transform::scale_about(0.5, pivot) * Transform::rotation_about(30.0, pivot)
        );
        dl.restore();
        assert_eq!(dl.transform(), Transform::scale_about(0.5, pivot));
        dl.restore();
        assert!(dl.transform().is_identity());
    }

    #[test]
    fn clear_resets_transform_stack() {
        let mut dl = DrawList::new();
        dl.save();
        dl.rotate(45.0, Vec2::zero());
        dl.clear();
        assert!(dl.is_empty());
        assert_eq!(dl.save_depth(), 0);
        assert!(dl.transform().is_identity());
    }
}
