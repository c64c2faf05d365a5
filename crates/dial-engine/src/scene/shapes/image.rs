use crate::coords::Rect;
use crate::image::ImageId;
use crate::scene::{DrawCmd, DrawList};

/// Image draw payload.
///
/// `dest` is in the local space of the item; the owning [`DrawItem`]'s
/// transform maps it onto the surface.
///
/// [`DrawItem`]: crate::scene::DrawItem
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: ImageId,
    pub dest: Rect,
}

impl ImageCmd {
    #[inline]
    pub fn new(image: ImageId, dest: Rect) -> Self {
        Self { image, dest }
    }
}

impl DrawList {
    /// Records an image stretched into `dest` under the current transform.
    #[inline]
    pub fn push_image(&mut self, image: ImageId, dest: Rect) {
        self.push(DrawCmd::Image(ImageCmd::new(image, dest)));
    }
}
