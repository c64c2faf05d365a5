use std::cell::Cell;

use dial_engine::coords::{Rect, Vec2};
use dial_engine::image::ImageAsset;
use dial_engine::scene::DrawList;

use crate::angles::{HandAngles, angles_from_hour_min_sec, angles_from_min_sec};
use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// The three images a clock face is assembled from.
///
/// Hands are drawn pointing straight up with their pivot at the middle of
/// their bottom edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockImages {
    pub dial: ImageAsset,
    pub big_hand: ImageAsset,
    pub small_hand: ImageAsset,
}

/// Placement of the three images for one surface rect.
#[derive(Debug, Copy, Clone, PartialEq)]
struct FaceLayout {
    surface: Rect,
    dial: Rect,
    big_hand: Rect,
    small_hand: Rect,
}

impl FaceLayout {
    fn compute(images: &ClockImages, surface: Rect) -> Self {
        let c = surface.center();
        let dial = images.dial.intrinsic_size().half();
        Self {
            surface,
            dial: Rect::from_edges(c.x - dial.x, c.y - dial.y, c.x + dial.x, c.y + dial.y),
            big_hand: hand_rect(images.big_hand, c),
            small_hand: hand_rect(images.small_hand, c),
        }
    }
}

/// Hand rect pivoting at `center`: horizontally centered, extending upwards.
fn hand_rect(hand: ImageAsset, center: Vec2) -> Rect {
    let half_w = hand.width * 0.5;
    Rect::from_edges(center.x - half_w, center.y - hand.height, center.x + half_w, center.y)
}

/// An analog dial with two hands.
///
/// The face never reads the system time; it shows whatever it was last set
/// to. In clock mode ([`set_time`](Self::set_time)) the big hand is the hour
/// hand; in chronometer mode ([`set_min_sec`](Self::set_min_sec)) it is the
/// minute hand.
///
/// The dial is drawn at its intrinsic size, centered, and scaled down
/// uniformly when the surface is smaller than the dial.
///
/// # Example
/// ```rust,ignore
/// ClockFace::new(images).time(10, 10, 30)
/// ```
pub struct ClockFace {
    images: ClockImages,
    angles: HandAngles,
    /// Placement must be recomputed before the next paint.
    changed: Cell<bool>,
    layout: Cell<Option<FaceLayout>>,
}

impl ClockFace {
    pub fn new(images: ClockImages) -> Self {
        Self {
            images,
            angles: HandAngles::default(),
            changed: Cell::new(true),
            layout: Cell::new(None),
        }
    }

    /// Builder form of [`set_time`](Self::set_time).
    pub fn time(mut self, hour: u32, min: u32, sec: u32) -> Self {
        self.set_time(hour, min, sec);
        self
    }

    /// Shows `hour:min:sec` with the big hand as hour hand and the small hand
    /// as minute hand.
    pub fn set_time(&mut self, hour: u32, min: u32, sec: u32) {
        self.angles = angles_from_hour_min_sec(hour, min, sec);
        self.changed.set(true);
    }

    /// Shows `min:sec` with the big hand as minute hand and the small hand as
    /// second hand.
    pub fn set_min_sec(&mut self, min: u32, sec: u32) {
        self.angles = angles_from_min_sec(min, sec);
        self.changed.set(true);
    }

    #[inline]
    pub fn angles(&self) -> HandAngles {
        self.angles
    }

    #[inline]
    pub fn images(&self) -> &ClockImages {
        &self.images
    }

    /// `true` if the next paint will recompute image placement.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.changed.get()
    }

    /// Paints the face onto a `width × height` surface at the origin.
    pub fn render(&self, draw_list: &mut DrawList, width: f32, height: f32) {
        let mut painter = Painter::new(draw_list);
        self.paint(&mut painter, Rect::new(0.0, 0.0, width, height));
    }

    fn layout_for(&self, surface: Rect) -> FaceLayout {
        let stale = self.changed.replace(false);
        match self.layout.get() {
            Some(layout) if !stale && layout.surface == surface => layout,
            _ => {
                let layout = FaceLayout::compute(&self.images, surface);
                log::trace!("clock face layout for {surface:?}: {layout:?}");
                self.layout.set(Some(layout));
                layout
            }
        }
    }
}

impl Widget for ClockFace {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let dial = self.images.dial.intrinsic_size();
        let scale = constraints.fit_scale(dial);
        constraints.constrain(Vec2::new((dial.x * scale).floor(), (dial.y * scale).floor()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let layout = self.layout_for(rect);
        let center = rect.center();
        let dial = self.images.dial.intrinsic_size();

        let scaled = rect.size.x < dial.x || rect.size.y < dial.y;
        if scaled {
            let scale = (rect.size.x / dial.x).min(rect.size.y / dial.y);
            painter.save();
            painter.scale(scale, center);
        }

        painter.draw_image(self.images.dial, layout.dial);

        painter.save();
        painter.rotate(self.angles.big_hand_degrees, center);
        painter.draw_image(self.images.big_hand, layout.big_hand);
        painter.restore();

        painter.save();
        painter.rotate(self.angles.small_hand_degrees, center);
        painter.draw_image(self.images.small_hand, layout.small_hand);
        painter.restore();

        if scaled {
            painter.restore();
        }
    }
}
