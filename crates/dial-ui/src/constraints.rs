use dial_engine::coords::Vec2;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. An infinite `max` on an axis
/// means the parent imposes no limit there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Largest uniform factor in `(0, 1]` that fits `size` under `max`.
    ///
    /// Each bounded axis smaller than `size` contributes `max / size`; the
    /// result is the smaller of the two, so aspect ratio is preserved and the
    /// content is never scaled up.
    #[inline]
    pub fn fit_scale(self, size: Vec2) -> f32 {
        let axis = |max: f32, natural: f32| {
            if max.is_finite() && max < natural { max / natural } else { 1.0 }
        };
        axis(self.max.x, size.x).min(axis(self.max.y, size.y))
    }
}
