use core::ops::Mul;

use super::Vec2;

/// 2D affine transform in logical pixels.
///
/// Column layout (points are column vectors):
///
/// ```text
/// | a c e |   | x |
/// | b d f | * | y |
/// | 0 0 1 |   | 1 |
/// ```
///
/// `m * n` applies `n` first, then `m`. Canvas-style operations (`rotate`,
/// `scale` on a save/restore stack) pre-concatenate, so a later operation is
/// applied to points before the earlier ones.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn translation(dx: f32, dy: f32) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: dx, f: dy }
    }

    /// Rotation about the origin. Positive degrees turn clockwise on screen.
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    /// Uniform scale about the origin.
    #[inline]
    pub const fn scale(factor: f32) -> Self {
        Self { a: factor, b: 0.0, c: 0.0, d: factor, e: 0.0, f: 0.0 }
    }

    /// Rotation by `degrees` around `pivot`.
    pub fn rotation_about(degrees: f32, pivot: Vec2) -> Self {
        Self::translation(pivot.x, pivot.y)
            * Self::rotation(degrees)
            * Self::translation(-pivot.x, -pivot.y)
    }

    /// Uniform scale by `factor` around `pivot`.
    pub fn scale_about(factor: f32, pivot: Vec2) -> Self {
        Self::translation(pivot.x, pivot.y)
            * Self::scale(factor)
            * Self::translation(-pivot.x, -pivot.y)
    }

    /// Maps a point through the transform.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, n: Transform) -> Transform {
        let m = self;
        Transform {
            a: m.a * n.a + m.c * n.b,
            b: m.b * n.a + m.d * n.b,
            c: m.a * n.c + m.c * n.d,
            d: m.b * n.c + m.d * n.d,
            e: m.a * n.e + m.c * n.f + m.e,
            f: m.b * n.e + m.d * n.f + m.f,
        }
    }
}
