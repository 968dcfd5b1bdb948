use super::Vec2;

/// Translate-then-scale placement applied to recorded geometry.
///
/// A point `p` maps to `translate + p * scale` (component-wise scale).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translate: Vec2,
    pub scale: Vec2,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate: Vec2::zero(),
        scale: Vec2::new(1.0, 1.0),
    };

    #[inline]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self { translate: Vec2::new(x, y), scale: Vec2::new(1.0, 1.0) }
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self { translate: Vec2::zero(), scale: Vec2::new(sx, sy) }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.translate.x + p.x * self.scale.x,
            self.translate.y + p.y * self.scale.y,
        )
    }

    /// Returns the transform that applies `inner` first, then `self`.
    #[inline]
    pub fn then(self, inner: Transform) -> Transform {
        Transform {
            translate: self.apply(inner.translate),
            scale: Vec2::new(self.scale.x * inner.scale.x, self.scale.y * inner.scale.y),
        }
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
