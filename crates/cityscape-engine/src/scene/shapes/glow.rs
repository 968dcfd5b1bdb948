use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::ellipse::MIN_SEGMENTS;

/// Radial glow: a triangle fan whose color fades from `inner` at the center
/// to `outer` on the rim.
#[derive(Debug, Clone, PartialEq)]
pub struct GlowCmd {
    pub center: Vec2,
    pub radius: f32,
    pub segments: u32,
    pub inner: Color,
    pub outer: Color,
}

impl DrawList {
    /// Records a radial glow.
    #[inline]
    pub fn push_glow(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        segments: u32,
        inner: Color,
        outer: Color,
    ) {
        self.push(z, DrawCmd::Glow(GlowCmd {
            center,
            radius,
            segments: segments.max(MIN_SEGMENTS),
            inner,
            outer,
        }));
    }
}
