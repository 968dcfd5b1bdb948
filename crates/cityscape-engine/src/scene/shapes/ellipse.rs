use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Minimum fan resolution; fewer segments degenerate into a sliver.
pub const MIN_SEGMENTS: u32 = 3;

/// Filled ellipse, tessellated as a triangle fan with `segments` slices.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    /// Horizontal and vertical radii.
    pub radii: Vec2,
    pub segments: u32,
    pub color: Color,
}

impl DrawList {
    /// Records a filled ellipse.
    #[inline]
    pub fn push_ellipse(&mut self, z: ZIndex, center: Vec2, radii: Vec2, segments: u32, color: Color) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd {
            center,
            radii,
            segments: segments.max(MIN_SEGMENTS),
            color,
        }));
    }

    /// Records a filled circle.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, segments: u32, color: Color) {
        self.push_ellipse(z, center, Vec2::new(radius, radius), segments, color);
    }
}
