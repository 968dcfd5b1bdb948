use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight segment with a width in output units.
///
/// The width is not affected by the item's transform scale.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

/// Connected run of segments sharing width and color.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStripCmd {
    pub points: Vec<Vec2>,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, color }));
    }

    /// Records a polyline. Fewer than 2 points draws nothing.
    #[inline]
    pub fn push_line_strip(&mut self, z: ZIndex, points: Vec<Vec2>, width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        self.push(z, DrawCmd::LineStrip(LineStripCmd { points, width, color }));
    }
}
