use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled convex polygon (fan from the first vertex).
///
/// Non-convex outlines are not split; they render with fan artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl DrawList {
    /// Records a filled convex polygon. Fewer than 3 points draws nothing.
    #[inline]
    pub fn push_polygon(&mut self, z: ZIndex, points: impl Into<Vec<Vec2>>, color: Color) {
        let points = points.into();
        if points.len() < 3 {
            return;
        }
        self.push(z, DrawCmd::Polygon(PolygonCmd { points, color }));
    }

    /// Records a filled triangle.
    #[inline]
    pub fn push_triangle(&mut self, z: ZIndex, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.push_polygon(z, vec![a, b, c], color);
    }
}
