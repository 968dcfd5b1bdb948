use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::glow::GlowCmd;
use crate::scene::shapes::line::{LineCmd, LineStripCmd};
use crate::scene::shapes::points::PointsCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::tessellate` to emit triangles for it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Ellipse(EllipseCmd),
    Glow(GlowCmd),
    Line(LineCmd),
    LineStrip(LineStripCmd),
    Polygon(PolygonCmd),
    Points(PointsCmd),
}
