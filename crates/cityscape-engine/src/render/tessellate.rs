//! CPU tessellation of draw commands into colored triangles.
//!
//! Output is a flat triangle list in paint order. The GPU side draws it with a
//! single pipeline, so later commands always cover earlier ones.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Transform, Vec2};
use crate::paint::{Color, LinearGradient, Paint};
use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::glow::GlowCmd;
use crate::scene::shapes::points::PointsCmd;
use crate::scene::{DrawCmd, DrawList};

/// Vertex layout shared with `shaders/mesh.wgsl` (24 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 2],
    /// Premultiplied RGBA.
    pub color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    #[inline]
    fn new(p: Vec2, c: Color) -> Self {
        Self { pos: [p.x, p.y], color: c.to_array() }
    }
}

/// Reusable tessellation buffer.
#[derive(Debug, Default)]
pub struct Tessellator {
    vertices: Vec<MeshVertex>,
}

impl Tessellator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellates `draw_list` in paint order, replacing the previous output.
    pub fn tessellate(&mut self, draw_list: &mut DrawList) -> &[MeshVertex] {
        self.vertices.clear();
        for item in draw_list.iter_in_paint_order() {
            let t = item.transform;
            match &item.cmd {
                DrawCmd::Rect(cmd) => self.rect(cmd.rect, &cmd.paint, t),
                DrawCmd::Ellipse(cmd) => self.ellipse(cmd, t),
                DrawCmd::Glow(cmd) => self.glow(cmd, t),
                DrawCmd::Line(cmd) => {
                    self.segment(t.apply(cmd.from), t.apply(cmd.to), cmd.width, cmd.color)
                }
                DrawCmd::LineStrip(cmd) => {
                    for pair in cmd.points.windows(2) {
                        self.segment(t.apply(pair[0]), t.apply(pair[1]), cmd.width, cmd.color);
                    }
                }
                DrawCmd::Polygon(cmd) => {
                    let Some((&first, rest)) = cmd.points.split_first() else { continue };
                    let origin = t.apply(first);
                    for pair in rest.windows(2) {
                        self.triangle(
                            [origin, t.apply(pair[0]), t.apply(pair[1])],
                            [cmd.color; 3],
                        );
                    }
                }
                DrawCmd::Points(cmd) => self.points(cmd, t),
            }
        }
        &self.vertices
    }

    /// Output of the last [`tessellate`](Self::tessellate) call.
    #[inline]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    // ── primitives ────────────────────────────────────────────────────────

    fn triangle(&mut self, p: [Vec2; 3], c: [Color; 3]) {
        for i in 0..3 {
            self.vertices.push(MeshVertex::new(p[i], c[i]));
        }
    }

    /// Quad given counter-clockwise corners.
    fn quad(&mut self, p: [Vec2; 4], c: [Color; 4]) {
        self.triangle([p[0], p[1], p[2]], [c[0], c[1], c[2]]);
        self.triangle([p[0], p[2], p[3]], [c[0], c[2], c[3]]);
    }

    fn rect(&mut self, rect: Rect, paint: &Paint, t: Transform) {
        let r = rect.normalized();
        if r.is_empty() || !r.is_finite() {
            return;
        }
        match paint {
            Paint::Solid(c) => self.quad(r.corners().map(|p| t.apply(p)), [*c; 4]),
            Paint::LinearGradient(g) => {
                for band in gradient_bands(r, g) {
                    let corners = band.corners();
                    let colors = corners.map(|p| g.sample(g.project(p)));
                    self.quad(corners.map(|p| t.apply(p)), colors);
                }
            }
        }
    }

    fn ellipse(&mut self, cmd: &EllipseCmd, t: Transform) {
        let rim = fan_rim(cmd.center, cmd.radii, cmd.segments);
        let center = t.apply(cmd.center);
        for pair in rim.windows(2) {
            self.triangle([center, t.apply(pair[0]), t.apply(pair[1])], [cmd.color; 3]);
        }
    }

    fn glow(&mut self, cmd: &GlowCmd, t: Transform) {
        let rim = fan_rim(cmd.center, Vec2::new(cmd.radius, cmd.radius), cmd.segments);
        let center = t.apply(cmd.center);
        for pair in rim.windows(2) {
            self.triangle(
                [center, t.apply(pair[0]), t.apply(pair[1])],
                [cmd.inner, cmd.outer, cmd.outer],
            );
        }
    }

    /// Segment between already-transformed endpoints, `width` in output units.
    fn segment(&mut self, a: Vec2, b: Vec2, width: f32, color: Color) {
        let dir = (b - a).normalize_or_zero();
        if dir == Vec2::zero() || width <= 0.0 {
            return;
        }
        let n = dir.perp() * (width * 0.5);
        self.quad([a - n, b - n, b + n, a + n], [color; 4]);
    }

    fn points(&mut self, cmd: &PointsCmd, t: Transform) {
        if cmd.size <= 0.0 {
            return;
        }
        let half = cmd.size * 0.5;
        for sprite in &cmd.points {
            let p = t.apply(sprite.pos);
            let r = Rect::new(p.x - half, p.y - half, cmd.size, cmd.size);
            self.quad(r.corners(), [sprite.color; 4]);
        }
    }
}

/// Rim vertices of a fan, closed (first point repeated at the end).
fn fan_rim(center: Vec2, radii: Vec2, segments: u32) -> Vec<Vec2> {
    let n = segments.max(1);
    (0..=n)
        .map(|i| {
            let theta = i as f32 / n as f32 * std::f32::consts::TAU;
            Vec2::new(center.x + theta.cos() * radii.x, center.y + theta.sin() * radii.y)
        })
        .collect()
}

/// Splits `r` at every stop of an axis-aligned gradient so each band
/// interpolates between exactly two stops. Oblique gradients get one band
/// with per-corner colors.
fn gradient_bands(r: Rect, g: &LinearGradient) -> Vec<Rect> {
    let axis = g.end - g.start;
    let vertical = axis.x == 0.0 && axis.y != 0.0;
    let horizontal = axis.y == 0.0 && axis.x != 0.0;
    if !vertical && !horizontal {
        return vec![r];
    }

    let (lo, hi) = if vertical { (r.min().y, r.max().y) } else { (r.min().x, r.max().x) };
    let mut cuts: Vec<f32> = g
        .stops
        .iter()
        .map(|s| if vertical { g.start.y + axis.y * s.t } else { g.start.x + axis.x * s.t })
        .filter(|c| *c > lo && *c < hi)
        .collect();
    cuts.push(lo);
    cuts.push(hi);
    cuts.sort_by(f32::total_cmp);
    cuts.dedup();

    cuts.windows(2)
        .map(|w| {
            if vertical {
                Rect::new(r.origin.x, w[0], r.size.x, w[1] - w[0])
            } else {
                Rect::new(w[0], r.origin.y, w[1] - w[0], r.size.y)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::ColorStop;
    use crate::scene::shapes::points::PointSprite;
    use crate::scene::ZIndex;

    const Z: ZIndex = ZIndex(0);

    fn white() -> Color {
        Color::rgb(1.0, 1.0, 1.0)
    }

    fn run(dl: &mut DrawList) -> Vec<MeshVertex> {
        Tessellator::new().tessellate(dl).to_vec()
    }

    // ── rects ─────────────────────────────────────────────────────────────

    #[test]
    fn solid_rect_is_two_triangles() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Z, Rect::new(0.0, 0.0, 10.0, 5.0), white());
        assert_eq!(run(&mut dl).len(), 6);
    }

    #[test]
    fn empty_rect_emits_nothing() {
        let mut dl = DrawList::new();
        dl.push_solid_rect(Z, Rect::new(0.0, 0.0, 0.0, 5.0), white());
        assert!(run(&mut dl).is_empty());
    }

    #[test]
    fn three_stop_vertical_gradient_splits_into_two_bands() {
        let top = Color::rgb(0.0, 0.0, 1.0);
        let mid = Color::rgb(0.0, 1.0, 0.0);
        let bot = Color::rgb(1.0, 0.0, 0.0);
        let g = LinearGradient::vertical(
            600.0,
            0.0,
            vec![ColorStop::new(0.0, top), ColorStop::new(0.5, mid), ColorStop::new(1.0, bot)],
        );
        let mut dl = DrawList::new();
        dl.push_gradient_rect(Z, Rect::new(0.0, 0.0, 800.0, 600.0), g);
        let v = run(&mut dl);
        assert_eq!(v.len(), 12);

        // Bottom band starts at y = 0 with the bottom color; mid line carries the mid color.
        assert_eq!(v[0].pos, [0.0, 0.0]);
        assert_eq!(v[0].color, bot.to_array());
        assert_eq!(v[2].pos, [800.0, 300.0]);
        assert_eq!(v[2].color, mid.to_array());
        // Top band ends with the top color.
        let last_top = v.iter().find(|vx| vx.pos == [800.0, 600.0]).map(|vx| vx.color);
        assert_eq!(last_top, Some(top.to_array()));
    }

    // ── fans ──────────────────────────────────────────────────────────────

    #[test]
    fn ellipse_emits_one_triangle_per_segment() {
        let mut dl = DrawList::new();
        dl.push_ellipse(Z, Vec2::new(50.0, 50.0), Vec2::new(20.0, 10.0), 24, white());
        let v = run(&mut dl);
        assert_eq!(v.len(), 24 * 3);
        assert_eq!(v[0].pos, [50.0, 50.0]);
        // First rim vertex sits on the +X radius.
        assert!((v[1].pos[0] - 70.0).abs() < 1e-4);
        assert!((v[1].pos[1] - 50.0).abs() < 1e-4);
    }

    #[test]
    fn glow_fades_from_inner_to_outer() {
        let inner = Color::from_straight(1.0, 0.9, 0.6, 0.35);
        let outer = Color::from_straight(1.0, 0.9, 0.6, 0.04);
        let mut dl = DrawList::new();
        dl.push_glow(Z, Vec2::zero(), 60.0, 32, inner, outer);
        let v = run(&mut dl);
        assert_eq!(v.len(), 32 * 3);
        assert_eq!(v[0].color, inner.to_array());
        assert_eq!(v[1].color, outer.to_array());
        assert_eq!(v[2].color, outer.to_array());
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn transform_moves_and_scales_geometry() {
        let mut dl = DrawList::new();
        dl.push_transform(Transform::translate(100.0, 65.0).then(Transform::scale(1.4, 1.4)));
        dl.push_solid_rect(Z, Rect::new(10.0, 0.0, 10.0, 10.0), white());
        dl.pop_transform();
        let v = run(&mut dl);
        assert!((v[0].pos[0] - 114.0).abs() < 1e-4);
        assert!((v[0].pos[1] - 65.0).abs() < 1e-4);
        assert!((v[2].pos[0] - 128.0).abs() < 1e-4);
        assert!((v[2].pos[1] - 79.0).abs() < 1e-4);
    }

    #[test]
    fn line_width_ignores_transform_scale() {
        let mut dl = DrawList::new();
        dl.push_transform(Transform::scale(3.0, 3.0));
        dl.push_line(Z, Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0, white());
        dl.pop_transform();
        let v = run(&mut dl);
        assert_eq!(v.len(), 6);
        let ys: Vec<f32> = v.iter().map(|vx| vx.pos[1]).collect();
        let span = ys.iter().cloned().fold(f32::MIN, f32::max) - ys.iter().cloned().fold(f32::MAX, f32::min);
        assert!((span - 2.0).abs() < 1e-5);
        assert!(v.iter().any(|vx| (vx.pos[0] - 30.0).abs() < 1e-5));
    }

    #[test]
    fn degenerate_line_is_skipped() {
        let mut dl = DrawList::new();
        dl.push_line(Z, Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), 2.0, white());
        assert!(run(&mut dl).is_empty());
    }

    #[test]
    fn line_strip_emits_one_quad_per_segment() {
        let mut dl = DrawList::new();
        let pts = vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(20.0, 5.0)];
        dl.push_line_strip(Z, pts, 2.0, white());
        assert_eq!(run(&mut dl).len(), 12);
    }

    // ── polygons and points ───────────────────────────────────────────────

    #[test]
    fn convex_polygon_fans_from_first_vertex() {
        let mut dl = DrawList::new();
        let hull = [
            Vec2::new(0.0, 2.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(95.0, 0.0),
            Vec2::new(120.0, 9.0),
            Vec2::new(95.0, 18.0),
            Vec2::new(12.0, 18.0),
            Vec2::new(0.0, 14.0),
        ];
        dl.push_polygon(Z, hull, white());
        let v = run(&mut dl);
        assert_eq!(v.len(), 5 * 3);
        assert!(v.chunks(3).all(|tri| tri[0].pos == [0.0, 2.0]));
    }

    #[test]
    fn points_become_centered_squares() {
        let mut dl = DrawList::new();
        dl.push_points(
            Z,
            vec![PointSprite { pos: Vec2::new(10.0, 10.0), color: white() }],
            2.0,
        );
        let v = run(&mut dl);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].pos, [9.0, 9.0]);
        assert_eq!(v[2].pos, [11.0, 11.0]);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn output_follows_paint_order_across_shape_kinds() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let mut dl = DrawList::new();
        dl.push_circle(ZIndex(1), Vec2::zero(), 5.0, 8, blue);
        dl.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), red);
        let v = run(&mut dl);
        assert_eq!(v[0].color, red.to_array());
        assert_eq!(v[v.len() - 1].color, blue.to_array());
    }
}
