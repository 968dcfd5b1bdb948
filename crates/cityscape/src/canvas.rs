use cityscape_engine::coords::{Rect, Transform, Vec2};
use cityscape_engine::paint::{Color, LinearGradient};
use cityscape_engine::scene::shapes::points::PointSprite;
use cityscape_engine::scene::{DrawList, ZIndex};

use crate::config::ViewportConfig;

/// Straight-alpha color helper.
#[inline]
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::from_straight(r, g, b, a)
}

/// Opaque color helper.
#[inline]
pub fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::rgb(r, g, b)
}

/// Inner alpha of a radial glow.
pub const GLOW_INNER_ALPHA: f32 = 0.35;
/// Rim alpha of a radial glow.
pub const GLOW_OUTER_ALPHA: f32 = 0.04;

/// Drawing surface handed to each scene layer.
///
/// Wraps the engine's `DrawList` with scene-unit drawing calls. Everything a
/// layer records lands on that layer's z-index, in call order.
pub struct Canvas<'a> {
    draw_list: &'a mut DrawList,
    z: ZIndex,
    viewport: ViewportConfig,
}

impl<'a> Canvas<'a> {
    pub fn new(draw_list: &'a mut DrawList, z: ZIndex, viewport: ViewportConfig) -> Self {
        Self { draw_list, z, viewport }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.viewport.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.viewport.height
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Records `f` under `t`, composed with any enclosing transform.
    pub fn with_transform<F>(&mut self, t: Transform, f: F)
    where
        F: FnOnce(&mut Canvas<'a>),
    {
        self.draw_list.push_transform(t);
        f(self);
        self.draw_list.pop_transform();
    }

    // ── fills ─────────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.draw_list.push_solid_rect(self.z, Rect::new(x, y, w, h), color);
    }

    pub fn gradient_rect(&mut self, rect: Rect, gradient: LinearGradient) {
        self.draw_list.push_gradient_rect(self.z, rect, gradient);
    }

    pub fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, segments: u32, color: Color) {
        self.draw_list
            .push_ellipse(self.z, Vec2::new(cx, cy), Vec2::new(rx, ry), segments, color);
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, segments: u32, color: Color) {
        self.draw_list.push_circle(self.z, Vec2::new(cx, cy), r, segments, color);
    }

    /// Standard radial glow: `GLOW_INNER_ALPHA` at the center fading to
    /// `GLOW_OUTER_ALPHA` at `radius`, tinted `(r, g, b)`.
    pub fn radial_glow(&mut self, cx: f32, cy: f32, radius: f32, segments: u32, r: f32, g: f32, b: f32) {
        self.glow(
            cx,
            cy,
            radius,
            segments,
            rgba(r, g, b, GLOW_INNER_ALPHA),
            rgba(r, g, b, GLOW_OUTER_ALPHA),
        );
    }

    pub fn glow(&mut self, cx: f32, cy: f32, radius: f32, segments: u32, inner: Color, outer: Color) {
        self.draw_list
            .push_glow(self.z, Vec2::new(cx, cy), radius, segments, inner, outer);
    }

    pub fn polygon(&mut self, points: &[(f32, f32)], color: Color) {
        let pts: Vec<Vec2> = points.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
        self.draw_list.push_polygon(self.z, pts, color);
    }

    pub fn triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Color) {
        self.draw_list.push_triangle(
            self.z,
            Vec2::new(a.0, a.1),
            Vec2::new(b.0, b.1),
            Vec2::new(c.0, c.1),
            color,
        );
    }

    // ── strokes ───────────────────────────────────────────────────────────

    /// Line segment; `width` is in output units regardless of transform.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        self.draw_list
            .push_line(self.z, Vec2::new(x1, y1), Vec2::new(x2, y2), width, color);
    }

    pub fn line_strip(&mut self, points: Vec<Vec2>, width: f32, color: Color) {
        self.draw_list.push_line_strip(self.z, points, width, color);
    }

    /// Line rasterised into square points by the DDA stepper.
    pub fn dda_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, point_size: f32, color: Color) {
        self.draw_list
            .push_dda_line(self.z, Vec2::new(x1, y1), Vec2::new(x2, y2), point_size, color);
    }

    pub fn points(&mut self, points: Vec<PointSprite>, size: f32) {
        self.draw_list.push_points(self.z, points, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityscape_engine::scene::DrawCmd;

    #[test]
    fn every_item_lands_on_the_canvas_layer() {
        let mut dl = DrawList::new();
        {
            let mut c = Canvas::new(&mut dl, ZIndex(7), ViewportConfig::default());
            c.fill_rect(0.0, 0.0, 10.0, 10.0, rgb(1.0, 0.0, 0.0));
            c.circle(5.0, 5.0, 2.0, 12, rgb(0.0, 1.0, 0.0));
            c.line(0.0, 0.0, 5.0, 5.0, 2.0, rgb(0.0, 0.0, 1.0));
        }
        assert_eq!(dl.len(), 3);
        assert!(dl.items().iter().all(|i| i.key.z == ZIndex(7)));
    }

    #[test]
    fn with_transform_scopes_the_transform() {
        let mut dl = DrawList::new();
        {
            let mut c = Canvas::new(&mut dl, ZIndex(0), ViewportConfig::default());
            c.with_transform(Transform::translate(100.0, 65.0), |c| {
                c.with_transform(Transform::scale(1.4, 1.4), |c| {
                    c.fill_rect(10.0, 0.0, 1.0, 1.0, rgb(1.0, 1.0, 1.0));
                });
            });
            c.fill_rect(0.0, 0.0, 1.0, 1.0, rgb(1.0, 1.0, 1.0));
        }
        let items = dl.items();
        let p = items[0].transform.apply(Vec2::new(10.0, 0.0));
        assert!((p.x - 114.0).abs() < 1e-4);
        assert!((p.y - 65.0).abs() < 1e-4);
        assert!(items[1].transform.is_identity());
    }

    #[test]
    fn radial_glow_uses_standard_alphas() {
        let mut dl = DrawList::new();
        {
            let mut c = Canvas::new(&mut dl, ZIndex(0), ViewportConfig::default());
            c.radial_glow(0.0, 0.0, 60.0, 32, 1.0, 0.85, 0.5);
        }
        let DrawCmd::Glow(g) = &dl.items()[0].cmd else {
            panic!("expected glow");
        };
        assert!((g.inner.a - GLOW_INNER_ALPHA).abs() < 1e-6);
        assert!((g.outer.a - GLOW_OUTER_ALPHA).abs() < 1e-6);
    }
}
