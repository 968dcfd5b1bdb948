//! Catenary poles along the track and the power pillars behind the bridge.

use cityscape_engine::coords::Vec2;

use crate::animation::AnimationState;
use crate::canvas::{rgb, Canvas};
use crate::scenery::rail::TRACK_Y;
use crate::scenery::waterfront::BRIDGE_Y;

const PILLAR_HEIGHT: f32 = 220.0;
const PILLAR_SPACING: f32 = 140.0;
const STRANDS: u32 = 3;

pub fn draw(c: &mut Canvas<'_>, _state: &AnimationState) {
    catenary(c);

    let xs = pillar_xs(c.width());
    for &x in &xs {
        pillar(c, x, BRIDGE_Y, PILLAR_HEIGHT);
    }
    wires(c, &xs, BRIDGE_Y, PILLAR_HEIGHT);
}

/// Pillar positions: every 140 units from x = 60, keeping 60 units clear of
/// the right edge.
pub fn pillar_xs(width: f32) -> Vec<f32> {
    let mut xs = Vec::new();
    let mut x = 60.0;
    while x < width - 60.0 {
        xs.push(x);
        x += PILLAR_SPACING;
    }
    xs
}

fn catenary(c: &mut Canvas<'_>) {
    let w = c.width();
    let steel = rgb(0.12, 0.12, 0.14);

    let mut x = 40.0;
    while x < w {
        c.fill_rect(x - 5.0, TRACK_Y, 10.0, 220.0, steel);
        c.fill_rect(x - 24.0, TRACK_Y + 178.0, 48.0, 6.0, steel);
        x += 160.0;
    }

    let wire = rgb(0.22, 0.22, 0.26);
    c.line(0.0, TRACK_Y + 184.0, w, TRACK_Y + 184.0, 2.0, wire);
    c.line(0.0, TRACK_Y + 196.0, w, TRACK_Y + 196.0, 2.0, wire);
}

/// Lattice pillar: two legs, two cross arms and four insulators.
fn pillar(c: &mut Canvas<'_>, x: f32, base_y: f32, height: f32) {
    let half_w = 8.0;
    let y0 = base_y + 72.0;
    let y_top = y0 + height;

    let leg = rgb(0.22, 0.22, 0.26);
    c.fill_rect(x - half_w, y0, 4.0, height, leg);
    c.fill_rect(x + half_w - 4.0, y0, 4.0, height, leg);

    let arm1 = y_top - height * 0.25;
    let arm2 = y_top - height * 0.55;
    let arm = rgb(0.16, 0.16, 0.18);
    c.fill_rect(x - 30.0, arm1, 60.0, 4.0, arm);
    c.fill_rect(x - 22.0, arm2, 44.0, 4.0, arm);

    let insulator = rgb(0.65, 0.65, 0.7);
    c.fill_rect(x - 34.0, arm1 + 4.0, 6.0, 6.0, insulator);
    c.fill_rect(x + 28.0, arm1 + 4.0, 6.0, 6.0, insulator);
    c.fill_rect(x - 26.0, arm2 + 4.0, 6.0, 6.0, insulator);
    c.fill_rect(x + 20.0, arm2 + 4.0, 6.0, 6.0, insulator);
}

/// Polyline for one strand: a point on each pillar, plus a midpoint between
/// neighbouring pillars.
pub fn strand_points(xs: &[f32], base_y: f32, height: f32, strand: u32) -> Vec<Vec2> {
    let s = strand as f32;
    let top_y = base_y + 72.0 + height - s * 12.0;
    let mut pts = Vec::with_capacity(xs.len() * 2);

    for (i, &x) in xs.iter().enumerate() {
        let sag = 12.0 * (i as f32 * 0.6 + s * 0.9).sin() * 0.08;
        pts.push(Vec2::new(x, top_y - sag.abs()));
        if let Some(&next) = xs.get(i + 1) {
            pts.push(Vec2::new((x + next) * 0.5, top_y + 10.0 + sag * 0.6));
        }
    }
    pts
}

fn wires(c: &mut Canvas<'_>, xs: &[f32], base_y: f32, height: f32) {
    let color = rgb(0.06, 0.06, 0.08);
    for strand in 0..STRANDS {
        c.line_strip(strand_points(xs, base_y, height, strand), 2.0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillars_every_140_from_60() {
        assert_eq!(pillar_xs(800.0), vec![60.0, 200.0, 340.0, 480.0, 620.0]);
    }

    #[test]
    fn strand_visits_each_pillar_and_midpoint() {
        let xs = pillar_xs(800.0);
        let pts = strand_points(&xs, BRIDGE_Y, PILLAR_HEIGHT, 0);
        assert_eq!(pts.len(), xs.len() * 2 - 1);
        assert_eq!(pts[0].x, 60.0);
        assert_eq!(pts[1].x, 130.0);
        // First pillar of strand 0 has zero sag.
        assert_eq!(pts[0].y, BRIDGE_Y + 72.0 + PILLAR_HEIGHT);
    }

    #[test]
    fn lower_strands_hang_lower() {
        let xs = pillar_xs(800.0);
        let top = strand_points(&xs, BRIDGE_Y, PILLAR_HEIGHT, 0);
        let bottom = strand_points(&xs, BRIDGE_Y, PILLAR_HEIGHT, 2);
        assert!(bottom[0].y < top[0].y);
    }
}
