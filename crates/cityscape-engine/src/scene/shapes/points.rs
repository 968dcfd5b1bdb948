use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// A single square point sprite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointSprite {
    pub pos: Vec2,
    pub color: Color,
}

/// Batch of square point sprites of one size.
///
/// `size` is the side length in output units and ignores transform scale.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsCmd {
    pub points: Vec<PointSprite>,
    pub size: f32,
}

/// Rasterizes the segment `from → to` with the digital differential analyzer.
///
/// Emits `floor(max(|dx|, |dy|)) + 1` evenly spaced samples starting at
/// `from`; when the major-axis length is integral the last sample is `to`.
/// A zero-length segment yields the single point `from`.
pub fn dda_points(from: Vec2, to: Vec2) -> Vec<Vec2> {
    let d = to - from;
    let steps = d.x.abs().max(d.y.abs());
    if !steps.is_finite() || steps < 1.0 {
        return vec![from];
    }

    let inc = Vec2::new(d.x / steps, d.y / steps);
    let count = steps.floor() as usize + 1;
    (0..count).map(|i| from + inc * i as f32).collect()
}

impl DrawList {
    /// Records a batch of point sprites. An empty batch draws nothing.
    #[inline]
    pub fn push_points(&mut self, z: ZIndex, points: Vec<PointSprite>, size: f32) {
        if points.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Points(PointsCmd { points, size }));
    }

    /// Records a line made of DDA-rasterized point sprites.
    pub fn push_dda_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, size: f32, color: Color) {
        let points = dda_points(from, to)
            .into_iter()
            .map(|pos| PointSprite { pos, color })
            .collect();
        self.push_points(z, points, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_line_emits_one_point_per_unit_inclusive() {
        let pts = dda_points(Vec2::new(180.0, 120.0), Vec2::new(180.0, 290.0));
        assert_eq!(pts.len(), 171);
        assert_eq!(pts[0], Vec2::new(180.0, 120.0));
        assert_eq!(pts[170], Vec2::new(180.0, 290.0));
    }

    #[test]
    fn major_axis_drives_step_count() {
        let pts = dda_points(Vec2::new(0.0, 0.0), Vec2::new(4.0, -2.0));
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[2], Vec2::new(2.0, -1.0));
        assert_eq!(pts[4], Vec2::new(4.0, -2.0));
    }

    #[test]
    fn zero_length_yields_start_point() {
        let p = Vec2::new(3.0, 7.0);
        assert_eq!(dda_points(p, p), vec![p]);
    }

    #[test]
    fn fractional_length_stops_short_of_end() {
        let pts = dda_points(Vec2::zero(), Vec2::new(2.5, 0.0));
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[2], Vec2::new(2.0, 0.0));
    }

    #[test]
    fn push_dda_line_records_one_points_command() {
        let mut dl = DrawList::new();
        dl.push_dda_line(ZIndex(0), Vec2::zero(), Vec2::new(22.0, 0.0), 2.0, Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(dl.len(), 1);
        let DrawCmd::Points(cmd) = &dl.items()[0].cmd else { panic!("expected points") };
        assert_eq!(cmd.points.len(), 23);
        assert_eq!(cmd.size, 2.0);
    }
}
