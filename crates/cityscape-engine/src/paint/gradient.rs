use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1]; stops are evaluated in the order given.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient in scene space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Positions outside the axis clamp to the edge stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Vertical gradient running from `y0` (t = 0) to `y1` (t = 1).
    pub fn vertical(y0: f32, y1: f32, stops: Vec<ColorStop>) -> Self {
        Self::new(Vec2::new(0.0, y0), Vec2::new(0.0, y1), stops)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Projects `p` onto the gradient axis (`0` at `start`, `1` at `end`), unclamped.
    pub fn project(&self, p: Vec2) -> f32 {
        let axis = self.end - self.start;
        let len2 = axis.dot(axis);
        if len2 <= 0.0 {
            return 0.0;
        }
        (p - self.start).dot(axis) / len2
    }

    /// Evaluates the gradient at axis parameter `t` (pad spread).
    pub fn sample(&self, t: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::transparent();
        };
        if t <= first.t {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.t) / span);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stop() -> LinearGradient {
        LinearGradient::vertical(
            0.0,
            100.0,
            vec![
                ColorStop::new(0.0, Color::rgb(1.0, 0.0, 0.0)),
                ColorStop::new(0.5, Color::rgb(0.0, 1.0, 0.0)),
                ColorStop::new(1.0, Color::rgb(0.0, 0.0, 1.0)),
            ],
        )
    }

    #[test]
    fn sample_hits_stops_exactly() {
        let g = three_stop();
        assert_eq!(g.sample(0.0), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(g.sample(0.5), Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(g.sample(1.0), Color::rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn sample_pads_outside_range() {
        let g = three_stop();
        assert_eq!(g.sample(-3.0), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(g.sample(7.0), Color::rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn project_measures_along_axis() {
        let g = three_stop();
        assert_eq!(g.project(Vec2::new(42.0, 25.0)), 0.25);
    }

    #[test]
    fn single_stop_is_invalid() {
        let g = LinearGradient::vertical(0.0, 1.0, vec![ColorStop::new(0.0, Color::rgb(1.0, 1.0, 1.0))]);
        assert!(!g.is_valid());
        assert!(three_stop().is_valid());
    }
}
