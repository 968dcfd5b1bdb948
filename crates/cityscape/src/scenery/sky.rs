//! Sky layer: gradient, vignette, bats, clouds, halftone band and sun.

use cityscape_engine::coords::{Rect, Transform};
use cityscape_engine::paint::{ColorStop, LinearGradient};
use fastrand::Rng;

use crate::animation::AnimationState;
use crate::canvas::{rgb, rgba, Canvas};

const CLOUD_TINT: (f32, f32, f32) = (0.92, 0.88, 0.95);
const HALFTONE_SEED: u64 = 0x4a1f_7054;

/// Bats as `(x, y, scale)`.
const BATS: [(f32, f32, f32); 6] = [
    (120.0, 520.0, 0.7),
    (160.0, 540.0, 0.5),
    (210.0, 515.0, 0.6),
    (520.0, 560.0, 0.8),
    (560.0, 540.0, 0.6),
    (680.0, 510.0, 0.7),
];

pub fn draw(c: &mut Canvas<'_>, _state: &AnimationState) {
    let (w, h) = (c.width(), c.height());

    gradient(c);
    for &(x, y, s) in &BATS {
        bat(c, x, y, s);
    }
    cloud(c, 220.0, h * 0.62, 1.05, 0.75);
    cloud(c, 420.0, h * 0.66, 0.82, 0.55);
    cloud(c, 620.0, h * 0.58, 0.9, 0.60);
    halftone_band(c, &mut Rng::with_seed(HALFTONE_SEED));
    sun_and_flare(c, w * 0.33, h * 0.36);
    cloud_layer(c, h * 0.62, 11, 8, 0.42, 0.8, 1.1);
    cloud_layer(c, h * 0.50, 23, 10, 0.30, 0.6, 1.2);
}

/// Deep teal at the top, violet at mid height, warm orange at the horizon,
/// plus a faint darkening across the top band.
fn gradient(c: &mut Canvas<'_>) {
    let (w, h) = (c.width(), c.height());
    let stops = vec![
        ColorStop::new(0.0, rgb(0.02, 0.12, 0.18)),
        ColorStop::new(0.5, rgb(0.28, 0.12, 0.36)),
        ColorStop::new(1.0, rgb(1.0, 0.62, 0.34)),
    ];
    c.gradient_rect(Rect::new(0.0, 0.0, w, h), LinearGradient::vertical(h, 0.0, stops));
    c.fill_rect(0.0, h * 0.82, w, h * 0.18, rgba(0.0, 0.0, 0.06, 0.12));
}

fn bat(c: &mut Canvas<'_>, x: f32, y: f32, scale: f32) {
    let color = rgb(0.05, 0.05, 0.07);
    let t = Transform::translate(x, y).then(Transform::scale(scale, scale));
    c.with_transform(t, |c| {
        c.triangle((0.0, 0.0), (-18.0, 8.0), (-30.0, 0.0), color);
        c.triangle((0.0, 0.0), (18.0, 8.0), (30.0, 0.0), color);
        c.triangle((-4.0, 0.0), (4.0, 0.0), (0.0, -10.0), color);
    });
}

/// Stack of translucent ellipses forming one soft cloud.
fn cloud(c: &mut Canvas<'_>, cx: f32, cy: f32, scale: f32, alpha: f32) {
    let (r, g, b) = CLOUD_TINT;
    let s = scale;

    c.ellipse(cx, cy, 120.0 * s, 34.0 * s, 48, rgba(r, g, b, 0.18 * alpha));
    c.ellipse(cx - 80.0 * s, cy + 8.0 * s, 92.0 * s, 28.0 * s, 40, rgba(r, g, b, 0.16 * alpha));
    c.ellipse(cx + 78.0 * s, cy + 6.0 * s, 96.0 * s, 26.0 * s, 40, rgba(r, g, b, 0.16 * alpha));
    c.ellipse(cx - 36.0 * s, cy - 18.0 * s, 78.0 * s, 22.0 * s, 36, rgba(r, g, b, 0.12 * alpha));
    c.ellipse(cx + 36.0 * s, cy - 20.0 * s, 82.0 * s, 20.0 * s, 36, rgba(r, g, b, 0.12 * alpha));
    // Warm haze over the whole cloud.
    c.ellipse(cx - 20.0 * s, cy + 6.0 * s, 160.0 * s, 40.0 * s, 56, rgba(1.0, 0.96, 0.85, 0.06 * alpha));
    // Faint underside shadow.
    c.fill_rect(
        cx - 160.0 * s,
        cy - 28.0 * s,
        320.0 * s,
        6.0 * s,
        rgba(0.02, 0.02, 0.04, 0.03 * alpha),
    );
}

/// Checkerboard of jittered dots across the lower sky.
fn halftone_band(c: &mut Canvas<'_>, rng: &mut Rng) {
    const ROWS: i32 = 6;
    const COLS: i32 = 120;

    let w = c.width();
    let band_y = c.height() * 0.38;
    let color = rgba(0.95, 0.9, 0.7, 0.35);

    for row in 0..ROWS {
        for col in 0..COLS {
            if (col + row) % 2 != 0 {
                continue;
            }
            let x = col as f32 / COLS as f32 * w + rng.f32() * 2.0;
            let y = band_y + (row - ROWS / 2) as f32 * 6.0 + rng.f32() * 3.0;
            c.fill_rect(x, y, 2.8, 2.8, color);
        }
    }
}

fn sun_and_flare(c: &mut Canvas<'_>, cx: f32, cy: f32) {
    c.circle(cx, cy, 26.0, 60, rgb(1.0, 0.95, 0.64));
    c.radial_glow(cx, cy, 100.0, 40, 1.0, 0.72, 0.3);
    // Horizontal lens streak.
    c.ellipse(cx, cy, 220.0, 18.0, 32, rgba(1.0, 0.62, 0.22, 0.045));
}

/// `count` procedurally placed cloud puffs around `base_y`, stable per `seed`.
fn cloud_layer(
    c: &mut Canvas<'_>,
    base_y: f32,
    seed: u64,
    count: u32,
    alpha: f32,
    scale_min: f32,
    scale_max: f32,
) {
    let mut rng = Rng::with_seed(seed);
    let w = c.width();

    for i in 0..count {
        let cx = rng.f32() * w;
        let rx = 40.0 + rng.f32() * 160.0;
        let ry = 10.0 + rng.f32() * 40.0;
        let y_off = (rng.f32() - 0.5) * 30.0;
        let a = alpha * (0.35 + rng.f32() * 0.45);
        let tint = 0.9 - rng.f32() * 0.25;
        let scale = scale_min + rng.f32() * (scale_max - scale_min);

        c.ellipse(
            cx,
            base_y + y_off + i as f32 * 1.5,
            rx * scale,
            ry,
            36,
            rgba(tint * 0.92, tint * 0.83, tint * 1.02, a),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewportConfig;
    use cityscape_engine::scene::{DrawCmd, DrawList, ZIndex};

    fn record(state: &AnimationState) -> DrawList {
        let mut dl = DrawList::new();
        draw(&mut Canvas::new(&mut dl, ZIndex(0), ViewportConfig::default()), state);
        dl
    }

    #[test]
    fn sky_starts_with_full_viewport_gradient() {
        let dl = record(&AnimationState::default());
        let DrawCmd::Rect(first) = &dl.items()[0].cmd else {
            panic!("expected gradient rect first");
        };
        assert_eq!(first.rect, Rect::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn halftone_band_has_every_other_cell() {
        let mut dl = DrawList::new();
        halftone_band(
            &mut Canvas::new(&mut dl, ZIndex(0), ViewportConfig::default()),
            &mut Rng::with_seed(1),
        );
        assert_eq!(dl.len(), 6 * 120 / 2);
    }

    #[test]
    fn sky_is_identical_across_frames() {
        let first = AnimationState::default();
        let mut later = AnimationState::default();
        for _ in 0..50 {
            later.advance(0.016, &ViewportConfig::default());
        }
        let (a, b) = (record(&first), record(&later));
        assert!(!a.is_empty());
        assert_eq!(a.items(), b.items());
    }
}
