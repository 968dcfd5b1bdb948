//! Moon and the foreground city lights.

use cityscape_engine::coords::Vec2;
use cityscape_engine::scene::shapes::points::PointSprite;
use fastrand::Rng;

use crate::animation::AnimationState;
use crate::canvas::{rgb, rgba, Canvas};

pub const MOON_RADIUS: f32 = 22.0;
pub const CITY_LIGHT_COUNT: usize = 180;
const CITY_LIGHT_SEED: u64 = 0xc17e_1195;

pub fn draw_moon(c: &mut Canvas<'_>, _state: &AnimationState) {
    let (cx, cy) = (c.width() * 0.78, c.height() * 0.78);
    c.glow(
        cx,
        cy,
        MOON_RADIUS * 3.0,
        60,
        rgba(0.9, 0.9, 1.0, 0.25),
        rgba(0.9, 0.9, 1.0, 0.0),
    );
    c.circle(cx, cy, MOON_RADIUS, 60, rgb(0.97, 0.97, 1.0));
}

/// Warm 2-unit points scattered over the city band (y in 120..480).
pub fn draw_city_lights(c: &mut Canvas<'_>, _state: &AnimationState) {
    let w = c.width();
    let mut rng = Rng::with_seed(CITY_LIGHT_SEED);

    let lights = (0..CITY_LIGHT_COUNT)
        .map(|_| {
            let x = rng.f32() * w;
            let y = 120.0 + rng.f32() * 360.0;
            let b = 0.5 + rng.f32() * 0.6;
            PointSprite {
                pos: Vec2::new(x, y),
                color: rgb(0.95 * b, 0.72 * b, 0.45 * b),
            }
        })
        .collect();
    c.points(lights, 2.0);
}
