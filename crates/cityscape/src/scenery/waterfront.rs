//! Bridge base, animated water and the speed boat.

use cityscape_engine::coords::Transform;
use fastrand::Rng;

use crate::animation::AnimationState;
use crate::canvas::{rgb, rgba, Canvas};

/// Road / bridge deck height.
pub const BRIDGE_Y: f32 = 120.0;
const DECK_H: f32 = 72.0;

const BOAT_WATER_Y: f32 = 65.0;
const BOAT_SCALE: f32 = 1.4;

const GLINT_SEED: u64 = 0x9e37_79b9;

pub fn draw_bridge(c: &mut Canvas<'_>, _state: &AnimationState) {
    let w = c.width();

    c.fill_rect(0.0, 0.0, w, BRIDGE_Y, rgb(0.02, 0.03, 0.06));
    c.fill_rect(0.0, BRIDGE_Y, w, DECK_H, rgb(0.06, 0.06, 0.09));
    c.fill_rect(0.0, BRIDGE_Y + DECK_H, w, 6.0, rgb(0.03, 0.03, 0.05));

    let rail = rgb(0.14, 0.14, 0.16);
    c.line(18.0, BRIDGE_Y + 16.0, w - 18.0, BRIDGE_Y + 16.0, 2.0, rail);
    c.line(18.0, BRIDGE_Y + 30.0, w - 18.0, BRIDGE_Y + 30.0, 2.0, rail);

    let mut px = 36.0;
    while px < w {
        c.fill_rect(px - 2.0, BRIDGE_Y, 4.0, DECK_H, rgb(0.07, 0.07, 0.09));
        px += 40.0;
    }

    // Faint warm glints on the dark base.
    let mut rng = Rng::with_seed(GLINT_SEED);
    for _ in 0..18 {
        let x = rng.f32() * w;
        let gw = 30.0 + rng.f32() * 100.0;
        let y = rng.f32() * (BRIDGE_Y * 0.8);
        let a = 0.02 + rng.f32() * 0.06;
        let gh = 1.0 + rng.f32() * 3.0;
        c.fill_rect(x, y, gw, gh, rgba(0.95, 0.7, 0.4, a));
    }
}

/// Water below the bridge line, with drifting reflection streaks and a
/// shimmer row under the deck. Driven only by `water_time`.
pub fn draw_water(c: &mut Canvas<'_>, state: &AnimationState) {
    let w = c.width();
    let top = BRIDGE_Y;
    let t = state.water_time as f32;

    c.fill_rect(0.0, 0.0, w, top, rgb(0.06, 0.18, 0.32));

    for i in 0..40 {
        let fi = i as f32;
        let y = (fi * 14.0 + t * 22.0).rem_euclid(top);
        let x = (fi * 63.0 + t * 40.0).rem_euclid(w);
        let sw = 60.0 + 40.0 * (t + fi).sin();
        let a = 0.04 + 0.03 * (t * 1.4 + fi).sin();
        c.fill_rect(x, y, sw, 2.0, rgba(0.95, 0.75, 0.45, a));
    }

    for i in 0..12 {
        let fi = i as f32;
        let x = fi * (w / 12.0) + (t + fi).sin() * 8.0;
        c.fill_rect(x, top - 12.0, 6.0, 12.0, rgba(0.9, 0.7, 0.4, 0.08));
    }
}

pub fn draw_boat(c: &mut Canvas<'_>, state: &AnimationState) {
    let t = Transform::translate(state.boat_position as f32, BOAT_WATER_Y)
        .then(Transform::scale(BOAT_SCALE, BOAT_SCALE));

    c.with_transform(t, |c| {
        let window = rgb(0.30, 0.55, 0.75);

        // Hull, pointed bow to the right.
        c.polygon(
            &[(0.0, 2.0), (10.0, 0.0), (95.0, 0.0), (120.0, 9.0), (95.0, 18.0), (12.0, 18.0), (0.0, 14.0)],
            rgb(0.12, 0.12, 0.15),
        );
        c.line(12.0, 18.0, 95.0, 18.0, 2.0, rgb(0.25, 0.25, 0.28));
        c.fill_rect(14.0, 7.0, 70.0, 3.0, rgb(0.0, 0.0, 0.0));

        // Cabin and windows.
        c.polygon(&[(30.0, 18.0), (70.0, 18.0), (60.0, 34.0), (34.0, 34.0)], rgb(0.88, 0.88, 0.90));
        c.polygon(&[(38.0, 22.0), (56.0, 22.0), (50.0, 30.0), (40.0, 30.0)], window);
        c.fill_rect(58.0, 22.0, 10.0, 6.0, window);
    });
}
