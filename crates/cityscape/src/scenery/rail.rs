//! Elevated viaduct and the train running on it.

use cityscape_engine::coords::Transform;
use fastrand::Rng;

use crate::animation::AnimationState;
use crate::canvas::{rgb, rgba, Canvas};

/// Top of the viaduct deck; the train rides just below it.
pub const TRACK_Y: f32 = 170.0;

const DECK_THICKNESS: f32 = 22.0;

pub const CAR_COUNT: u32 = 4;
pub const CAR_W: f32 = 140.0;
pub const CAR_H: f32 = 64.0;
const CAR_GAP: f32 = 8.0;
const WHEEL_COUNT: i32 = 8;

const WINDOW_JITTER_SEED: u64 = 0x5eed_7a1e;

pub fn draw_viaduct(c: &mut Canvas<'_>, _state: &AnimationState) {
    let w = c.width();
    let deck_y = TRACK_Y - DECK_THICKNESS;

    c.fill_rect(0.0, deck_y, w, DECK_THICKNESS, rgb(0.78, 0.78, 0.82));
    c.fill_rect(0.0, deck_y, w, 3.0, rgb(0.55, 0.55, 0.58));

    let mut x = 0.0;
    while x < w {
        c.fill_rect(x, deck_y + DECK_THICKNESS - 6.0, 20.0, 4.0, rgb(0.62, 0.62, 0.65));
        x += 32.0;
    }

    let mut x = 80.0;
    while x < w {
        c.fill_rect(x - 18.0, 0.0, 36.0, deck_y, rgb(0.70, 0.70, 0.74));
        c.fill_rect(x - 28.0, 0.0, 56.0, 14.0, rgb(0.55, 0.55, 0.58));
        c.fill_rect(x - 26.0, deck_y - 6.0, 52.0, 6.0, rgb(0.60, 0.60, 0.63));
        x += 160.0;
    }

    // Shadow under the deck.
    c.fill_rect(0.0, deck_y - 6.0, w, 6.0, rgba(0.0, 0.0, 0.0, 0.18));
}

/// Four cars trailing left of `train_position`, head light at the front.
pub fn draw_train(c: &mut Canvas<'_>, state: &AnimationState) {
    let origin = Transform::translate(state.train_position as f32, TRACK_Y - 8.0);
    let mut jitter = Rng::with_seed(WINDOW_JITTER_SEED);

    c.with_transform(origin, |c| {
        for car in 0..CAR_COUNT {
            let x0 = -(car as f32) * (CAR_W + CAR_GAP);
            c.fill_rect(x0, 0.0, CAR_W, CAR_H, rgb(0.95, 0.72, 0.18));
            c.fill_rect(x0, CAR_H - 12.0, CAR_W, 12.0, rgb(0.14, 0.14, 0.18));
            c.fill_rect(x0, 10.0, CAR_W, 6.0, rgb(0.92, 0.58, 0.16));

            let mut wx = 12.0;
            while wx < CAR_W - 12.0 {
                let wy = 26.0 + jitter.f32() * 2.0;
                let a = 0.96 + jitter.f32() * 0.04;
                c.fill_rect(x0 + wx, wy, 24.0, 20.0, rgba(1.0, 0.95, 0.45, a));
                wx += 34.0;
            }
        }

        c.fill_rect(16.0, 18.0, 10.0, 18.0, rgb(1.0, 0.98, 0.78));
        c.radial_glow(36.0, 26.0, 60.0, 20, 1.0, 0.95, 0.6);

        for i in 0..WHEEL_COUNT {
            wheel(c, -(i as f32) * 58.0 + 24.0);
        }
        // Extra wheel under the nose.
        wheel(c, 92.0);
    });
}

fn wheel(c: &mut Canvas<'_>, x: f32) {
    c.circle(x, -8.0, 12.0, 32, rgb(0.08, 0.08, 0.10));
    c.circle(x, -8.0, 5.5, 24, rgb(0.2, 0.2, 0.22));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewportConfig;
    use cityscape_engine::coords::Vec2;
    use cityscape_engine::scene::{DrawCmd, DrawList, ZIndex};

    fn record_train(state: &AnimationState) -> DrawList {
        let mut dl = DrawList::new();
        draw_train(&mut Canvas::new(&mut dl, ZIndex(9), ViewportConfig::default()), state);
        dl
    }

    #[test]
    fn lead_car_starts_at_train_position() {
        let state = AnimationState { train_position: 250.0, ..Default::default() };
        let dl = record_train(&state);
        let first = &dl.items()[0];
        let DrawCmd::Rect(body) = &first.cmd else { panic!("expected car body") };
        let p = first.transform.apply(body.rect.origin);
        assert_eq!(p, Vec2::new(250.0, TRACK_Y - 8.0));
        assert_eq!(body.rect.size, Vec2::new(CAR_W, CAR_H));
    }

    #[test]
    fn cars_are_spaced_by_width_plus_gap() {
        let dl = record_train(&AnimationState::default());
        let bodies: Vec<f32> = dl
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Rect(r) if r.rect.size == Vec2::new(CAR_W, CAR_H) => Some(r.rect.origin.x),
                _ => None,
            })
            .collect();
        assert_eq!(bodies, vec![0.0, -148.0, -296.0, -444.0]);
    }

    #[test]
    fn nine_wheels_with_hubs() {
        let dl = record_train(&AnimationState::default());
        let circles = dl.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Ellipse(_))).count();
        assert_eq!(circles, 9 * 2);
    }

    #[test]
    fn train_shape_is_stable_while_it_moves() {
        let a = record_train(&AnimationState::default());
        let b = record_train(&AnimationState { train_position: 0.0, ..Default::default() });
        let cmds_a: Vec<_> = a.items().iter().map(|i| &i.cmd).collect();
        let cmds_b: Vec<_> = b.items().iter().map(|i| &i.cmd).collect();
        assert_eq!(cmds_a, cmds_b);
        assert_ne!(a.items()[0].transform, b.items()[0].transform);
    }

    #[test]
    fn viaduct_pillars_reach_the_ground() {
        let mut dl = DrawList::new();
        draw_viaduct(
            &mut Canvas::new(&mut dl, ZIndex(8), ViewportConfig::default()),
            &AnimationState::default(),
        );
        let pillars = dl
            .items()
            .iter()
            .filter(|i| {
                matches!(&i.cmd, DrawCmd::Rect(r)
                    if r.rect.origin.y == 0.0 && r.rect.size.y == TRACK_Y - DECK_THICKNESS)
            })
            .count();
        // 80, 240, 400, 560, 720
        assert_eq!(pillars, 5);
    }
}
