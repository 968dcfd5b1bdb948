//! Two traffic signals on the bridge, half a cycle apart.

use crate::animation::AnimationState;
use crate::canvas::{rgb, Canvas};
use crate::scenery::waterfront::BRIDGE_Y;
use crate::signal::{signal_phase, SignalLight};

const BOX_W: f32 = 18.0;
const BOX_H: f32 = 54.0;
const LAMP_R: f32 = 6.8;
const DIM: f32 = 0.15;

/// `(x, phase offset in seconds)`; the right signal is placed from the right edge.
pub fn signal_posts(width: f32) -> [(f32, f64); 2] {
    [(40.0, 0.0), (width - 40.0, 3.0)]
}

pub fn draw(c: &mut Canvas<'_>, state: &AnimationState) {
    for (x, offset) in signal_posts(c.width()) {
        signal(c, x, signal_phase(state.traffic_timer, offset));
    }
}

fn signal(c: &mut Canvas<'_>, x: f32, lit: SignalLight) {
    let box_x = x - BOX_W * 0.5;
    let box_y = BRIDGE_Y + 72.0 + 60.0;

    c.fill_rect(x - 4.0, BRIDGE_Y + 72.0, 8.0, 56.0, rgb(0.12, 0.12, 0.14));
    c.fill_rect(box_x - 2.0, box_y - 6.0, BOX_W + 4.0, BOX_H + 6.0, rgb(0.06, 0.06, 0.07));
    c.fill_rect(box_x, box_y, BOX_W, BOX_H, rgb(0.08, 0.08, 0.09));

    let red_y = box_y + BOX_H - 10.0;
    let yellow_y = box_y + BOX_H * 0.5;
    let green_y = box_y + 10.0;

    // Unlit lenses.
    c.circle(x, red_y, LAMP_R, 24, rgb(DIM, 0.0, 0.0));
    c.circle(x, yellow_y, LAMP_R, 24, rgb(DIM, DIM, 0.0));
    c.circle(x, green_y, LAMP_R, 24, rgb(0.0, DIM, 0.0));

    let (y, (r, g, b)) = match lit {
        SignalLight::Red => (red_y, (1.0, 0.18, 0.18)),
        SignalLight::Green => (green_y, (0.4, 1.0, 0.45)),
        SignalLight::Yellow => (yellow_y, (1.0, 0.86, 0.2)),
    };
    c.circle(x, y, LAMP_R, 24, rgb(r, g, b));
    c.radial_glow(x, y, 36.0, 24, r, g, b);
}
