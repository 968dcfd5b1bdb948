//! Street lamps drawn with the DDA line rasteriser, each with a layered glow.

use crate::animation::AnimationState;
use crate::canvas::{rgb, rgba, Canvas};
use crate::scenery::waterfront::BRIDGE_Y;

pub const LAMP_XS: [f32; 3] = [180.0, 420.0, 660.0];

const POLE_HEIGHT: f32 = 170.0;
const ARM_LEN: f32 = 22.0;
const HEAD_LEN: f32 = 12.0;
const POINT_SIZE: f32 = 2.0;

pub fn draw(c: &mut Canvas<'_>, _state: &AnimationState) {
    for x in LAMP_XS {
        lamp_post(c, x, BRIDGE_Y);
    }
}

fn lamp_post(c: &mut Canvas<'_>, x: f32, ground_y: f32) {
    let arm_y = ground_y + POLE_HEIGHT;
    let lx = x + ARM_LEN;
    let ly = arm_y - 22.0;

    let steel = rgb(0.35, 0.35, 0.38);
    c.dda_line(x, ground_y, x, arm_y, POINT_SIZE, steel);
    c.dda_line(x, arm_y, lx, arm_y, POINT_SIZE, steel);
    c.dda_line(lx, arm_y, lx, arm_y - HEAD_LEN, POINT_SIZE, rgb(1.0, 0.95, 0.65));

    // Core, mid halo, outer halo, then a wide radial glow.
    c.ellipse(lx, ly, 7.5, 6.0, 32, rgba(1.0, 0.99, 0.88, 1.0));
    c.ellipse(lx, ly, 16.0, 12.0, 32, rgba(1.0, 0.93, 0.72, 0.55));
    c.ellipse(lx, ly, 30.0, 20.0, 32, rgba(1.0, 0.86, 0.55, 0.26));
    c.radial_glow(lx, ly, 60.0, 32, 1.0, 0.85, 0.50);
}
