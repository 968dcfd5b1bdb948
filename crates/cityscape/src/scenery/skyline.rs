//! Distant and mid skylines of blocky lit buildings.

use fastrand::Rng;

use crate::animation::AnimationState;
use crate::canvas::{rgba, Canvas};

/// One row of buildings sharing a base line and size ranges.
#[derive(Debug, Copy, Clone)]
pub struct SkylineLayer {
    pub base_y: f32,
    pub min_w: f32,
    pub max_w: f32,
    pub min_h: f32,
    pub max_h: f32,
    pub seed: u64,
    pub darkness: f32,
}

/// Back row first.
pub const SKYLINES: [SkylineLayer; 2] = [
    SkylineLayer { base_y: 240.0, min_w: 26.0, max_w: 70.0, min_h: 160.0, max_h: 220.0, seed: 101, darkness: 0.42 },
    SkylineLayer { base_y: 160.0, min_w: 36.0, max_w: 88.0, min_h: 140.0, max_h: 220.0, seed: 142, darkness: 0.28 },
];

const WINDOW_W: f32 = 12.0;
const WINDOW_H: f32 = 10.0;
const WINDOW_GAP_X: f32 = 6.0;
const WINDOW_GAP_Y: f32 = 8.0;
const MARGIN_X: f32 = 6.0;
const MARGIN_Y: f32 = 10.0;

pub fn draw(c: &mut Canvas<'_>, _state: &AnimationState) {
    for layer in &SKYLINES {
        skyline(c, layer);
    }
}

fn skyline(c: &mut Canvas<'_>, layer: &SkylineLayer) {
    let mut rng = Rng::with_seed(layer.seed);
    let mut x = -20.0;
    let mut i = 0u64;

    while x < c.width() + 40.0 {
        let w = layer.min_w + rng.f32() * (layer.max_w - layer.min_w);
        let h = layer.min_h + rng.f32() * (layer.max_h - layer.min_h);
        let d = layer.darkness - rng.f32() * 0.12;

        // Each building re-seeds the shared generator; spacing continues from there.
        rng.seed(layer.seed + i * 31);
        building(c, &mut rng, x, layer.base_y, w, h, d);

        x += w + 6.0 + rng.f32() * 12.0;
        i += 1;
    }
}

/// Dark block with a grid of warm windows, roughly a quarter of them unlit.
fn building(c: &mut Canvas<'_>, rng: &mut Rng, x: f32, y: f32, w: f32, h: f32, darkness: f32) {
    c.fill_rect(x, y, w, h, rgba(darkness * 0.15, darkness * 0.18, darkness * 0.22, 1.0));

    let cols = ((w - 2.0 * MARGIN_X) / (WINDOW_W + WINDOW_GAP_X)).max(0.0) as u32;
    let rows = ((h - 2.0 * MARGIN_Y) / (WINDOW_H + WINDOW_GAP_Y)).max(0.0) as u32;

    for r in 0..rows {
        for col in 0..cols {
            if rng.u32(0..4) == 0 {
                continue;
            }
            let wx = x + MARGIN_X + col as f32 * (WINDOW_W + WINDOW_GAP_X);
            let wy = y + MARGIN_Y + r as f32 * (WINDOW_H + WINDOW_GAP_Y);
            // Upper floors are cooler.
            let warm = 0.95 - r as f32 / rows as f32 * 0.45;
            let bright = 0.4 + rng.f32() * 0.85;
            c.fill_rect(wx, wy, WINDOW_W, WINDOW_H, rgba(warm, warm * 0.8, 0.45, 0.85 * bright));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewportConfig;
    use cityscape_engine::scene::{DrawCmd, DrawList, ZIndex};

    fn record() -> DrawList {
        let mut dl = DrawList::new();
        draw(
            &mut Canvas::new(&mut dl, ZIndex(1), ViewportConfig::default()),
            &AnimationState::default(),
        );
        dl
    }

    #[test]
    fn skyline_is_stable_between_frames() {
        assert_eq!(record().items(), record().items());
    }

    #[test]
    fn buildings_span_the_viewport() {
        let dl = record();
        let blocks: Vec<_> = dl
            .items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Rect(r) if r.rect.origin.y == 240.0 || r.rect.origin.y == 160.0 => Some(r.rect),
                _ => None,
            })
            .collect();
        assert!(blocks.iter().any(|r| r.origin.x == -20.0));
        assert!(blocks.iter().any(|r| r.max().x >= 800.0));
    }

    #[test]
    fn windows_sit_inside_their_building() {
        let mut dl = DrawList::new();
        {
            let mut c = Canvas::new(&mut dl, ZIndex(0), ViewportConfig::default());
            building(&mut c, &mut Rng::with_seed(7), 0.0, 100.0, 60.0, 200.0, 0.4);
        }
        let items = dl.items();
        let DrawCmd::Rect(body) = &items[0].cmd else { panic!("expected body") };
        for item in &items[1..] {
            let DrawCmd::Rect(win) = &item.cmd else { panic!("expected window") };
            assert!(win.rect.min().x >= body.rect.min().x);
            assert!(win.rect.max().x <= body.rect.max().x);
            assert!(win.rect.max().y <= body.rect.max().y);
        }
    }
}
