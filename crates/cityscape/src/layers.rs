//! Render layer table and frame recording.

use cityscape_engine::scene::{DrawList, ZIndex};

use crate::animation::AnimationState;
use crate::canvas::Canvas;
use crate::config::ViewportConfig;
use crate::scenery::{lamps, night, power, rail, sky, skyline, traffic, waterfront};

/// Scene layers, back to front. The discriminant is the layer's z-index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Layer {
    Sky = 0,
    Skyline = 1,
    Bridge = 2,
    Water = 3,
    Boat = 4,
    PowerLines = 5,
    TrafficSignals = 6,
    LampPosts = 7,
    Viaduct = 8,
    Train = 9,
    Moon = 10,
    CityLights = 11,
}

impl Layer {
    #[inline]
    pub const fn z_index(self) -> ZIndex {
        ZIndex(self as i32)
    }
}

pub type DrawFn = fn(&mut Canvas<'_>, &AnimationState);

/// One entry of the layer table.
#[derive(Copy, Clone)]
pub struct LayerDesc {
    pub layer: Layer,
    pub draw: DrawFn,
}

/// Paint order of the scene.
pub const SCENE_LAYERS: [LayerDesc; 12] = [
    LayerDesc { layer: Layer::Sky, draw: sky::draw },
    LayerDesc { layer: Layer::Skyline, draw: skyline::draw },
    LayerDesc { layer: Layer::Bridge, draw: waterfront::draw_bridge },
    LayerDesc { layer: Layer::Water, draw: waterfront::draw_water },
    LayerDesc { layer: Layer::Boat, draw: waterfront::draw_boat },
    LayerDesc { layer: Layer::PowerLines, draw: power::draw },
    LayerDesc { layer: Layer::TrafficSignals, draw: traffic::draw },
    LayerDesc { layer: Layer::LampPosts, draw: lamps::draw },
    LayerDesc { layer: Layer::Viaduct, draw: rail::draw_viaduct },
    LayerDesc { layer: Layer::Train, draw: rail::draw_train },
    LayerDesc { layer: Layer::Moon, draw: night::draw_moon },
    LayerDesc { layer: Layer::CityLights, draw: night::draw_city_lights },
];

/// Records one frame of the scene into `draw_list`, replacing its contents.
pub fn render_frame(state: &AnimationState, viewport: &ViewportConfig, draw_list: &mut DrawList) {
    draw_list.clear();
    for desc in &SCENE_LAYERS {
        let mut canvas = Canvas::new(draw_list, desc.layer.z_index(), *viewport);
        (desc.draw)(&mut canvas, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityscape_engine::render::Tessellator;

    fn frame(state: &AnimationState) -> DrawList {
        let mut dl = DrawList::new();
        render_frame(state, &ViewportConfig::default(), &mut dl);
        dl
    }

    // ── table ─────────────────────────────────────────────────────────────

    #[test]
    fn layer_table_order() {
        let order: Vec<Layer> = SCENE_LAYERS.iter().map(|d| d.layer).collect();
        assert_eq!(
            order,
            vec![
                Layer::Sky,
                Layer::Skyline,
                Layer::Bridge,
                Layer::Water,
                Layer::Boat,
                Layer::PowerLines,
                Layer::TrafficSignals,
                Layer::LampPosts,
                Layer::Viaduct,
                Layer::Train,
                Layer::Moon,
                Layer::CityLights,
            ]
        );
    }

    #[test]
    fn z_index_equals_table_position() {
        for (i, desc) in SCENE_LAYERS.iter().enumerate() {
            assert_eq!(desc.layer.z_index(), ZIndex(i as i32));
        }
    }

    // ── frames ────────────────────────────────────────────────────────────

    #[test]
    fn every_layer_draws_something() {
        let mut dl = frame(&AnimationState::default());
        let zs: Vec<i32> = dl.iter_in_paint_order().map(|i| i.key.z.0).collect();
        for desc in &SCENE_LAYERS {
            assert!(zs.contains(&desc.layer.z_index().0), "{:?} is empty", desc.layer);
        }
    }

    #[test]
    fn frames_paint_back_to_front() {
        let mut dl = frame(&AnimationState::default());
        let zs: Vec<ZIndex> = dl.iter_in_paint_order().map(|i| i.key.z).collect();
        assert!(zs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(zs.first(), Some(&Layer::Sky.z_index()));
        assert_eq!(zs.last(), Some(&Layer::CityLights.z_index()));
    }

    #[test]
    fn same_state_records_same_frame() {
        let mut s = AnimationState::default();
        s.advance(0.016, &ViewportConfig::default());
        assert_eq!(frame(&s).items(), frame(&s).items());
    }

    #[test]
    fn render_frame_replaces_previous_contents() {
        let state = AnimationState::default();
        let mut dl = DrawList::new();
        render_frame(&state, &ViewportConfig::default(), &mut dl);
        let n = dl.len();
        render_frame(&state, &ViewportConfig::default(), &mut dl);
        assert_eq!(dl.len(), n);
    }

    #[test]
    fn whole_frame_tessellates() {
        let mut dl = frame(&AnimationState::default());
        let vertices = Tessellator::new().tessellate(&mut dl).len();
        assert!(vertices > 0);
        assert_eq!(vertices % 3, 0);
    }
}
