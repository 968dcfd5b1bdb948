//! Engine-facing application: owns the animation state and the renderer.

use cityscape_engine::core::{App, AppControl, FrameCtx};
use cityscape_engine::input::InputEvent;
use cityscape_engine::render::MeshRenderer;
use cityscape_engine::scene::DrawList;

use crate::animation::AnimationState;
use crate::config::CityscapeConfig;
use crate::controls::KeyCommand;
use crate::layers::render_frame;

pub struct CityscapeApp {
    config: CityscapeConfig,
    state: AnimationState,
    draw_list: DrawList,
    renderer: MeshRenderer,
}

impl CityscapeApp {
    pub fn new(config: CityscapeConfig) -> Self {
        let state = config.initial.clone();
        Self {
            config,
            state,
            draw_list: DrawList::new(),
            renderer: MeshRenderer::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }
}

impl App for CityscapeApp {
    fn on_input(&mut self, event: &InputEvent) -> AppControl {
        KeyCommand::from_event(event)
            .map(|command| command.apply(&mut self.state))
            .unwrap_or(AppControl::Continue)
    }

    fn on_tick(&mut self) -> AppControl {
        self.state.advance(self.config.tick_dt, &self.config.viewport);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        render_frame(&self.state, &self.config.viewport, &mut self.draw_list);

        let dl = &mut self.draw_list;
        let renderer = &mut self.renderer;
        ctx.render(self.config.viewport.to_viewport(), self.config.clear_color, |rctx, target| {
            renderer.render(rctx, target, dl);
        })
    }
}
