//! Sunset cityscape: an animated 2D scene of a city at dusk.
//!
//! A train crosses an elevated viaduct, a boat drifts across the water,
//! and traffic signals cycle on the bridge. Space pauses, `+`/`-` change the
//! train speed and Escape quits.

pub mod animation;
pub mod app;
pub mod canvas;
pub mod config;
pub mod controls;
pub mod layers;
pub mod scenery;
pub mod signal;

use cityscape_engine::window::Runtime;

pub use app::CityscapeApp;
pub use config::CityscapeConfig;

/// Opens the window and runs the animation until the user quits.
pub fn run(config: CityscapeConfig) -> anyhow::Result<()> {
    log::info!(
        "starting '{}' ({}x{}, tick {:?})",
        config.title,
        config.viewport.width,
        config.viewport.height,
        config.tick_interval
    );
    let runtime = config.runtime_config();
    let gpu_init = config.gpu_init();
    Runtime::run(runtime, gpu_init, CityscapeApp::new(config))
}
