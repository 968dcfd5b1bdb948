//! Application configuration.

use std::time::Duration;

use cityscape_engine::coords::Viewport;
use cityscape_engine::device::GpuInit;
use cityscape_engine::paint::Color;
use cityscape_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

use crate::animation::AnimationState;

/// Fixed orthographic projection box, origin bottom-left, +Y up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

impl ViewportConfig {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn to_viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Everything the application needs at start-up.
#[derive(Debug, Clone)]
pub struct CityscapeConfig {
    pub title: String,
    pub viewport: ViewportConfig,
    /// Wall-clock spacing of update ticks.
    pub tick_interval: Duration,
    /// Simulated seconds added per tick.
    pub tick_dt: f64,
    pub initial: AnimationState,
    pub clear_color: Color,
}

impl CityscapeConfig {
    /// Window configuration: fixed size matching the viewport, not resizable.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.viewport.width as f64, self.viewport.height as f64),
            resizable: false,
            tick_interval: Some(self.tick_interval),
        }
    }

    /// Linear surface so vertex colors reach the screen as written.
    pub fn gpu_init(&self) -> GpuInit {
        GpuInit { prefer_srgb: false, ..GpuInit::default() }
    }
}

impl Default for CityscapeConfig {
    fn default() -> Self {
        Self {
            title: "Sunset Cityscape".to_string(),
            viewport: ViewportConfig::default(),
            tick_interval: Duration::from_millis(16),
            tick_dt: 0.016,
            initial: AnimationState::default(),
            clear_color: Color::rgb(0.0, 0.0, 0.02),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_matches_viewport() {
        let cfg = CityscapeConfig::default();
        let rt = cfg.runtime_config();
        assert_eq!(rt.title, "Sunset Cityscape");
        assert_eq!(rt.initial_size, LogicalSize::new(800.0, 600.0));
        assert!(!rt.resizable);
        assert_eq!(rt.tick_interval, Some(Duration::from_millis(16)));
    }

    #[test]
    fn surface_is_linear() {
        assert!(!CityscapeConfig::default().gpu_init().prefer_srgb);
    }
}
