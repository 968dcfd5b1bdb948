//! Animation state and the per-tick update.

use crate::config::ViewportConfig;

/// Train wraps once it is this far past the right edge.
pub const TRAIN_WRAP_MARGIN: f64 = 360.0;
/// Where the train re-enters after wrapping.
pub const TRAIN_RESET: f64 = -760.0;
pub const BOAT_WRAP_MARGIN: f64 = 120.0;
pub const BOAT_RESET: f64 = -150.0;
/// Traffic timer is reduced modulo this once it reaches it.
pub const TRAFFIC_TIMER_BOUND: f64 = 100_000.0;

pub const MIN_TRAIN_SPEED: f64 = 0.2;
pub const TRAIN_SPEED_STEP: f64 = 0.2;

/// Mutable animation quantities, advanced once per tick.
///
/// Positions are scene units per tick, timers are seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub train_position: f64,
    pub train_speed: f64,
    pub boat_position: f64,
    pub boat_speed: f64,
    pub water_time: f64,
    pub traffic_timer: f64,
    pub paused: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            train_position: -520.0,
            train_speed: 2.8,
            boat_position: -120.0,
            boat_speed: 1.2,
            water_time: 0.0,
            traffic_timer: 0.0,
            paused: false,
        }
    }
}

impl AnimationState {
    /// Advances one tick of `dt` seconds.
    ///
    /// Pausing freezes the train, the boat and the traffic timer; the water
    /// keeps moving.
    pub fn advance(&mut self, dt: f64, viewport: &ViewportConfig) {
        let width = viewport.width as f64;

        if !self.paused {
            self.train_position += self.train_speed;
            if self.train_position > width + TRAIN_WRAP_MARGIN {
                self.train_position = TRAIN_RESET;
            }

            self.boat_position += self.boat_speed;
            if self.boat_position > width + BOAT_WRAP_MARGIN {
                self.boat_position = BOAT_RESET;
            }

            self.traffic_timer += dt;
            if self.traffic_timer >= TRAFFIC_TIMER_BOUND {
                self.traffic_timer %= TRAFFIC_TIMER_BOUND;
            }
        }

        self.water_time += dt;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn speed_up(&mut self) {
        self.train_speed += TRAIN_SPEED_STEP;
    }

    /// Lowers the train speed, never below [`MIN_TRAIN_SPEED`].
    pub fn slow_down(&mut self) {
        self.train_speed = (self.train_speed - TRAIN_SPEED_STEP).max(MIN_TRAIN_SPEED);
    }
}
