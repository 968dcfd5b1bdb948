//! Keyboard commands.

use cityscape_engine::core::AppControl;
use cityscape_engine::input::{InputEvent, Key, KeyState};

use crate::animation::AnimationState;

/// The four recognised key commands.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyCommand {
    Exit,
    TogglePause,
    SpeedUp,
    SlowDown,
}

impl KeyCommand {
    /// ASCII mapping: ESC (27), space, `+`, `-`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{1b}' => Some(Self::Exit),
            ' ' => Some(Self::TogglePause),
            '+' => Some(Self::SpeedUp),
            '-' => Some(Self::SlowDown),
            _ => None,
        }
    }

    /// Maps a key press to a command. Releases map to nothing; so do
    /// auto-repeated Space presses.
    ///
    /// The typed character wins, so Shift+`=` counts as `+`. Keys that
    /// produce no text fall back on their physical position.
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        let InputEvent::Key { key, state: KeyState::Pressed, repeat, .. } = event else {
            return None;
        };

        let command = event
            .typed_char()
            .and_then(Self::from_char)
            .or_else(|| Self::from_key(*key))?;

        if *repeat && command == Self::TogglePause {
            return None;
        }
        Some(command)
    }

    fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Self::Exit),
            Key::Space => Some(Self::TogglePause),
            Key::NumpadAdd => Some(Self::SpeedUp),
            Key::NumpadSubtract => Some(Self::SlowDown),
            _ => None,
        }
    }

    /// Applies the command to `state`.
    pub fn apply(self, state: &mut AnimationState) -> AppControl {
        log::debug!("key command: {self:?}");
        match self {
            Self::Exit => {
                log::info!("exit requested");
                return AppControl::Exit;
            }
            Self::TogglePause => {
                state.toggle_pause();
                log::info!("{}", if state.paused { "paused" } else { "resumed" });
            }
            Self::SpeedUp => {
                state.speed_up();
                log::info!("train speed {:.1}", state.train_speed);
            }
            Self::SlowDown => {
                state.slow_down();
                log::info!("train speed {:.1}", state.train_speed);
            }
        }
        AppControl::Continue
    }
}
