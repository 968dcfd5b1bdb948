use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use crate::input::{InputEvent, InputState, Key, KeyState, Modifiers};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events not represented by the input subsystem.
pub fn translate_window_event(state: &InputState, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            // winit 0.30: ModifiersChanged carries a wrapper with `.state()`.
            let ms: ModifiersState = m.state();
            Some(InputEvent::ModifiersChanged(map_modifiers(ms)))
        }

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => Some(key_event(
            event.physical_key,
            event.state,
            event.repeat,
            event.text.as_ref().map(|t| t.to_string()),
            state.modifiers,
        )),

        _ => None,
    }
}

fn key_event(
    physical_key: PhysicalKey,
    element_state: ElementState,
    repeat: bool,
    text: Option<String>,
    modifiers: Modifiers,
) -> InputEvent {
    let (state, text) = match element_state {
        ElementState::Pressed => (KeyState::Pressed, text),
        ElementState::Released => (KeyState::Released, None),
    };
    let (key, code) = map_key(physical_key);

    InputEvent::Key { key, state, modifiers, code, repeat, text }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => {
            let key = match code {
                KeyCode::Escape => Key::Escape,
                KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
                KeyCode::Tab => Key::Tab,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Space => Key::Space,

                KeyCode::Minus => Key::Minus,
                KeyCode::Equal => Key::Equal,
                KeyCode::NumpadAdd => Key::NumpadAdd,
                KeyCode::NumpadSubtract => Key::NumpadSubtract,

                KeyCode::ArrowUp => Key::ArrowUp,
                KeyCode::ArrowDown => Key::ArrowDown,
                KeyCode::ArrowLeft => Key::ArrowLeft,
                KeyCode::ArrowRight => Key::ArrowRight,

                KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
                KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
                KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
                KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

                KeyCode::KeyA => Key::A,
                KeyCode::KeyB => Key::B,
                KeyCode::KeyC => Key::C,
                KeyCode::KeyD => Key::D,
                KeyCode::KeyE => Key::E,
                KeyCode::KeyF => Key::F,
                KeyCode::KeyG => Key::G,
                KeyCode::KeyH => Key::H,
                KeyCode::KeyI => Key::I,
                KeyCode::KeyJ => Key::J,
                KeyCode::KeyK => Key::K,
                KeyCode::KeyL => Key::L,
                KeyCode::KeyM => Key::M,
                KeyCode::KeyN => Key::N,
                KeyCode::KeyO => Key::O,
                KeyCode::KeyP => Key::P,
                KeyCode::KeyQ => Key::Q,
                KeyCode::KeyR => Key::R,
                KeyCode::KeyS => Key::S,
                KeyCode::KeyT => Key::T,
                KeyCode::KeyU => Key::U,
                KeyCode::KeyV => Key::V,
                KeyCode::KeyW => Key::W,
                KeyCode::KeyX => Key::X,
                KeyCode::KeyY => Key::Y,
                KeyCode::KeyZ => Key::Z,

                KeyCode::Digit0 => Key::Digit0,
                KeyCode::Digit1 => Key::Digit1,
                KeyCode::Digit2 => Key::Digit2,
                KeyCode::Digit3 => Key::Digit3,
                KeyCode::Digit4 => Key::Digit4,
                KeyCode::Digit5 => Key::Digit5,
                KeyCode::Digit6 => Key::Digit6,
                KeyCode::Digit7 => Key::Digit7,
                KeyCode::Digit8 => Key::Digit8,
                KeyCode::Digit9 => Key::Digit9,

                other => Key::Unknown(other as u32),
            };

            (key, code as u32)
        }

        // winit 0.30 uses NativeKeyCode; no stable numeric is guaranteed here.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_keys_map_to_named_variants() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Equal)).0, Key::Equal);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Minus)).0, Key::Minus);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadAdd)).0, Key::NumpadAdd);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadSubtract)).0, Key::NumpadSubtract);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)).0, Key::Escape);
    }

    #[test]
    fn unmapped_keys_keep_their_code() {
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::F5));
        assert_eq!(key, Key::Unknown(code));
    }

    #[test]
    fn press_keeps_text_release_drops_it() {
        let shift = Modifiers { shift: true, ..Default::default() };
        let pressed = key_event(
            PhysicalKey::Code(KeyCode::Equal),
            ElementState::Pressed,
            false,
            Some("+".into()),
            shift,
        );
        assert_eq!(pressed.typed_char(), Some('+'));

        let released = key_event(
            PhysicalKey::Code(KeyCode::Equal),
            ElementState::Released,
            false,
            Some("+".into()),
            shift,
        );
        let InputEvent::Key { state, text, modifiers, .. } = released else {
            panic!("expected key event");
        };
        assert_eq!(state, KeyState::Released);
        assert_eq!(text, None);
        assert_eq!(modifiers, shift);
    }

    #[test]
    fn modifiers_follow_winit_state() {
        let m = map_modifiers(ModifiersState::SHIFT | ModifiersState::CONTROL);
        assert!(m.shift && m.ctrl && !m.alt && !m.meta);
    }
}
