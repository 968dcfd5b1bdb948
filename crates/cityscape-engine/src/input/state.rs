use super::types::InputEvent;
use super::Modifiers;

/// Keyboard state for a single window, carried between translated events.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state, stamped onto every translated key event.
    pub modifiers: Modifiers,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }
            InputEvent::Key { modifiers, .. } => {
                self.modifiers = *modifiers;
            }
            InputEvent::Focused(false) => {
                // Modifier releases are not delivered while unfocused.
                self.modifiers = Modifiers::default();
            }
            InputEvent::Focused(true) => {}
        }
    }
}
