//! Input handling for the client.
//!
//! Converts platform key events to the core input snapshot. Left/right (or
//! A/D) pump the swing, Space lets go; every other key is ignored.

use highbar_core::SwingInput;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks current key state and converts it to a [`SwingInput`].
#[derive(Debug, Default)]
pub struct InputHandler {
    current: SwingInput,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key event and update the input snapshot.
    pub fn process_key(&mut self, key: PhysicalKey, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        let flag = match key {
            PhysicalKey::Code(KeyCode::ArrowLeft) | PhysicalKey::Code(KeyCode::KeyA) => {
                Some(SwingInput::SWING_NEG)
            }
            PhysicalKey::Code(KeyCode::ArrowRight) | PhysicalKey::Code(KeyCode::KeyD) => {
                Some(SwingInput::SWING_POS)
            }
            PhysicalKey::Code(KeyCode::Space) => Some(SwingInput::RELEASE),
            _ => None,
        };

        if let Some(flag) = flag {
            self.current.set(flag, pressed);
        }
    }

    /// Get the current input snapshot for this frame's tick.
    pub fn current(&self) -> SwingInput {
        self.current
    }

    /// Reset all inputs (e.g., on focus loss).
    pub fn reset(&mut self) {
        self.current = SwingInput::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mapping() {
        let mut handler = InputHandler::new();

        handler.process_key(
            PhysicalKey::Code(KeyCode::ArrowRight),
            ElementState::Pressed,
        );
        assert_eq!(handler.current().swing_axis(), 1);

        handler.process_key(PhysicalKey::Code(KeyCode::Space), ElementState::Pressed);
        assert!(handler.current().release());
        assert_eq!(handler.current().swing_axis(), 1);

        handler.process_key(
            PhysicalKey::Code(KeyCode::ArrowRight),
            ElementState::Released,
        );
        assert_eq!(handler.current().swing_axis(), 0);
        assert!(handler.current().release());
    }

    #[test]
    fn wasd_aliases() {
        let mut handler = InputHandler::new();

        handler.process_key(PhysicalKey::Code(KeyCode::KeyA), ElementState::Pressed);
        assert_eq!(handler.current().swing_axis(), -1);

        handler.process_key(PhysicalKey::Code(KeyCode::KeyD), ElementState::Pressed);
        assert_eq!(handler.current().swing_axis(), 0);
    }

    #[test]
    fn unmapped_keys_ignored() {
        let mut handler = InputHandler::new();
        handler.process_key(PhysicalKey::Code(KeyCode::KeyQ), ElementState::Pressed);
        assert_eq!(handler.current(), SwingInput::new());
    }

    #[test]
    fn focus_loss_clears_state() {
        let mut handler = InputHandler::new();
        handler.process_key(PhysicalKey::Code(KeyCode::ArrowLeft), ElementState::Pressed);
        handler.reset();
        assert_eq!(handler.current(), SwingInput::new());
    }
}
