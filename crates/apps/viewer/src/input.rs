//! Keyboard input tracking
//!
//! The event loop drains winit key events into this snapshot; the
//! frame step then queries it. Held keys drive repeating actions
//! (light translation, increment/decrement), just-pressed keys drive
//! one-shot actions (category/channel selection, toggles, info).

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Keyboard state snapshot for one frame
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Keys currently held down
    pressed: HashSet<KeyCode>,
    /// Keys that went down since the last frame
    just_pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, clearing the just-pressed set
    ///
    /// Call after the frame's mutations have been applied.
    pub fn begin_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Record a key-down event
    ///
    /// OS auto-repeat re-delivers key-down for held keys; those do not
    /// re-enter the just-pressed set.
    pub fn press(&mut self, key: KeyCode) {
        if self.pressed.insert(key) {
            self.just_pressed.insert(key);
        }
    }

    /// Record a key-up event
    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut kb = KeyboardState::new();
        assert!(!kb.any_pressed());

        kb.press(KeyCode::ArrowLeft);
        assert!(kb.is_pressed(KeyCode::ArrowLeft));
        assert!(kb.is_just_pressed(KeyCode::ArrowLeft));

        kb.begin_frame();
        assert!(kb.is_pressed(KeyCode::ArrowLeft));
        assert!(!kb.is_just_pressed(KeyCode::ArrowLeft));

        kb.release(KeyCode::ArrowLeft);
        assert!(!kb.is_pressed(KeyCode::ArrowLeft));
    }

    #[test]
    fn test_auto_repeat_is_not_just_pressed() {
        let mut kb = KeyboardState::new();
        kb.press(KeyCode::KeyA);
        kb.begin_frame();
        // Auto-repeat delivers another down event while held.
        kb.press(KeyCode::KeyA);
        assert!(kb.is_pressed(KeyCode::KeyA));
        assert!(!kb.is_just_pressed(KeyCode::KeyA));
    }

    #[test]
    fn test_simultaneous_keys() {
        let mut kb = KeyboardState::new();
        kb.press(KeyCode::ArrowUp);
        kb.press(KeyCode::Equal);
        kb.press(KeyCode::Digit2);
        assert!(kb.is_pressed(KeyCode::ArrowUp));
        assert!(kb.is_pressed(KeyCode::Equal));
        assert!(kb.is_just_pressed(KeyCode::Digit2));
    }
}
