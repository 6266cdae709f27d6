//! Keyboard input handling

use game_core::{Host, Key, Keys};

/// Map a DOM `KeyboardEvent.key` value to a logical key
pub fn key_from_name(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Key::Up),
        "ArrowDown" | "s" | "S" => Some(Key::Down),
        "Escape" => Some(Key::Quit),
        _ => None,
    }
}

/// Pressed-key set fed by DOM events and polled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    keys: Keys,
    tick: u64,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event; returns true if the key is one the game uses
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        match key_from_name(key) {
            Some(k) => {
                self.keys.press(k);
                true
            }
            None => false,
        }
    }

    /// Handle key up event
    pub fn handle_key_up(&mut self, key: &str) -> bool {
        match key_from_name(key) {
            Some(k) => {
                self.keys.release(k);
                true
            }
            None => false,
        }
    }

    /// Forget held keys (window lost focus)
    pub fn clear(&mut self) {
        self.keys = Keys::new();
    }

    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}

impl Host for KeyboardState {
    fn pressed_keys(&self) -> Keys {
        self.keys
    }

    fn frame_tick(&self) -> u64 {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(key_from_name("w"), Some(Key::Up));
        assert_eq!(key_from_name("ArrowUp"), Some(Key::Up));
        assert_eq!(key_from_name("S"), Some(Key::Down));
        assert_eq!(key_from_name("ArrowDown"), Some(Key::Down));
        assert_eq!(key_from_name("Escape"), Some(Key::Quit));
        assert_eq!(key_from_name("a"), None);
        assert_eq!(key_from_name(" "), None);
    }

    #[test]
    fn test_keyboard_state_tracks_held_keys() {
        let mut kb = KeyboardState::new();
        assert!(kb.handle_key_down("w"));
        assert!(kb.handle_key_down("ArrowDown"));
        assert!(!kb.handle_key_down("q"));

        let keys = kb.pressed_keys();
        assert!(keys.is_pressed(Key::Up));
        assert!(keys.is_pressed(Key::Down));
        assert!(!keys.is_pressed(Key::Quit));

        kb.handle_key_up("W");
        assert!(!kb.pressed_keys().is_pressed(Key::Up));

        kb.clear();
        assert!(kb.pressed_keys().is_empty());
    }

    #[test]
    fn test_tick_advances() {
        let mut kb = KeyboardState::new();
        kb.advance_tick();
        kb.advance_tick();
        assert_eq!(kb.frame_tick(), 2);
    }
}
