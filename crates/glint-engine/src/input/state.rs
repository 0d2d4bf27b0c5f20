use std::collections::HashSet;

use super::types::{Key, KeyState};

/// Current keyboard state for the window.
///
/// Holds "is down" information only; the runtime applies key transitions as
/// they arrive from the platform and the per-frame input check queries the
/// resulting state.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a key transition to the current state.
    pub fn apply_key(&mut self, key: Key, state: KeyState) {
        match state {
            KeyState::Pressed => {
                self.keys_down.insert(key);
            }
            KeyState::Released => {
                self.keys_down.remove(&key);
            }
        }
    }

    /// Clears all held keys.
    ///
    /// Called on focus loss so keys released while unfocused do not stick.
    pub fn clear(&mut self) {
        self.keys_down.clear();
    }

    /// Whether `key` is currently held.
    pub fn is_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_observable_immediately() {
        let mut input = InputState::default();
        input.apply_key(Key::Escape, KeyState::Pressed);
        assert!(input.is_down(Key::Escape));
    }

    #[test]
    fn release_clears_key() {
        let mut input = InputState::default();
        input.apply_key(Key::Escape, KeyState::Pressed);
        input.apply_key(Key::Escape, KeyState::Released);
        assert!(!input.is_down(Key::Escape));
    }

    #[test]
    fn repeat_press_is_idempotent() {
        let mut input = InputState::default();
        input.apply_key(Key::W, KeyState::Pressed);
        input.apply_key(Key::W, KeyState::Pressed);
        assert!(input.is_down(Key::W));
        input.apply_key(Key::W, KeyState::Released);
        assert!(!input.is_down(Key::W));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut input = InputState::default();
        input.apply_key(Key::Escape, KeyState::Pressed);
        input.apply_key(Key::Space, KeyState::Pressed);
        input.clear();
        assert!(!input.is_down(Key::Escape));
        assert!(!input.is_down(Key::Space));
    }
}
