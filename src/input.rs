//! Keyboard bindings and held-direction state
//!
//! The host forwards raw press/release events whenever they arrive; they are
//! only turned into paddle movement when the next tick samples the held state.

use serde::{Deserialize, Serialize};

use crate::sim::Controls;
use crate::sim::tick::TickInput;

/// A key, identified by the character it produces (case-insensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding(pub char);

impl KeyBinding {
    pub fn new(key: char) -> Self {
        Self(key.to_ascii_uppercase())
    }

    pub fn matches(&self, key: char) -> bool {
        self.0.eq_ignore_ascii_case(&key)
    }
}

impl std::fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_ascii_uppercase())
    }
}

/// Held state for both players, owned by the game loop
#[derive(Debug, Clone)]
pub struct InputState {
    bindings: [Controls; 2],
    held: TickInput,
}

impl InputState {
    pub fn new(player_one: Controls, player_two: Controls) -> Self {
        Self {
            bindings: [player_one, player_two],
            held: TickInput::default(),
        }
    }

    /// Record a key press. Returns true if the key is bound.
    ///
    /// A key already held is left as is; each player's up binding is checked
    /// before its down binding.
    pub fn key_pressed(&mut self, key: char) -> bool {
        self.update(key, true)
    }

    /// Record a key release. Returns true if the key is bound.
    pub fn key_released(&mut self, key: char) -> bool {
        self.update(key, false)
    }

    fn update(&mut self, key: char, pressed: bool) -> bool {
        let mut bound = false;
        for (controls, intent) in self.bindings.iter().zip(self.held.intents.iter_mut()) {
            if controls.up.matches(key) {
                intent.up = pressed;
                bound = true;
            } else if controls.down.matches(key) {
                intent.down = pressed;
                bound = true;
            }
        }
        bound
    }

    /// Held state handed to the tick, which clears intents it could not honour
    pub fn held_mut(&mut self) -> &mut TickInput {
        &mut self.held
    }

    /// Release every held direction
    pub fn clear(&mut self) {
        self.held = TickInput::default();
    }
}
