//! Players, sides and control bindings

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::paddle::Paddle;
use crate::input::KeyBinding;

/// Which side of the field a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    #[default]
    Unassigned,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
            Side::Unassigned => "Unassigned",
        }
    }

    /// Horizontal serve direction for a ball reset after this side scored
    pub fn serve_direction(&self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
            Side::Unassigned => 0.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Move-up / move-down bindings for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: KeyBinding,
    pub down: KeyBinding,
}

impl Controls {
    pub fn new(up: KeyBinding, down: KeyBinding) -> Self {
        Self { up, down }
    }
}

/// One player: a paddle, a side, a score and two controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    pub paddle: Paddle,
    pub controls: Controls,
    score: u32,
}

impl Player {
    /// Create a player with its paddle at the side's start position
    pub fn new(side: Side, controls: Controls, field: &Field) -> Self {
        Self {
            side,
            paddle: Paddle::new(field.paddle_start(side)),
            controls,
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Register a goal for this player, returning the new score
    pub fn scored_goal(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Zero the score and put the paddle back at its start position
    pub fn reset(&mut self, field: &Field) {
        self.score = 0;
        self.paddle = Paddle::new(field.paddle_start(self.side));
    }
}
