//! Player paddle
//!
//! Movement is gated, not clamped: the collision pass clears `can_move_up`
//! or `can_move_down` while the paddle touches a screen edge, and that gate
//! is the only thing keeping the paddle on the field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels moved per tick
    pub step: f32,
    can_move_up: bool,
    can_move_down: bool,
}

impl Paddle {
    pub fn new(pos: Vec2) -> Self {
        Self::with_size(pos, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    pub fn with_size(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            width,
            height,
            step: PADDLE_STEP,
            can_move_up: true,
            can_move_down: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(self.width, self.height))
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    pub fn can_move_up(&self) -> bool {
        self.can_move_up
    }

    pub fn can_move_down(&self) -> bool {
        self.can_move_down
    }

    pub fn set_can_move_up(&mut self, can_move: bool) {
        self.can_move_up = can_move;
    }

    pub fn set_can_move_down(&mut self, can_move: bool) {
        self.can_move_down = can_move;
    }

    /// Move one step toward the top of the screen. Returns false if gated.
    pub fn move_up(&mut self) -> bool {
        if !self.can_move_up {
            return false;
        }
        self.pos.y -= self.step;
        true
    }

    /// Move one step toward the bottom of the screen. Returns false if gated.
    pub fn move_down(&mut self) -> bool {
        if !self.can_move_down {
            return false;
        }
        self.pos.y += self.step;
        true
    }

    /// Update the movement gates from the screen edges
    ///
    /// Touching the top edge blocks upward motion, touching the bottom edge
    /// blocks downward motion, otherwise both directions are open.
    pub fn update_gates(&mut self, top_edge: &Aabb, bottom_edge: &Aabb) {
        let bounds = self.bounds();
        let (up, down) = if bounds.intersects(top_edge) {
            (false, true)
        } else if bounds.intersects(bottom_edge) {
            (true, false)
        } else {
            (true, true)
        };
        self.set_can_move_up(up);
        self.set_can_move_down(down);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Field;
    use proptest::prelude::*;

    #[test]
    fn test_move_respects_gates() {
        let mut paddle = Paddle::new(Vec2::new(100.0, 500.0));
        assert!(paddle.move_up());
        assert_eq!(paddle.pos.y, 500.0 - PADDLE_STEP);

        paddle.set_can_move_up(false);
        assert!(!paddle.move_up());
        assert_eq!(paddle.pos.y, 500.0 - PADDLE_STEP);

        assert!(paddle.move_down());
        assert_eq!(paddle.pos.y, 500.0);

        paddle.set_can_move_down(false);
        assert!(!paddle.move_down());
        assert_eq!(paddle.pos.y, 500.0);
    }

    #[test]
    fn test_gates_at_edges() {
        let field = Field::default();

        let mut paddle = Paddle::new(Vec2::new(100.0, 0.0));
        paddle.update_gates(&field.top_edge, &field.bottom_edge);
        assert!(!paddle.can_move_up());
        assert!(paddle.can_move_down());

        paddle.pos.y = field.height - paddle.height;
        paddle.update_gates(&field.top_edge, &field.bottom_edge);
        assert!(paddle.can_move_up());
        assert!(!paddle.can_move_down());

        paddle.pos.y = 400.0;
        paddle.update_gates(&field.top_edge, &field.bottom_edge);
        assert!(paddle.can_move_up());
        assert!(paddle.can_move_down());
    }

    #[test]
    fn test_gated_paddle_never_leaves_field() {
        let field = Field::default();
        let mut paddle = Paddle::new(field.paddle_start(crate::sim::Side::Left));

        for _ in 0..1000 {
            paddle.update_gates(&field.top_edge, &field.bottom_edge);
            paddle.move_up();
        }
        assert!(paddle.top() >= -paddle.step);

        for _ in 0..1000 {
            paddle.update_gates(&field.top_edge, &field.bottom_edge);
            paddle.move_down();
        }
        assert!(paddle.bottom() <= field.height + paddle.step);
    }

    proptest! {
        #[test]
        fn prop_gates_open_unless_touching_edge(y in -50.0f32..1050.0) {
            let field = Field::default();
            let mut paddle = Paddle::new(Vec2::new(100.0, y));
            paddle.update_gates(&field.top_edge, &field.bottom_edge);

            let bounds = paddle.bounds();
            let touching = bounds.intersects(&field.top_edge)
                || bounds.intersects(&field.bottom_edge);
            if touching {
                // Exactly one direction blocked
                prop_assert!(paddle.can_move_up() != paddle.can_move_down());
            } else {
                prop_assert!(paddle.can_move_up() && paddle.can_move_down());
            }
        }
    }
}
