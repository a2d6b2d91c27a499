//! Playing field layout
//!
//! Goal lines and screen edges are computed once from the field size and
//! never change for the rest of the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::player::Side;
use crate::consts::*;

/// Static boundaries of the playing field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    /// Left player's goal line (x = 0)
    pub left_goal: Aabb,
    /// Right player's goal line (x = width)
    pub right_goal: Aabb,
    /// Top screen edge (y = 0)
    pub top_edge: Aabb,
    /// Bottom screen edge (y = height)
    pub bottom_edge: Aabb,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        let half = LINE_THICKNESS / 2.0;
        Self {
            width,
            height,
            left_goal: Aabb::new(Vec2::new(-half, 0.0), Vec2::new(half, height)),
            right_goal: Aabb::new(Vec2::new(width - half, 0.0), Vec2::new(width + half, height)),
            top_edge: Aabb::new(Vec2::new(0.0, -half), Vec2::new(width, half)),
            bottom_edge: Aabb::new(Vec2::new(0.0, height - half), Vec2::new(width, height + half)),
        }
    }

    /// Geometric center, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Initial top-left corner of a side's paddle
    ///
    /// Paddles sit `PADDLE_INSET` in from their side with their top edge at
    /// half height.
    pub fn paddle_start(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left | Side::Unassigned => PADDLE_INSET,
            Side::Right => self.width - PADDLE_INSET,
        };
        Vec2::new(x, self.height / 2.0)
    }

    /// Goal line defended by a side, if it has one
    pub fn goal_for(&self, side: Side) -> Option<&Aabb> {
        match side {
            Side::Left => Some(&self.left_goal),
            Side::Right => Some(&self.right_goal),
            Side::Unassigned => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_bounds_layout() {
        let field = Field::new(1500.0, 1000.0);
        assert_eq!(field.center(), Vec2::new(750.0, 500.0));

        assert!(field.left_goal.contains(Vec2::new(0.0, 500.0)));
        assert!(field.right_goal.contains(Vec2::new(1500.0, 500.0)));
        assert!(field.top_edge.contains(Vec2::new(750.0, 0.0)));
        assert!(field.bottom_edge.contains(Vec2::new(750.0, 1000.0)));

        // Goals and edges meet only at the corners
        assert!(!field.left_goal.intersects(&field.right_goal));
        assert!(!field.top_edge.intersects(&field.bottom_edge));
        assert!(field.left_goal.intersects(&field.top_edge));
    }

    #[test]
    fn test_paddle_start_positions() {
        let field = Field::default();
        let left = field.paddle_start(Side::Left);
        let right = field.paddle_start(Side::Right);
        assert_eq!(left, Vec2::new(PADDLE_INSET, FIELD_HEIGHT / 2.0));
        assert_eq!(right, Vec2::new(FIELD_WIDTH - PADDLE_INSET, FIELD_HEIGHT / 2.0));
    }

    #[test]
    fn test_goal_for_side() {
        let field = Field::default();
        assert_eq!(field.goal_for(Side::Left), Some(&field.left_goal));
        assert_eq!(field.goal_for(Side::Right), Some(&field.right_goal));
        assert_eq!(field.goal_for(Side::Unassigned), None);
    }
}
