//! The ball: motion, collision response and the serve countdown

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::player::Side;
use crate::consts::*;

/// Serve state of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Centered with no velocity, waiting for a serve
    Idle,
    /// Serve direction assigned, counting down before release
    Serving { ticks_left: u32 },
    /// Free-moving
    InPlay,
}

/// Something the ball can collide with and respond to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Obstacle {
    TopEdge,
    BottomEdge,
    Paddle(Side),
}

/// The pong ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Direction vector, scaled by `BALL_SPEED` each tick
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
    can_move: bool,
    /// Obstacles a response was applied for and that the ball still
    /// overlaps; each suppresses repeats until released
    registered: Vec<Obstacle>,
}

impl Ball {
    pub fn new(center: Vec2) -> Self {
        Self {
            pos: center,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            state: BallState::Idle,
            can_move: false,
            registered: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.pos, Vec2::splat(self.radius))
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// Integrate one fixed tick. Returns false when the ball is held.
    pub fn advance(&mut self) -> bool {
        if !self.can_move {
            return false;
        }
        self.pos += self.vel * BALL_SPEED;
        true
    }

    /// Reflect off a horizontal screen edge
    pub fn bounce(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Apply a paddle hit: horizontal reflected, vertical set by hit zone
    pub fn hit_paddle(&mut self, inverted_x: f32, y_delta: f32) {
        self.vel = Vec2::new(inverted_x, y_delta);
    }

    pub fn register_collision(&mut self, obstacle: Obstacle) {
        if !self.is_registered(obstacle) {
            self.registered.push(obstacle);
        }
    }

    pub fn registered_collisions(&self) -> &[Obstacle] {
        &self.registered
    }

    pub fn is_registered(&self, obstacle: Obstacle) -> bool {
        self.registered.contains(&obstacle)
    }

    pub fn release_collision(&mut self, obstacle: Obstacle) {
        self.registered.retain(|o| *o != obstacle);
    }

    /// Keep only the registrations for which `touching` still holds
    pub fn retain_collisions(&mut self, mut touching: impl FnMut(Obstacle) -> bool) {
        self.registered.retain(|o| touching(*o));
    }

    /// Re-center, stop, and wait for a new serve
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
        self.can_move = false;
        self.state = BallState::Idle;
        self.registered.clear();
    }

    /// Set the serve direction
    pub fn change_ball_vector(&mut self, x: f32, y: f32) {
        self.vel = Vec2::new(x, y);
    }

    /// Reset, aim, and start the serve countdown
    pub fn serve(&mut self, center: Vec2, direction: Vec2, countdown_ticks: u32) {
        self.reset(center);
        self.change_ball_vector(direction.x, direction.y);
        self.start_countdown(countdown_ticks);
    }

    /// Hold the ball for `ticks` before releasing it into play
    pub fn start_countdown(&mut self, ticks: u32) {
        self.can_move = false;
        if ticks == 0 {
            self.release();
        } else {
            self.state = BallState::Serving { ticks_left: ticks };
        }
    }

    /// Count the serve down by one tick. Returns true on the tick the ball
    /// is released.
    pub fn tick_countdown(&mut self) -> bool {
        match self.state {
            BallState::Serving { ticks_left } if ticks_left <= 1 => {
                self.release();
                true
            }
            BallState::Serving { ticks_left } => {
                self.state = BallState::Serving {
                    ticks_left: ticks_left - 1,
                };
                false
            }
            BallState::Idle | BallState::InPlay => false,
        }
    }

    /// Number shown by the countdown (3, 2, 1), if serving
    pub fn countdown(&self) -> Option<u32> {
        match self.state {
            BallState::Serving { ticks_left } => Some(ticks_left.div_ceil(TICK_RATE)),
            BallState::Idle | BallState::InPlay => None,
        }
    }

    fn release(&mut self) {
        self.state = BallState::InPlay;
        self.can_move = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_in_play(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(pos);
        ball.change_ball_vector(vel.x, vel.y);
        ball.start_countdown(0);
        ball
    }

    #[test]
    fn test_new_ball_is_idle() {
        let ball = Ball::new(Vec2::new(750.0, 500.0));
        assert_eq!(ball.state, BallState::Idle);
        assert!(!ball.can_move());
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_advance_scales_by_speed() {
        let mut ball = ball_in_play(Vec2::new(100.0, 100.0), Vec2::new(1.0, -0.5));
        assert!(ball.advance());
        assert_eq!(ball.pos, Vec2::new(100.0 + BALL_SPEED, 100.0 - 0.5 * BALL_SPEED));
    }

    #[test]
    fn test_advance_held_ball_does_not_move() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0));
        ball.change_ball_vector(1.0, 0.0);
        assert!(!ball.advance());
        assert_eq!(ball.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_bounce_inverts_vertical_only() {
        let mut ball = ball_in_play(Vec2::ZERO, Vec2::new(3.0, -4.0));
        ball.bounce();
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_reset_centers_and_zeroes() {
        let center = Vec2::new(750.0, 500.0);
        let mut ball = ball_in_play(Vec2::new(3.0, 900.0), Vec2::new(-1.0, 0.5));
        ball.register_collision(Obstacle::BottomEdge);

        ball.reset(center);
        assert_eq!(ball.pos, center);
        assert_eq!(ball.vel, Vec2::ZERO);
        assert!(!ball.can_move());
        assert_eq!(ball.state, BallState::Idle);
        assert!(ball.registered_collisions().is_empty());
    }

    #[test]
    fn test_countdown_releases_after_three_counts() {
        let mut ball = Ball::new(Vec2::ZERO);
        ball.change_ball_vector(1.0, 0.0);
        ball.start_countdown(COUNTDOWN_TICKS);
        assert_eq!(ball.countdown(), Some(3));

        for _ in 0..TICK_RATE {
            assert!(!ball.tick_countdown());
        }
        assert_eq!(ball.countdown(), Some(2));

        for _ in 0..TICK_RATE {
            assert!(!ball.tick_countdown());
        }
        assert_eq!(ball.countdown(), Some(1));

        for _ in 0..TICK_RATE - 1 {
            assert!(!ball.tick_countdown());
        }
        assert!(!ball.can_move());
        assert!(ball.tick_countdown(), "Last tick should release the ball");
        assert!(ball.can_move());
        assert_eq!(ball.state, BallState::InPlay);
        assert_eq!(ball.countdown(), None);
    }

    #[test]
    fn test_registration() {
        let mut ball = Ball::new(Vec2::ZERO);
        ball.register_collision(Obstacle::Paddle(Side::Left));
        ball.register_collision(Obstacle::TopEdge);
        ball.register_collision(Obstacle::TopEdge);
        assert!(ball.is_registered(Obstacle::Paddle(Side::Left)));
        assert!(ball.is_registered(Obstacle::TopEdge));
        assert!(!ball.is_registered(Obstacle::Paddle(Side::Right)));
        assert_eq!(ball.registered_collisions().len(), 2);

        // Each registration is released on its own
        ball.release_collision(Obstacle::Paddle(Side::Left));
        assert!(!ball.is_registered(Obstacle::Paddle(Side::Left)));
        assert!(ball.is_registered(Obstacle::TopEdge));

        ball.retain_collisions(|o| o != Obstacle::TopEdge);
        assert!(ball.registered_collisions().is_empty());
    }
}
