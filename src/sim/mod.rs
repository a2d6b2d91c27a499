//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Fixed collision order (goal, edge, paddle)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod ball;
pub mod collision;
pub mod field;
pub mod paddle;
pub mod player;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use ball::{Ball, BallState, Obstacle};
pub use collision::{
    BallResponse, PaddleZone, check_collisions, check_player_collisions,
    check_wall_ball_collisions, paddle_zone,
};
pub use field::Field;
pub use paddle::Paddle;
pub use player::{Controls, Player, Side};
pub use state::{GameEvent, MatchState};
pub use tick::{MoveIntent, TickInput, tick};
