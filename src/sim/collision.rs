//! Collision detection and response
//!
//! Resolution order per tick is fixed: goal lines, then screen edges, then
//! paddles. At most one response is applied to the ball per tick; paddle
//! movement gates are refreshed for both players regardless.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::ball::{Ball, Obstacle};
use super::field::Field;
use super::player::{Player, Side};
use super::state::MatchState;
use crate::consts::*;

/// Vertical third of a paddle that the ball's center struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleZone {
    Top,
    Middle,
    Bottom,
}

impl PaddleZone {
    /// New vertical velocity component for a hit in this zone
    pub fn deflection(&self) -> f32 {
        match self {
            PaddleZone::Top => ZONE_TOP_DEFLECTION,
            PaddleZone::Middle => ZONE_MIDDLE_DEFLECTION,
            PaddleZone::Bottom => ZONE_BOTTOM_DEFLECTION,
        }
    }
}

/// Response applied to the ball during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BallResponse {
    /// A goal line was struck; the ball has been reset and is serving
    Goal { side: Side, score: u32 },
    /// Vertical velocity inverted by a screen edge
    EdgeBounce(Obstacle),
    /// Velocity replaced by a paddle hit
    PaddleHit { side: Side, zone: PaddleZone },
}

/// Classify a ball center against a paddle's three zones
///
/// Zones are measured from the paddle top: `[top, top+h/3]`,
/// `(top+h/3, top+2h/3]`, `(top+2h/3, top+h]`. A center outside
/// `[top, top+h]` maps to no zone.
pub fn paddle_zone(paddle_top: f32, paddle_height: f32, center_y: f32) -> Option<PaddleZone> {
    let first = paddle_top + paddle_height / 3.0;
    let second = paddle_top + paddle_height * 2.0 / 3.0;
    let bottom = paddle_top + paddle_height;

    if center_y < paddle_top || center_y > bottom {
        None
    } else if center_y <= first {
        Some(PaddleZone::Top)
    } else if center_y <= second {
        Some(PaddleZone::Middle)
    } else {
        Some(PaddleZone::Bottom)
    }
}

/// Check the ball against both goal lines and both screen edges
///
/// A goal line scores for the player who owns it (player one owns the left
/// line). That player's side picks the serve direction.
pub fn check_wall_ball_collisions(
    ball: Option<&mut Ball>,
    field: &Field,
    players: &mut [Player; 2],
) -> Option<BallResponse> {
    let Some(ball) = ball else {
        log::warn!("Wall collision check skipped: no ball");
        return None;
    };
    let bounds = ball.bounds();

    for (slot, side) in [Side::Left, Side::Right].into_iter().enumerate() {
        if field.goal_for(side).is_some_and(|goal| goal.intersects(&bounds)) {
            return Some(score_goal(ball, field, &mut players[slot]));
        }
    }

    // An edge only turns a ball that is heading into it
    for (edge, edge_bounds, heading_in) in [
        (Obstacle::TopEdge, &field.top_edge, ball.vel.y < 0.0),
        (Obstacle::BottomEdge, &field.bottom_edge, ball.vel.y > 0.0),
    ] {
        if edge_bounds.intersects(&bounds) && heading_in && !ball.is_registered(edge) {
            ball.bounce();
            ball.register_collision(edge);
            return Some(BallResponse::EdgeBounce(edge));
        }
    }

    None
}

fn score_goal(ball: &mut Ball, field: &Field, player: &mut Player) -> BallResponse {
    let score = player.scored_goal();
    log::info!("{} player scored ({})", player.side, score);

    let direction = Vec2::new(player.side.serve_direction(), 0.0);
    ball.serve(field.center(), direction, COUNTDOWN_TICKS);

    BallResponse::Goal {
        side: player.side,
        score,
    }
}

/// Refresh a player's paddle gates, then check the ball against the paddle
///
/// Passing `None` for the ball only refreshes the gates.
pub fn check_player_collisions(
    player: &mut Player,
    ball: Option<&mut Ball>,
    field: &Field,
) -> Option<BallResponse> {
    player.paddle.update_gates(&field.top_edge, &field.bottom_edge);

    let ball = ball?;
    let obstacle = Obstacle::Paddle(player.side);
    if !player.paddle.bounds().intersects(&ball.bounds()) || ball.is_registered(obstacle) {
        return None;
    }

    let Some(zone) = paddle_zone(player.paddle.top(), player.paddle.height, ball.pos.y) else {
        log::debug!("{} paddle overlapped the ball outside its zones", player.side);
        return None;
    };

    let inverted_x = -ball.vel.x;
    ball.hit_paddle(inverted_x, zone.deflection());
    ball.register_collision(obstacle);
    // The hit replaces the vertical velocity, so the edges respond afresh
    ball.release_collision(Obstacle::TopEdge);
    ball.release_collision(Obstacle::BottomEdge);
    log::debug!("{} player's paddle hit the ball ({:?})", player.side, zone);

    Some(BallResponse::PaddleHit {
        side: player.side,
        zone,
    })
}

/// Bounds of a registered obstacle, if it still exists
fn obstacle_bounds(obstacle: Obstacle, field: &Field, players: &[Player; 2]) -> Option<Aabb> {
    match obstacle {
        Obstacle::TopEdge => Some(field.top_edge),
        Obstacle::BottomEdge => Some(field.bottom_edge),
        Obstacle::Paddle(side) => players
            .iter()
            .find(|p| p.side == side)
            .map(|p| p.paddle.bounds()),
    }
}

/// Run every collision check for one tick
pub fn check_collisions(state: &mut MatchState) -> Option<BallResponse> {
    let MatchState {
        field,
        ball,
        players,
        ..
    } = state;

    // Release each registration once the ball has separated from its obstacle
    if let Some(ball) = ball.as_mut() {
        let bounds = ball.bounds();
        ball.retain_collisions(|obstacle| {
            obstacle_bounds(obstacle, field, players).is_some_and(|b| b.intersects(&bounds))
        });
    }

    let mut response = check_wall_ball_collisions(ball.as_mut(), field, players);

    for player in players.iter_mut() {
        let target = if response.is_none() { ball.as_mut() } else { None };
        let hit = check_player_collisions(player, target, field);
        if response.is_none() {
            response = hit;
        }
    }

    response
}
