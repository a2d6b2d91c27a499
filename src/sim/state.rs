//! Match state and core simulation types
//!
//! Everything the simulation mutates lives here and is owned by a single
//! thread; the game loop passes it explicitly into each tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, Obstacle};
use super::collision::{BallResponse, PaddleZone};
use super::field::Field;
use super::player::{Controls, Player, Side};
use crate::consts::*;

/// Something that happened during a tick, drained by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A goal line was struck; `score` is the side's new total
    Goal { side: Side, score: u32 },
    /// The ball bounced off a screen edge
    Bounce(Obstacle),
    /// A paddle returned the ball
    PaddleHit { side: Side, zone: PaddleZone },
    /// The serve countdown ended and the ball is moving
    ServeReleased,
}

impl From<BallResponse> for GameEvent {
    fn from(response: BallResponse) -> Self {
        match response {
            BallResponse::Goal { side, score } => GameEvent::Goal { side, score },
            BallResponse::EdgeBounce(edge) => GameEvent::Bounce(edge),
            BallResponse::PaddleHit { side, zone } => GameEvent::PaddleHit { side, zone },
        }
    }
}

/// RNG state wrapper for serialization
///
/// Each draw reseeds from `seed + draws`, so a saved state replays the same
/// serve sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.draws));
        self.draws += 1;
        rng
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    /// Static layout
    pub field: Field,
    /// The ball; `None` only if it was removed by the host
    pub ball: Option<Ball>,
    /// Player one (defends the left goal line) and player two (right)
    pub players: [Player; 2],
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Lay out a new match with the given seed and per-player controls
    pub fn new(seed: u64, player_one: Controls, player_two: Controls) -> Self {
        let field = Field::default();
        let players = [
            Player::new(Side::Left, player_one, &field),
            Player::new(Side::Right, player_two, &field),
        ];
        Self {
            seed,
            rng_state: RngState::new(seed),
            ball: Some(Ball::new(field.center())),
            field,
            players,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn player(&self, side: Side) -> Option<&Player> {
        self.players.iter().find(|p| p.side == side)
    }

    /// Current (player one, player two) scores
    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].score(), self.players[1].score())
    }

    /// Re-center the ball and serve it
    ///
    /// After a goal the serve heads away from the scoring side. With no
    /// scorer (match start) the direction is a coin flip.
    pub fn reset_ball(&mut self, scoring: Option<Side>) {
        let center = self.field.center();
        let direction = match scoring {
            Some(side) => Vec2::new(side.serve_direction(), 0.0),
            None => {
                let mut rng = self.rng_state.next_rng();
                let x = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
                Vec2::new(x, 0.0)
            }
        };
        self.ball
            .get_or_insert_with(|| Ball::new(center))
            .serve(center, direction, COUNTDOWN_TICKS);
    }

    /// Return every entity to the initial layout and zero the scores
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.reset(&self.field);
        }
        self.ball = Some(Ball::new(self.field.center()));
        self.time_ticks = 0;
        self.events.clear();
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Default-layout match with the stock W/S and P/L bindings
#[cfg(test)]
pub(crate) fn test_state() -> MatchState {
    use crate::input::KeyBinding;
    MatchState::new(
        12345,
        Controls::new(KeyBinding('W'), KeyBinding('S')),
        Controls::new(KeyBinding('P'), KeyBinding('L')),
    )
}
