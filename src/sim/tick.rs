//! Fixed timestep simulation tick
//!
//! Core game loop step that advances the match deterministically.

use super::collision::check_collisions;
use super::state::{GameEvent, MatchState};

/// Held directions for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
}

/// Input commands for a single tick, indexed like `MatchState::players`
///
/// Intents the paddle could not honour are cleared by the tick, so a key
/// held against an edge has to be pressed again once the paddle is free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub intents: [MoveIntent; 2],
}

/// Advance the match by one fixed timestep
///
/// Order: serve countdown, ball integration, collisions (which refresh the
/// paddle gates), then paddle movement.
pub fn tick(state: &mut MatchState, input: &mut TickInput) {
    state.time_ticks += 1;

    if let Some(ball) = state.ball.as_mut() {
        if ball.tick_countdown() {
            log::info!("Serve released at tick {}", state.time_ticks);
            state.events.push(GameEvent::ServeReleased);
        }
        ball.advance();
    }

    if let Some(response) = check_collisions(state) {
        state.events.push(response.into());
    }

    for (player, intent) in state.players.iter_mut().zip(input.intents.iter_mut()) {
        if !(intent.up && player.paddle.move_up()) {
            intent.up = false;
        }
        if !(intent.down && player.paddle.move_down()) {
            intent.down = false;
        }
    }
}
