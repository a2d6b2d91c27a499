//! Duel Pong - a classic two-player Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring)
//! - `game_loop`: Fixed-rate driver with start/stop/restart lifecycle
//! - `input`: Key bindings and held-direction state
//! - `render`: Render and score-display collaborators
//! - `settings`: Runtime preferences loaded from JSON

pub mod game_loop;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use game_loop::{GameLoop, LoopStatus, MenuCommand};
pub use input::{InputState, KeyBinding};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 120;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest wall-clock frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playing field dimensions (screen space, +y down)
    pub const FIELD_WIDTH: f32 = 1500.0;
    pub const FIELD_HEIGHT: f32 = 1000.0;
    /// Thickness of the goal lines and screen edges
    pub const LINE_THICKNESS: f32 = 1.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    /// Distance from the side of the field to the paddle's left edge
    pub const PADDLE_INSET: f32 = 100.0;
    /// Pixels moved per tick while a direction is held
    pub const PADDLE_STEP: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-tick scale applied to the ball's velocity vector
    pub const BALL_SPEED: f32 = 4.0;

    /// Vertical deflection for each paddle zone
    pub const ZONE_TOP_DEFLECTION: f32 = -0.5;
    pub const ZONE_MIDDLE_DEFLECTION: f32 = 0.1;
    pub const ZONE_BOTTOM_DEFLECTION: f32 = 0.5;

    /// Serve countdown (counts shown before the ball is released)
    pub const COUNTDOWN_COUNTS: u32 = 3;
    pub const COUNTDOWN_TICKS: u32 = COUNTDOWN_COUNTS * TICK_RATE;
}
