//! Fixed-rate game loop and match lifecycle
//!
//! Converts wall-clock frames into fixed ticks, samples held input once per
//! tick, paints through the `Renderer` and forwards goals to the
//! `ScoreDisplay`. Start and stop are idempotent: starting a running loop or
//! stopping a stopped one does nothing.

use crate::consts::*;
use crate::input::InputState;
use crate::render::{Renderer, ScoreDisplay, render_match};
use crate::settings::Settings;
use crate::sim::{GameEvent, MatchState, tick};

/// Whether the loop is advancing the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Stopped,
    Running,
}

/// Menu actions the host can dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Restart,
    Exit,
}

/// Ticks completed per wall-clock second
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsCounter {
    elapsed: f32,
    ticks: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn record(&mut self, dt: f32, ticks: u32) {
        self.elapsed += dt;
        self.ticks += ticks;
        if self.elapsed >= 1.0 {
            self.fps = self.ticks;
            self.ticks = 0;
            self.elapsed -= 1.0;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Game instance holding the match and its collaborators
pub struct GameLoop<R: Renderer, S: ScoreDisplay> {
    state: MatchState,
    input: InputState,
    renderer: R,
    scores: S,
    status: LoopStatus,
    accumulator: f32,
    fps: FpsCounter,
    exit_requested: bool,
}

impl<R: Renderer, S: ScoreDisplay> GameLoop<R, S> {
    pub fn new(settings: &Settings, seed: u64, renderer: R, scores: S) -> Self {
        Self {
            state: MatchState::new(seed, settings.player_one, settings.player_two),
            input: InputState::new(settings.player_one, settings.player_two),
            renderer,
            scores,
            status: LoopStatus::Stopped,
            accumulator: 0.0,
            fps: FpsCounter::default(),
            exit_requested: false,
        }
    }

    pub fn status(&self) -> LoopStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == LoopStatus::Running
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn scores(&self) -> &S {
        &self.scores
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Start from a stopped state: clear the field and serve in a random
    /// direction. Ignored if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            log::debug!("start ignored: already running");
            return;
        }
        self.renderer.clear();
        self.state.reset_ball(None);
        self.accumulator = 0.0;
        self.status = LoopStatus::Running;
        log::info!("Game started (seed {})", self.state.seed);
    }

    /// Stop a running loop, leaving the match state intact. Ignored if
    /// already stopped.
    pub fn stop(&mut self) {
        if !self.is_running() {
            log::debug!("stop ignored: not running");
            return;
        }
        self.status = LoopStatus::Stopped;
        self.accumulator = 0.0;
        log::info!("Game stopped at tick {}", self.state.time_ticks);
    }

    /// Put every entity back at its initial layout and zero the scores
    pub fn reset_game(&mut self) {
        self.state.reset();
        self.input.clear();
        self.scores.reset();
    }

    /// Stop, reset, start
    pub fn restart(&mut self) {
        self.stop();
        self.reset_game();
        self.start();
        log::info!("Game restarted");
    }

    pub fn handle_menu(&mut self, command: MenuCommand) {
        match command {
            MenuCommand::Restart => self.restart(),
            MenuCommand::Exit => {
                self.stop();
                self.exit_requested = true;
                log::info!("Exit requested");
            }
        }
    }

    pub fn key_pressed(&mut self, key: char) -> bool {
        self.input.key_pressed(key)
    }

    pub fn key_released(&mut self, key: char) -> bool {
        self.input.key_released(key)
    }

    /// Run exactly one tick: render, simulate, dispatch events
    ///
    /// Returns the events the tick produced; empty when stopped.
    pub fn step(&mut self) -> Vec<GameEvent> {
        if !self.is_running() {
            return Vec::new();
        }

        render_match(&mut self.renderer, &self.state);
        tick(&mut self.state, self.input.held_mut());

        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::Goal { side, score } = *event {
                self.renderer.clear();
                self.scores.show_score(side, score);
            }
        }
        events
    }

    /// Feed a wall-clock frame delta; runs as many fixed ticks as are owed
    ///
    /// Returns the number of ticks run.
    pub fn frame(&mut self, dt: f32) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        self.fps.record(dt, substeps);
        substeps
    }
}
