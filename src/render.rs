//! Render and score-display collaborators
//!
//! The simulation never draws. Each tick the game loop hands the current
//! match state to a `Renderer`, clearing first, and forwards goal events to a
//! `ScoreDisplay`. Two plain implementations are provided: a text renderer
//! used by the headless binary and a label-based scoreboard.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Aabb, MatchState, Side};

/// Something that can paint the playing field
pub trait Renderer {
    /// Blank the whole field
    fn clear(&mut self);
    fn draw_paddle(&mut self, side: Side, bounds: Aabb);
    fn draw_ball(&mut self, center: Vec2, radius: f32);
    /// Serve countdown number (3, 2, 1)
    fn draw_countdown(&mut self, count: u32);
}

/// Sink for score changes; the authoritative score lives in `Player`
pub trait ScoreDisplay {
    fn show_score(&mut self, side: Side, score: u32);

    /// Show both sides at zero
    fn reset(&mut self) {
        self.show_score(Side::Left, 0);
        self.show_score(Side::Right, 0);
    }
}

/// Clear and repaint the current state
pub fn render_match<R: Renderer + ?Sized>(renderer: &mut R, state: &MatchState) {
    renderer.clear();
    for player in &state.players {
        renderer.draw_paddle(player.side, player.paddle.bounds());
    }
    if let Some(ball) = &state.ball {
        renderer.draw_ball(ball.pos, ball.radius);
        if let Some(count) = ball.countdown() {
            renderer.draw_countdown(count);
        }
    }
}

/// Renderer that does nothing (for headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn clear(&mut self) {}
    fn draw_paddle(&mut self, _side: Side, _bounds: Aabb) {}
    fn draw_ball(&mut self, _center: Vec2, _radius: f32) {}
    fn draw_countdown(&mut self, _count: u32) {}
}

/// Character-grid renderer, downsampling the field to `cols` x `rows`
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
    countdown: Option<u32>,
}

impl TextRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cells: vec![' '; cols * rows],
            countdown: None,
        }
    }

    fn cell_of(&self, point: Vec2) -> Option<(usize, usize)> {
        let col = (point.x / FIELD_WIDTH * self.cols as f32).floor();
        let row = (point.y / FIELD_HEIGHT * self.rows as f32).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    fn fill(&mut self, bounds: Aabb, ch: char) {
        let (Some(min), Some(max)) = (
            self.cell_of(bounds.min.max(Vec2::ZERO)),
            self.cell_of(
                bounds
                    .max
                    .min(Vec2::new(FIELD_WIDTH - 0.01, FIELD_HEIGHT - 0.01)),
            ),
        ) else {
            return;
        };
        for row in min.1..=max.1 {
            for col in min.0..=max.0 {
                self.cells[row * self.cols + col] = ch;
            }
        }
    }

    /// Current frame as lines of text, framed top and bottom
    pub fn frame(&self) -> String {
        let border: String = "-".repeat(self.cols + 2);
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 3));
        out.push_str(&border);
        out.push('\n');
        for row in self.cells.chunks(self.cols) {
            out.push('|');
            out.extend(row.iter());
            out.push('|');
            out.push('\n');
        }
        out.push_str(&border);
        if let Some(count) = self.countdown {
            out.push_str(&format!("\n  serving in {count}"));
        }
        out
    }
}

impl Renderer for TextRenderer {
    fn clear(&mut self) {
        self.cells.fill(' ');
        self.countdown = None;
    }

    fn draw_paddle(&mut self, _side: Side, bounds: Aabb) {
        self.fill(bounds, '#');
    }

    fn draw_ball(&mut self, center: Vec2, _radius: f32) {
        if let Some((col, row)) = self.cell_of(center) {
            self.cells[row * self.cols + col] = 'O';
        }
    }

    fn draw_countdown(&mut self, count: u32) {
        self.countdown = Some(count);
    }
}

/// Score labels, one per side, updated on goal events
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    pub left: String,
    pub right: String,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            left: "0".to_string(),
            right: "0".to_string(),
        }
    }
}

impl ScoreDisplay for ScoreBoard {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn show_score(&mut self, side: Side, score: u32) {
        match side {
            Side::Left => self.left = score.to_string(),
            Side::Right => self.right = score.to_string(),
            Side::Unassigned => log::debug!("Score {} for unassigned side not shown", score),
        }
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.left, self.right)
    }
}
