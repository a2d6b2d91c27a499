//! Duel Pong entry point
//!
//! Headless demo: both paddles are driven by a key-pressing autopilot, the
//! match runs at the fixed tick rate and the final frame is printed as text.
//!
//! Usage: `duel-pong [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use duel_pong::consts::*;
#[cfg(not(target_arch = "wasm32"))]
use duel_pong::render::{ScoreBoard, TextRenderer};
#[cfg(not(target_arch = "wasm32"))]
use duel_pong::{GameLoop, MenuCommand, Settings};

/// Length of the demo match in seconds
#[cfg(not(target_arch = "wasm32"))]
const DEMO_SECONDS: u32 = 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Duel Pong (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(std::path::Path::new(&path)),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(clock_seed);

    let mut game = GameLoop::new(&settings, seed, TextRenderer::new(75, 25), ScoreBoard::new());
    game.start();

    let frames = DEMO_SECONDS * TICK_RATE / 2;
    for frame in 0..frames {
        autopilot(&mut game, &settings);
        game.frame(2.0 * SIM_DT);

        if (frame + 1) % (TICK_RATE / 2 * 10) == 0 {
            log::info!("t={}s score {}", (frame + 1) * 2 / TICK_RATE, game.scores());
            if settings.show_fps {
                log::info!("FPS: {}", game.fps());
            }
        }
    }

    println!("{}", game.renderer().frame());
    println!("Final score {}", game.scores());
    game.handle_menu(MenuCommand::Exit);
}

/// Hold whichever key moves each paddle toward the ball
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(game: &mut GameLoop<TextRenderer, ScoreBoard>, settings: &Settings) {
    let Some(ball_y) = game.state().ball.as_ref().map(|ball| ball.pos.y) else {
        return;
    };
    let controls = [settings.player_one, settings.player_two];
    let centers: Vec<f32> = game
        .state()
        .players
        .iter()
        .map(|player| player.paddle.bounds().center().y)
        .collect();

    for (controls, center) in controls.iter().zip(centers) {
        let (press, release) = if ball_y < center - PADDLE_STEP {
            (controls.up, controls.down)
        } else if ball_y > center + PADDLE_STEP {
            (controls.down, controls.up)
        } else {
            game.key_released(controls.up.0);
            game.key_released(controls.down.0);
            continue;
        };
        game.key_released(release.0);
        game.key_pressed(press.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {}
