//! Paddle Duel entry point
//!
//! Headless runner: plays a scripted match through the same key-event and
//! frame interface a graphical host would use, then reports the outcome.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use paddle_duel::consts::FRAME_DT;
use paddle_duel::{Config, Difficulty, FrameClock, Game, GameMode, Key, KeyEvent, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Single,
    Multi,
}

#[derive(Parser, Debug)]
#[command(name = "paddle-duel", about = "Play a headless Paddle Duel match")]
struct Args {
    /// JSON config file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for serves, spin and AI noise
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    #[arg(short, long, value_enum, default_value_t = Mode::Single)]
    mode: Mode,

    /// AI difficulty (easy, medium, hard or 1-3)
    #[arg(short, long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Give up after this many frames
    #[arg(long, default_value_t = 60 * 60 * 10)]
    max_frames: u64,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::parse(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

/// Scripted stand-in for a human on one paddle: holds W/S (or the arrows)
/// while the ball is far from the paddle center.
struct ScriptedPlayer {
    up: Key,
    down: Key,
    held: Option<Key>,
}

impl ScriptedPlayer {
    fn new(up: Key, down: Key) -> Self {
        Self {
            up,
            down,
            held: None,
        }
    }

    fn keys_for(&mut self, ball_y: f32, paddle_center: f32) -> Vec<KeyEvent> {
        let wanted = if ball_y < paddle_center - 20.0 {
            Some(self.up)
        } else if ball_y > paddle_center + 20.0 {
            Some(self.down)
        } else {
            None
        };
        if wanted == self.held {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(key) = self.held {
            events.push(KeyEvent::up(key));
        }
        if let Some(key) = wanted {
            events.push(KeyEvent::down(key));
        }
        self.held = wanted;
        events
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Paddle Duel (headless) starting...");

    let mut config = args
        .config
        .as_deref()
        .map(Config::load)
        .unwrap_or_default();
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }

    let mut game = Game::new(config, args.seed);
    if args.mode == Mode::Multi {
        game.handle_key(KeyEvent::down(Key::Down));
    }
    game.handle_key(KeyEvent::down(Key::Enter));

    let mut left = ScriptedPlayer::new(Key::W, Key::S);
    let mut right = ScriptedPlayer::new(Key::Up, Key::Down);
    let mut clock = FrameClock::default();
    let mut snapshot = game.snapshot();

    while snapshot.mode != GameMode::GameOver && snapshot.frame < args.max_frames {
        let ball_y = snapshot.ball.pos.y + snapshot.ball.size.y / 2.0;
        game.handle_keys(left.keys_for(ball_y, snapshot.left_paddle.center_y()));
        if !snapshot.right_paddle.is_ai {
            game.handle_keys(right.keys_for(ball_y, snapshot.right_paddle.center_y()));
        }
        snapshot = game.advance(&mut clock, FRAME_DT);
    }

    report(&snapshot, args.json);
}

fn report(snapshot: &Snapshot, json: bool) {
    match &snapshot.match_result {
        Some(result) => println!(
            "{} won {} - {} after {} frames",
            result.winner, result.scores.left, result.scores.right, snapshot.frame
        ),
        None => println!(
            "No winner after {} frames ({} - {})",
            snapshot.frame, snapshot.scores.left, snapshot.scores.right
        ),
    }

    if json {
        match snapshot.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize snapshot: {}", e),
        }
    }
}
