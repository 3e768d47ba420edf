//! Read-only view of the game handed to renderers
//!
//! Everything a renderer needs to draw one frame, detached from the
//! controller so it can't write back.

use rand::Rng;
use serde::Serialize;

use crate::config::Difficulty;
use crate::game::{Game, GameMode, MatchResult, PlayMode};
use crate::sim::{Ball, GameEvent, Paddle, Score};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Frame counter at capture time
    pub frame: u64,
    pub mode: GameMode,
    pub scores: Score,
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub menu_selection: usize,
    pub menu_options: &'static [&'static str],
    pub difficulty: Difficulty,
    /// Set only while the mode is `GameOver`
    pub match_result: Option<MatchResult>,
    /// What happened since the previous frame
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture<R: Rng>(game: &Game<R>, events: Vec<GameEvent>) -> Self {
        let court = game.court();
        let menu = game.menu();
        Self {
            frame: game.frame_count(),
            mode: game.mode(),
            scores: court.score,
            ball: court.ball.clone(),
            left_paddle: court.left.clone(),
            right_paddle: court.right.clone(),
            menu_selection: menu.selected,
            menu_options: menu.options(),
            difficulty: game.difficulty(),
            match_result: game.result().cloned(),
            events,
        }
    }

    /// Label shown next to the single player option
    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.as_str()
    }

    /// Mode the pause overlay is covering, if paused
    pub fn paused_from(&self) -> Option<PlayMode> {
        match self.mode {
            GameMode::Paused { previous } => Some(previous),
            _ => None,
        }
    }

    /// Whether the court (paddles, ball, scores) should be drawn
    pub fn shows_court(&self) -> bool {
        self.mode != GameMode::Menu
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
