//! Session configuration and AI difficulty tiers
//!
//! Fixed at startup. The only value that changes during a session is the
//! difficulty, and that copy lives in the game controller, not here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// AI difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Tuning constants that drive the AI paddle for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    /// Fraction of paddle height below which the AI holds still
    pub reaction_threshold: f32,
    /// How far the AI extrapolates the ball's vertical travel (0 = not at all)
    pub prediction_factor: f32,
    /// Uniform noise added to the prediction, in pixels
    pub error_margin: f32,
}

impl Difficulty {
    pub const MIN_TIER: u8 = 1;
    pub const MAX_TIER: u8 = 3;

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Parse a label or tier number ("hard", "3")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "medium" | "med" | "2" => Some(Difficulty::Medium),
            "hard" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Numeric tier in `1..=3`
    pub fn tier(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn from_tier(tier: u8) -> Option<Self> {
        match tier {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// One tier easier, saturating at Easy
    pub fn easier(self) -> Self {
        match self {
            Difficulty::Easy | Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }

    /// One tier harder, saturating at Hard
    pub fn harder(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }

    pub fn ai_profile(&self) -> AiProfile {
        match self {
            Difficulty::Easy => AiProfile {
                reaction_threshold: 0.6,
                prediction_factor: 0.0,
                error_margin: 30.0,
            },
            Difficulty::Medium => AiProfile {
                reaction_threshold: 0.4,
                prediction_factor: 0.5,
                error_margin: 15.0,
            },
            Difficulty::Hard => AiProfile {
                reaction_threshold: 0.2,
                prediction_factor: 1.0,
                error_margin: 5.0,
            },
        }
    }
}

/// Game tunables (all distances in pixels, speeds in pixels per frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Gap between each paddle and its side wall
    pub paddle_inset: f32,

    pub ball_size: f32,
    /// Horizontal serve speed (direction is random)
    pub serve_speed_x: f32,
    /// Vertical serve speed bound; actual speed is uniform in `[-v, v]`
    pub serve_speed_y: f32,
    /// Horizontal speed multiplier applied on every paddle hit
    pub hit_speedup: f32,
    /// Bound of the random vertical kick applied on every paddle hit
    pub hit_spin: f32,

    /// First side to reach this many points wins
    pub winning_score: u32,
    /// Difficulty the menu starts on
    pub difficulty: Difficulty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,

            ball_size: BALL_SIZE,
            serve_speed_x: SERVE_SPEED_X,
            serve_speed_y: SERVE_SPEED_Y,
            hit_speedup: PADDLE_HIT_SPEEDUP,
            hit_spin: PADDLE_HIT_SPIN,

            winning_score: WINNING_SCORE,
            difficulty: Difficulty::Easy,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON document; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {} (using defaults)", path.display(), e);
                Self::default()
            }
        }
    }

    /// Highest y a paddle's top edge may reach
    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.arena_height - self.paddle_height
    }
}
