//! Paddle Duel - classic two-paddle arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, physics, AI)
//! - `game`: Mode state machine and the controller that owns all state
//! - `input`: Key events, intents and per-mode handler dispatch
//! - `snapshot`: Read-only frame view for renderers
//! - `config`: Session tunables and AI difficulty tiers
//! - `frame`: Fixed-step frame clock

pub mod config;
pub mod frame;
pub mod game;
pub mod input;
pub mod sim;
pub mod snapshot;

pub use config::{Config, Difficulty};
pub use frame::FrameClock;
pub use game::{Game, GameMode, MatchResult, MenuState, PlayMode};
pub use input::{Key, KeyEvent, KeyKind};
pub use snapshot::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Fixed frame length (60 Hz, the rate velocities are tuned for)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum frames run per host callback to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host delta accepted in one callback (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_INSET: f32 = 20.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 12.0;
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEED_Y: f32 = 3.0;
    /// Speed boost when ball hits paddle (multiplicative, uncapped)
    pub const PADDLE_HIT_SPEEDUP: f32 = 1.05;
    /// Random vertical kick on paddle hit, uniform in [-k, k]
    pub const PADDLE_HIT_SPIN: f32 = 2.0;

    pub const WINNING_SCORE: u32 = 7;
}
