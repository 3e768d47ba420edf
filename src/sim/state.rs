//! Court state and core simulation types
//!
//! Everything the physics step reads or writes lives here: the two paddles,
//! the ball and the score line.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::config::Config;

/// Which half of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Something notable that happened during a physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit(Side),
    /// A side won a point
    PointScored(Side),
    /// A side reached the winning score
    MatchWon(Side),
}

/// Points per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add a point and return the new tally
    pub fn award(&mut self, side: Side) -> u32 {
        let tally = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *tally += 1;
        *tally
    }
}

/// A player paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Full movement speed (pixels per frame)
    pub speed: f32,
    /// Current vertical velocity
    pub vel_y: f32,
    /// Driven by the AI controller instead of key input
    pub is_ai: bool,
}

impl Paddle {
    /// Paddle at horizontal position `x`, vertically centered
    pub fn new(x: f32, config: &Config, is_ai: bool) -> Self {
        Self {
            pos: Vec2::new(x, config.arena_height / 2.0 - config.paddle_height / 2.0),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
            vel_y: 0.0,
            is_ai,
        }
    }

    /// Left paddle, always human-controlled
    pub fn left(config: &Config) -> Self {
        Self::new(config.paddle_inset, config, false)
    }

    pub fn right(config: &Config, is_ai: bool) -> Self {
        let x = config.arena_width - config.paddle_inset - config.paddle_width;
        Self::new(x, config, is_ai)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move by the current velocity, staying inside the arena
    pub fn integrate(&mut self, arena_height: f32) {
        let max_y = (arena_height - self.size.y).max(0.0);
        self.pos.y = (self.pos.y + self.vel_y).clamp(0.0, max_y);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// A freshly served ball at the center of the court.
    ///
    /// Horizontal direction is a coin flip at the configured serve speed;
    /// vertical speed is uniform within the configured bound.
    pub fn serve<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let size = config.ball_size;
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let vel_y = rng.random_range(-1.0_f32..1.0) * config.serve_speed_y;

        Self {
            pos: Vec2::new(
                config.arena_width / 2.0 - size / 2.0,
                config.arena_height / 2.0 - size / 2.0,
            ),
            size: Vec2::splat(size),
            vel: Vec2::new(config.serve_speed_x * direction, vel_y),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Paddles, ball and score for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl Court {
    /// Fresh court: zero score, centered paddles, new serve
    pub fn new<R: Rng + ?Sized>(config: &Config, right_is_ai: bool, rng: &mut R) -> Self {
        Self {
            left: Paddle::left(config),
            right: Paddle::right(config, right_is_ai),
            ball: Ball::serve(config, rng),
            score: Score::default(),
        }
    }

    /// Replace the ball with a new serve; paddles and score are untouched
    pub fn reset_ball<R: Rng + ?Sized>(&mut self, config: &Config, rng: &mut R) {
        self.ball = Ball::serve(config, rng);
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
