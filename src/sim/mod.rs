//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must be pure and deterministic:
//! - One fixed frame per step, velocities in pixels per frame
//! - Randomness only from the caller-supplied generator
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::{target_y, update_ai};
pub use collision::{Aabb, check_collision};
pub use state::{Ball, Court, GameEvent, Paddle, Score, Side};
pub use tick::tick;
