//! Fixed-frame physics step
//!
//! Advances the court by exactly one frame. Velocities are in pixels per
//! frame, so there is no `dt`.

use rand::Rng;

use super::collision::check_collision;
use super::state::{Court, GameEvent, Side};
use crate::config::Config;

/// Advance the court by one frame.
///
/// Appends what happened to `events` and returns the winning side if this
/// frame ended the match. When a match is won the ball is left where it
/// crossed the goal line instead of being re-served.
pub fn tick<R: Rng + ?Sized>(
    court: &mut Court,
    config: &Config,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Option<Side> {
    // Paddles
    court.left.integrate(config.arena_height);
    court.right.integrate(config.arena_height);

    // Ball
    let ball = &mut court.ball;
    ball.pos += ball.vel;

    // Top/bottom walls reflect exactly; position is not corrected
    if ball.top() <= 0.0 || ball.bottom() >= config.arena_height {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Paddles: reverse, speed up (no cap) and add a random vertical kick
    let ball_box = ball.bounds();
    let hit = if check_collision(&ball_box, &court.left.bounds()) {
        Some(Side::Left)
    } else if check_collision(&ball_box, &court.right.bounds()) {
        Some(Side::Right)
    } else {
        None
    };
    if let Some(side) = hit {
        ball.vel.x = -ball.vel.x * config.hit_speedup;
        ball.vel.y += rng.random_range(-1.0_f32..1.0) * config.hit_spin;
        events.push(GameEvent::PaddleHit(side));
    }

    // Goal lines
    let scorer = if ball.pos.x < 0.0 {
        Side::Right
    } else if ball.pos.x > config.arena_width {
        Side::Left
    } else {
        return None;
    };

    let tally = court.score.award(scorer);
    events.push(GameEvent::PointScored(scorer));
    log::debug!(
        "{:?} scores past {:?} ({} - {})",
        scorer,
        scorer.opponent(),
        court.score.left,
        court.score.right
    );

    if tally >= config.winning_score {
        events.push(GameEvent::MatchWon(scorer));
        return Some(scorer);
    }

    court.reset_ball(config, rng);
    None
}
