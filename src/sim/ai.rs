//! Computer opponent
//!
//! Deliberately imperfect: the paddle aims at a noisy, partially
//! extrapolated guess of where the ball will arrive, and ignores errors
//! smaller than a fraction of its own height.

use rand::Rng;

use super::state::{Ball, Paddle};
use crate::config::Difficulty;

/// Where the AI thinks the ball will be when it reaches the paddle.
///
/// Only a ball moving toward the paddle (`vel.x > 0`) is extrapolated and
/// jittered; otherwise the ball's current y is returned unchanged.
pub fn target_y<R: Rng + ?Sized>(
    ball: &Ball,
    paddle: &Paddle,
    difficulty: Difficulty,
    rng: &mut R,
) -> f32 {
    let profile = difficulty.ai_profile();
    let mut predicted = ball.pos.y;

    if ball.vel.x > 0.0 {
        let time_to_reach = (paddle.pos.x - ball.pos.x) / ball.vel.x;
        predicted += ball.vel.y * time_to_reach * profile.prediction_factor;
        predicted += rng.random_range(-1.0_f32..1.0) * profile.error_margin;
    }

    predicted
}

/// Set the paddle's velocity for this frame
pub fn update_ai<R: Rng + ?Sized>(
    paddle: &mut Paddle,
    ball: &Ball,
    difficulty: Difficulty,
    rng: &mut R,
) {
    let target = target_y(ball, paddle, difficulty, rng);
    let center = paddle.center_y();
    let threshold = paddle.size.y * difficulty.ai_profile().reaction_threshold;

    paddle.vel_y = if (center - target).abs() > threshold {
        if target < center {
            -paddle.speed
        } else {
            paddle.speed
        }
    } else {
        0.0
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (Ball, Paddle, Pcg32) {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(4242);
        let ball = Ball::serve(&config, &mut rng);
        let paddle = Paddle::right(&config, true);
        (ball, paddle, rng)
    }

    #[test]
    fn test_ball_moving_away_is_tracked_exactly() {
        let (mut ball, paddle, mut rng) = setup();
        ball.pos = Vec2::new(300.0, 123.5);
        ball.vel = Vec2::new(-5.0, 2.5);

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..20 {
                assert_eq!(target_y(&ball, &paddle, difficulty, &mut rng), 123.5);
            }
        }
    }

    #[test]
    fn test_easy_does_not_extrapolate() {
        let (mut ball, paddle, mut rng) = setup();
        ball.pos = Vec2::new(300.0, 200.0);
        ball.vel = Vec2::new(5.0, 4.0);

        // Prediction factor 0: only noise within the error margin
        for _ in 0..100 {
            let target = target_y(&ball, &paddle, Difficulty::Easy, &mut rng);
            assert!((target - 200.0).abs() <= 30.0);
        }
    }

    #[test]
    fn test_hard_extrapolates_to_paddle() {
        let (mut ball, paddle, mut rng) = setup();
        ball.pos = Vec2::new(paddle.pos.x - 100.0, 100.0);
        ball.vel = Vec2::new(5.0, 2.0);

        // 20 frames to reach, 2px/frame vertical -> 140 +/- 5
        for _ in 0..100 {
            let target = target_y(&ball, &paddle, Difficulty::Hard, &mut rng);
            assert!((target - 140.0).abs() <= 5.0 + 1e-3);
        }
    }

    #[test]
    fn test_medium_extrapolates_halfway() {
        let (mut ball, paddle, mut rng) = setup();
        ball.pos = Vec2::new(paddle.pos.x - 100.0, 100.0);
        ball.vel = Vec2::new(5.0, 2.0);

        for _ in 0..100 {
            let target = target_y(&ball, &paddle, Difficulty::Medium, &mut rng);
            assert!((target - 120.0).abs() <= 15.0 + 1e-3);
        }
    }

    #[test]
    fn test_moves_toward_distant_target() {
        let (mut ball, mut paddle, mut rng) = setup();
        ball.vel = Vec2::new(-5.0, 0.0);

        ball.pos.y = 10.0;
        update_ai(&mut paddle, &ball, Difficulty::Easy, &mut rng);
        assert_eq!(paddle.vel_y, -paddle.speed);

        ball.pos.y = 490.0;
        update_ai(&mut paddle, &ball, Difficulty::Easy, &mut rng);
        assert_eq!(paddle.vel_y, paddle.speed);
    }

    #[test]
    fn test_holds_still_within_reaction_threshold() {
        let (mut ball, mut paddle, mut rng) = setup();
        ball.vel = Vec2::new(-5.0, 0.0);
        paddle.vel_y = paddle.speed;

        // Easy ignores errors up to 60px; 50px off should hold still
        ball.pos.y = paddle.center_y() + 50.0;
        update_ai(&mut paddle, &ball, Difficulty::Easy, &mut rng);
        assert_eq!(paddle.vel_y, 0.0);

        // Hard reacts beyond 20px
        update_ai(&mut paddle, &ball, Difficulty::Hard, &mut rng);
        assert_eq!(paddle.vel_y, paddle.speed);
    }
}
