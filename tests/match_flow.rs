//! Full matches driven only through the public key/frame interface

use paddle_duel::sim::{GameEvent, Side};
use paddle_duel::{Config, Difficulty, FrameClock, Game, GameMode, Key, KeyEvent, PlayMode};

const FRAME_LIMIT: u64 = 200_000;

fn short_match_config() -> Config {
    Config::from_json(r#"{ "winning_score": 2 }"#).expect("valid config")
}

fn press(game: &mut Game, key: Key) {
    game.handle_key(KeyEvent::down(key));
}

#[test]
fn single_player_match_runs_to_game_over() {
    let mut game = Game::new(short_match_config(), 2024);
    press(&mut game, Key::Right);
    press(&mut game, Key::Enter);
    assert_eq!(game.mode(), GameMode::SinglePlayer);
    assert_eq!(game.difficulty(), Difficulty::Medium);

    let mut points = 0;
    let mut snapshot = game.snapshot();
    while snapshot.mode != GameMode::GameOver {
        assert!(snapshot.frame < FRAME_LIMIT, "match never ended");
        snapshot = game.frame();
        points += snapshot
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::PointScored(_)))
            .count();

        for paddle in [&snapshot.left_paddle, &snapshot.right_paddle] {
            assert!(paddle.pos.y >= 0.0 && paddle.pos.y <= 400.0);
        }
    }

    let result = snapshot.match_result.expect("game over carries a result");
    assert!(result.winner == "You" || result.winner == "Computer");
    assert_eq!(result.scores.get(result.winning_side), 2);
    assert_eq!(points as u32, result.scores.left + result.scores.right);

    // Back to the menu and straight into a fresh match
    press(&mut game, Key::Enter);
    assert_eq!(game.mode(), GameMode::Menu);
    press(&mut game, Key::Enter);
    assert_eq!(game.mode(), GameMode::SinglePlayer);
    assert_eq!(game.court().score.left + game.court().score.right, 0);
}

#[test]
fn multiplayer_pause_resume_mid_rally() {
    let mut game = Game::new(short_match_config(), 77);
    press(&mut game, Key::Down);
    press(&mut game, Key::Enter);
    assert_eq!(game.mode(), GameMode::MultiPlayer);

    let mut clock = FrameClock::default();
    for _ in 0..10 {
        game.advance(&mut clock, 1.0 / 60.0);
    }

    press(&mut game, Key::Escape);
    let paused = game.frame();
    assert_eq!(paused.paused_from(), Some(PlayMode::MultiPlayer));

    let frozen = game.court().clone();
    for _ in 0..20 {
        game.frame();
    }
    assert_eq!(game.court(), &frozen);

    press(&mut game, Key::Escape);
    assert_eq!(game.mode(), GameMode::MultiPlayer);
    game.frame();
    assert_ne!(game.court().ball.pos, frozen.ball.pos);
}

#[test]
fn untouched_multiplayer_match_is_won_by_someone() {
    let mut game = Game::new(short_match_config(), 5);
    press(&mut game, Key::Down);
    press(&mut game, Key::Enter);

    while game.mode() != GameMode::GameOver {
        assert!(game.frame_count() < FRAME_LIMIT, "match never ended");
        game.frame();
    }

    let result = game.result().cloned().expect("result recorded");
    let expected = match result.winning_side {
        Side::Left => "Player 1",
        Side::Right => "Player 2",
    };
    assert_eq!(result.winner, expected);

    // Escape leaves the final score on the court
    press(&mut game, Key::Escape);
    assert_eq!(game.mode(), GameMode::Menu);
    assert_eq!(game.court().score.get(result.winning_side), 2);
}
