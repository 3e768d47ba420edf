//! Fixed-step frame clock
//!
//! Hosts call back at whatever rate their display runs. The clock turns
//! those wall-clock deltas into a whole number of simulation frames.

use rand::Rng;

use crate::consts::{FRAME_DT, MAX_FRAME_DELTA, MAX_SUBSTEPS};
use crate::game::Game;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(step: f32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Add `dt` seconds and return how many frames to run now.
    ///
    /// Deltas are clamped to [`MAX_FRAME_DELTA`] (negative or NaN count as 0) and at most
    /// `max_substeps` frames are released per call to avoid a spiral of death.
    pub fn advance(&mut self, dt: f32) -> u32 {
        // NaN maps to 0 through max/min
        self.accumulator += dt.max(0.0).min(MAX_FRAME_DELTA);

        let mut frames = 0;
        while self.accumulator >= self.step && frames < self.max_substeps {
            self.accumulator -= self.step;
            frames += 1;
        }
        frames
    }

    /// Leftover time as a fraction of one step (for render interpolation)
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).min(1.0)
    }
}

impl<R: Rng> Game<R> {
    /// Run as many frames as `dt` seconds are worth and snapshot the result.
    ///
    /// Events from every frame run are reported together.
    pub fn advance(&mut self, clock: &mut FrameClock, dt: f32) -> Snapshot {
        let mut events = Vec::new();
        for _ in 0..clock.advance(dt) {
            self.step();
            events.append(&mut self.events);
        }
        Snapshot::capture(self, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FrameClock::new(0.01);
        assert_eq!(clock.advance(0.005), 0);
        assert_eq!(clock.advance(0.006), 1);
        assert!(clock.alpha() < 0.5);
    }

    #[test]
    fn test_runs_multiple_frames_for_long_delta() {
        let mut clock = FrameClock::new(0.01);
        assert_eq!(clock.advance(0.035), 3);
    }

    #[test]
    fn test_caps_substeps() {
        let mut clock = FrameClock::new(0.001);
        assert_eq!(clock.advance(1.0), MAX_SUBSTEPS);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_nan_delta_does_not_stall_clock() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(1.0), MAX_SUBSTEPS);
        assert!(clock.alpha().is_finite());
    }

    #[test]
    fn test_advance_reports_events_from_every_frame_run() {
        let mut game = Game::new(Config::default(), 3);
        game.handle_key(crate::input::KeyEvent::down(crate::input::Key::Down));
        game.handle_key(crate::input::KeyEvent::down(crate::input::Key::Enter));
        let mut clock = FrameClock::default();

        // Eight frames per call; over many calls something must be reported
        let mut reported = 0;
        for _ in 0..100 {
            reported += game.advance(&mut clock, 1.0).events.len();
        }
        assert!(reported > 0);
        assert!(game.snapshot().events.is_empty());
    }

    #[test]
    fn test_game_advance_steps_frames() {
        let mut game = Game::new(Config::default(), 3);
        let mut clock = FrameClock::default();

        let snapshot = game.advance(&mut clock, FRAME_DT * 2.5);
        assert_eq!(snapshot.frame, 2);
    }
}
