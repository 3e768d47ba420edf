//! Game controller and mode state machine
//!
//! [`Game`] is the single owner of all mutable state. Hosts talk to it
//! through two calls: [`Game::handle_key`] between frames and
//! [`Game::frame`] once per frame.
//!
//! | From                      | Intent           | To           | Side effect          |
//! |---------------------------|------------------|--------------|----------------------|
//! | `Menu`                    | Confirm (opt 0)  | SinglePlayer | full reset, AI right |
//! | `Menu`                    | Confirm (opt 1)  | MultiPlayer  | full reset           |
//! | SinglePlayer/MultiPlayer  | Cancel           | Paused       | remembers the mode   |
//! | `Paused`                  | Cancel           | previous     |                      |
//! | `GameOver`                | Confirm          | Menu         | full reset           |
//! | `GameOver`                | Cancel           | Menu         |                      |

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{Config, Difficulty};
use crate::input::{HandlerSet, HeldKeys, Intent, KeyEvent, MenuIntent, PlayIntent};
use crate::sim::{Court, GameEvent, Score, Side, tick, update_ai};
use crate::snapshot::Snapshot;

/// Main menu entries, in display order
pub const MENU_OPTIONS: [&str; 2] = ["Single Player", "Multiplayer"];

/// A mode in which the simulation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    /// Left paddle vs the computer
    SinglePlayer,
    /// Two humans on one keyboard
    MultiPlayer,
}

impl From<PlayMode> for GameMode {
    fn from(mode: PlayMode) -> Self {
        match mode {
            PlayMode::SinglePlayer => GameMode::SinglePlayer,
            PlayMode::MultiPlayer => GameMode::MultiPlayer,
        }
    }
}

/// Current top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Menu,
    SinglePlayer,
    MultiPlayer,
    /// Frozen; resumes to `previous`
    Paused { previous: PlayMode },
    GameOver,
}

impl GameMode {
    /// The play mode the simulation runs in, if it is running
    pub fn play_mode(self) -> Option<PlayMode> {
        match self {
            GameMode::SinglePlayer => Some(PlayMode::SinglePlayer),
            GameMode::MultiPlayer => Some(PlayMode::MultiPlayer),
            _ => None,
        }
    }
}

/// Menu cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn options(&self) -> &'static [&'static str] {
        &MENU_OPTIONS
    }

    /// Label under the cursor; `None` if `selected` is out of range
    pub fn selected_label(&self) -> Option<&'static str> {
        MENU_OPTIONS.get(self.selected).copied()
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % MENU_OPTIONS.len();
    }

    pub fn previous(&mut self) {
        self.selected = (self.selected + MENU_OPTIONS.len() - 1) % MENU_OPTIONS.len();
    }
}

/// Outcome of a finished match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: String,
    pub winning_side: Side,
    pub scores: Score,
}

impl MatchResult {
    /// Label the winner the way the game-over screen names them
    pub fn new(winning_side: Side, right_is_ai: bool, scores: Score) -> Self {
        let winner = match (winning_side, right_is_ai) {
            (Side::Left, true) => "You",
            (Side::Right, true) => "Computer",
            (Side::Left, false) => "Player 1",
            (Side::Right, false) => "Player 2",
        };
        Self {
            winner: winner.to_string(),
            winning_side,
            scores,
        }
    }
}

/// The game controller
#[derive(Debug, Clone)]
pub struct Game<R = Pcg32> {
    config: Config,
    mode: GameMode,
    menu: MenuState,
    difficulty: Difficulty,
    court: Court,
    result: Option<MatchResult>,
    left_keys: HeldKeys,
    right_keys: HeldKeys,
    /// Events from the most recent `step()`
    pub(crate) events: Vec<GameEvent>,
    frame: u64,
    rng: R,
}

impl Game<Pcg32> {
    /// Create a game with the default seeded generator
    pub fn new(config: Config, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a game drawing all randomness from `rng`
    pub fn with_rng(config: Config, mut rng: R) -> Self {
        let court = Court::new(&config, false, &mut rng);
        Self {
            difficulty: config.difficulty,
            config,
            mode: GameMode::Menu,
            menu: MenuState::default(),
            court,
            result: None,
            left_keys: HeldKeys::default(),
            right_keys: HeldKeys::default(),
            events: Vec::new(),
            frame: 0,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Frames simulated since creation
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Apply one key event through the handler set for the current mode
    pub fn handle_key(&mut self, event: KeyEvent) {
        match HandlerSet::for_mode(self.mode).map(event) {
            Some(Intent::Menu(intent)) => self.handle_menu(intent),
            Some(Intent::Play(intent)) => self.handle_gameplay(intent),
            None => {}
        }
    }

    /// Apply a sequence of key events in order
    pub fn handle_keys(&mut self, events: impl IntoIterator<Item = KeyEvent>) {
        for event in events {
            self.handle_key(event);
        }
    }

    fn handle_menu(&mut self, intent: MenuIntent) {
        match intent {
            MenuIntent::Previous => self.menu.previous(),
            MenuIntent::Next => self.menu.next(),
            MenuIntent::Easier if self.menu.selected == 0 => {
                self.difficulty = self.difficulty.easier();
            }
            MenuIntent::Harder if self.menu.selected == 0 => {
                self.difficulty = self.difficulty.harder();
            }
            MenuIntent::Easier | MenuIntent::Harder => {}
            MenuIntent::Confirm => self.confirm(),
            MenuIntent::Cancel => {
                if self.mode == GameMode::GameOver {
                    self.set_mode(GameMode::Menu);
                }
            }
        }
    }

    fn confirm(&mut self) {
        if self.mode == GameMode::GameOver {
            self.set_mode(GameMode::Menu);
            self.reset_game();
            return;
        }

        let mode = match self.menu.selected {
            0 => PlayMode::SinglePlayer,
            1 => PlayMode::MultiPlayer,
            _ => return,
        };
        self.set_mode(mode.into());
        self.reset_game();
        if mode == PlayMode::SinglePlayer {
            log::info!("AI difficulty: {}", self.difficulty.as_str());
        }
    }

    fn handle_gameplay(&mut self, intent: PlayIntent) {
        match intent {
            PlayIntent::Cancel => match self.mode {
                GameMode::Paused { previous } => self.set_mode(previous.into()),
                mode => {
                    if let Some(previous) = mode.play_mode() {
                        self.set_mode(GameMode::Paused { previous });
                    }
                }
            },
            PlayIntent::Press(side, direction) => {
                // Paused ignores new movement
                if matches!(self.mode, GameMode::Paused { .. }) || self.court.paddle(side).is_ai {
                    return;
                }
                self.held_keys_mut(side).press(direction);
                self.apply_held_keys(side);
            }
            PlayIntent::Release(side, direction) => {
                // Releases still count while paused so keys aren't stuck on resume
                if self.court.paddle(side).is_ai {
                    return;
                }
                self.held_keys_mut(side).release(direction);
                self.apply_held_keys(side);
            }
        }
    }

    fn held_keys_mut(&mut self, side: Side) -> &mut HeldKeys {
        match side {
            Side::Left => &mut self.left_keys,
            Side::Right => &mut self.right_keys,
        }
    }

    fn apply_held_keys(&mut self, side: Side) {
        let active = match side {
            Side::Left => self.left_keys.active(),
            Side::Right => self.right_keys.active(),
        };
        let paddle = self.court.paddle_mut(side);
        paddle.vel_y = active.map_or(0.0, |direction| direction.sign() * paddle.speed);
    }

    fn set_mode(&mut self, mode: GameMode) {
        if self.mode != mode {
            log::info!("Mode {:?} -> {:?}", self.mode, mode);
        }
        if self.mode == GameMode::GameOver {
            self.result = None;
        }
        self.mode = mode;
    }

    /// New match: zero score, fresh paddles and serve.
    ///
    /// The right paddle is AI exactly when the current mode is single player.
    fn reset_game(&mut self) {
        let right_is_ai = self.mode == GameMode::SinglePlayer;
        self.court = Court::new(&self.config, right_is_ai, &mut self.rng);
        self.left_keys.clear();
        self.right_keys.clear();
        self.result = None;
    }

    fn finish_match(&mut self, winner: Side) {
        let result = MatchResult::new(winner, self.court.right.is_ai, self.court.score);
        log::info!(
            "{} won ({} - {})",
            result.winner,
            result.scores.left,
            result.scores.right
        );
        self.set_mode(GameMode::GameOver);
        self.result = Some(result);
    }

    /// Run one frame of simulation without producing a snapshot.
    ///
    /// AI first (single player only), then physics (single or multi).
    /// Pending events are replaced by this frame's events.
    pub fn step(&mut self) {
        self.frame += 1;
        self.events.clear();

        let Some(play_mode) = self.mode.play_mode() else {
            return;
        };

        if play_mode == PlayMode::SinglePlayer && self.court.right.is_ai {
            update_ai(
                &mut self.court.right,
                &self.court.ball,
                self.difficulty,
                &mut self.rng,
            );
        }

        if let Some(winner) = tick(&mut self.court, &self.config, &mut self.rng, &mut self.events) {
            self.finish_match(winner);
        }
    }

    /// Run one frame and return the snapshot for the renderer.
    ///
    /// Drains the events produced by this frame.
    pub fn frame(&mut self) -> Snapshot {
        self.step();
        self.frame_snapshot()
    }

    /// Snapshot the current state, draining pending events
    pub fn frame_snapshot(&mut self) -> Snapshot {
        let events = std::mem::take(&mut self.events);
        Snapshot::capture(self, events)
    }

    /// Snapshot of the current state without advancing or draining events.
    ///
    /// Events are those of the most recent `step()` only.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self, self.events.clone())
    }
}
