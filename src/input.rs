//! Key events, semantic intents and per-mode dispatch
//!
//! Hosts feed raw [`KeyEvent`]s. The active [`HandlerSet`] is a pure
//! function of the current mode, and maps each event to at most one
//! [`Intent`].

use serde::{Deserialize, Serialize};

use crate::game::GameMode;
use crate::sim::Side;

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    S,
    Enter,
    Escape,
}

impl Key {
    /// Map a DOM-style key name ("ArrowUp", "w", "Enter", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            "Enter" => Some(Key::Enter),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyKind {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub kind: KeyKind,
    pub key: Key,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            kind: KeyKind::Down,
            key,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            kind: KeyKind::Up,
            key,
        }
    }

    /// Build from a DOM-style key name; unknown keys yield `None`
    pub fn from_name(kind: KeyKind, name: &str) -> Option<Self> {
        Key::from_name(name).map(|key| Self { kind, key })
    }
}

/// Vertical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Screen-space sign (y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up => -1.0,
            Direction::Down => 1.0,
        }
    }

    fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Intents understood by the menu handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIntent {
    Previous,
    Next,
    Easier,
    Harder,
    Confirm,
    Cancel,
}

/// Intents understood by the gameplay handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIntent {
    Press(Side, Direction),
    Release(Side, Direction),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Menu(MenuIntent),
    Play(PlayIntent),
}

/// Which of the two mutually exclusive handler sets is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerSet {
    Menu,
    Gameplay,
}

impl HandlerSet {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Menu | GameMode::GameOver => HandlerSet::Menu,
            GameMode::SinglePlayer | GameMode::MultiPlayer | GameMode::Paused { .. } => {
                HandlerSet::Gameplay
            }
        }
    }

    /// Translate a key event; keys this set doesn't use map to `None`
    pub fn map(self, event: KeyEvent) -> Option<Intent> {
        match self {
            HandlerSet::Menu => map_menu(event).map(Intent::Menu),
            HandlerSet::Gameplay => map_gameplay(event).map(Intent::Play),
        }
    }
}

fn map_menu(event: KeyEvent) -> Option<MenuIntent> {
    if event.kind != KeyKind::Down {
        return None;
    }
    match event.key {
        Key::Up => Some(MenuIntent::Previous),
        Key::Down => Some(MenuIntent::Next),
        Key::Left => Some(MenuIntent::Easier),
        Key::Right => Some(MenuIntent::Harder),
        Key::Enter => Some(MenuIntent::Confirm),
        Key::Escape => Some(MenuIntent::Cancel),
        Key::W | Key::S => None,
    }
}

fn map_gameplay(event: KeyEvent) -> Option<PlayIntent> {
    let (side, direction) = match event.key {
        Key::W => (Side::Left, Direction::Up),
        Key::S => (Side::Left, Direction::Down),
        Key::Up => (Side::Right, Direction::Up),
        Key::Down => (Side::Right, Direction::Down),
        Key::Escape if event.kind == KeyKind::Down => return Some(PlayIntent::Cancel),
        _ => return None,
    };
    Some(match event.kind {
        KeyKind::Down => PlayIntent::Press(side, direction),
        KeyKind::Up => PlayIntent::Release(side, direction),
    })
}

/// Movement keys currently held for one paddle.
///
/// The most recent press owns the paddle. Releasing it hands control back
/// to the opposite key if that one is still down; releasing a key that
/// doesn't own the paddle changes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    up: bool,
    down: bool,
    active: Option<Direction>,
}

impl HeldKeys {
    pub fn press(&mut self, direction: Direction) {
        self.set(direction, true);
        self.active = Some(direction);
    }

    pub fn release(&mut self, direction: Direction) {
        self.set(direction, false);
        if self.active == Some(direction) {
            let other = direction.opposite();
            self.active = self.is_held(other).then_some(other);
        }
    }

    /// Direction the paddle should currently move in
    pub fn active(&self) -> Option<Direction> {
        self.active
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }
}
