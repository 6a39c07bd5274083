//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, engine state machine, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid stored row-major:
//!
//! - **Size**: 4 rows by 4 columns (indexed 0-3)
//! - **Cells**: 16, never more, never fewer
//!
//! # Tile Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_TILE` | 2048 | Default winning tile |
//! | `SPAWN_LOW_VALUE` | 2 | Common spawn value |
//! | `SPAWN_HIGH_VALUE` | 4 | Rare spawn value |
//! | `SPAWN_HIGH_CHANCE` | 1 in 10 | Probability of spawning a 4 |
//! | `INITIAL_TILES` | 2 | Tiles spawned on a fresh board |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Input poll / redraw interval (~60 FPS) |
//! | `MERGE_FLASH_MS` | 120 | How long merged tiles stay highlighted |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE, TARGET_TILE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Parse a game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(TARGET_TILE, 2048);
//! ```

/// Board side length (4 rows, 4 columns)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board (16)
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Default winning tile value
pub const TARGET_TILE: u32 = 2048;

/// Value of a freshly spawned tile in the common case
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of a freshly spawned tile in the rare case
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Chance of spawning `SPAWN_HIGH_VALUE`, as numerator / denominator (1 in 10)
pub const SPAWN_HIGH_CHANCE: (u32, u32) = (1, 10);

/// Number of tiles spawned on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Input poll / redraw interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default duration of the merge highlight in milliseconds
pub const MERGE_FLASH_MS: u32 = 120;


/// A single grid position.
///
/// - `value == 0`: empty
/// - `value > 0`: a tile, always a power of two
///
/// `just_merged` marks a cell produced by a merge on the most recent move. It is
/// animation metadata only and never takes part in game-logic comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub value: u32,
    pub just_merged: bool,
}

impl Cell {
    /// An empty cell
    pub const EMPTY: Cell = Cell {
        value: 0,
        just_merged: false,
    };

    /// A plain tile (not merged this move)
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            just_merged: false,
        }
    }

    /// A tile produced by a merge on this move
    pub const fn merged(value: u32) -> Self {
        Self {
            value,
            just_merged: true,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }
}

/// Directions a move can slide the tiles in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for Left/Right (moves operate on rows)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Game actions the shell can apply to the session
///
/// Moves are ignored while the game is over or a prompt is pending;
/// `Restart` is always honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Throw the current board away and start over
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}

/// A question the shell must put to the player.
///
/// Raised by the engine instead of blocking on a dialog; answered with a
/// [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prompt {
    /// The target tile was reached; restart or keep playing?
    Won,
    /// The board is frozen; restart?
    GameOver,
}

impl Prompt {
    /// Headline shown by the front end
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::Won => "YOU WIN!",
            Prompt::GameOver => "GAME OVER",
        }
    }
}

/// The player's answer to a [`Prompt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Start a fresh game
    Restart,
    /// Close the prompt (keep playing after a win, look at the board after a loss)
    Dismiss,
}
