//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the move-resolution engine: the board model, the
//! line slide/merge rule, the four directional reducers, the tile spawner and
//! the terminal-state detector.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed and same moves produce identical games
//! - **Testable**: Every rule is a plain function over a `Board`
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation; a move touches at most 16 cells
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid of cells with row/column extraction
//! - [`line`]: slide and merge a single row or column
//! - [`moves`]: directional reducers (`reduce`, `move_left`, ...)
//! - [`spawn`]: random 2/4 tile placement and board initialization
//! - [`terminal`]: frozen-board and target-tile detection
//! - [`rng`]: seeded LCG for reproducible spawns
//! - [`snapshot`]: plain-data view of a game for renderers
//!
//! # Game Rules
//!
//! - **Slide**: all tiles travel toward the chosen wall, closing gaps
//! - **Merge**: two adjacent equal tiles become one tile of double value,
//!   at most once per tile per move; the pair nearest the wall merges first
//! - **Score**: each merge adds the value of the tile it produced
//! - **Spawn**: after every move that changed the board, one new tile
//!   (2 with 90% probability, 4 otherwise) appears on a random empty cell
//! - **Game over**: no empty cell and no adjacent equal pair in either axis
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{initialize_board, reduce, spawn_tile, is_terminal, Board, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let mut rng = SimpleRng::new(12345);
//! let board = initialize_board(&mut rng);
//!
//! let mut outcome = reduce(&board, Direction::Left);
//! if outcome.moved {
//!     spawn_tile(&mut outcome.board, &mut rng);
//! }
//! assert!(!is_terminal(&outcome.board));
//!
//! let row = Board::from_values([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
//! let out = reduce(&row, Direction::Left);
//! assert_eq!(out.board.values()[0], [4, 4, 0, 0]);
//! assert_eq!(out.score_delta, 8);
//! ```

pub mod board;
pub mod line;
pub mod moves;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod terminal;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use line::{slide_line, Line, LineOutcome, Toward};
pub use moves::{
    move_down, move_left, move_right, move_up, reduce, MergeEvent, MoveOutcome, MAX_MERGES,
};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use spawn::{initialize_board, spawn_tile, SpawnedTile};
pub use terminal::{has_adjacent_pair, has_reached_target, is_terminal};
