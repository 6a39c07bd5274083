//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout frameworks and renders into a simple framebuffer that is
//! flushed to the terminal as diffs.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw merge highlights from one-shot events, never from game state timers
//! - Fixed tile geometry (7x3 cells) so values up to six digits fit

pub mod fb;
pub mod flash;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use flash::MergeFlash;
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
