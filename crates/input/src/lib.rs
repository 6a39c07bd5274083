//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` key
//! events. It maps keys into [`crate::types::GameAction`] while playing and
//! into [`crate::types::Decision`] while a prompt is on screen.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, handle_prompt_key, should_quit};
