//! Game session engine.
//!
//! Wraps the pure rules in `tui_2048_core` into the `Playing`/`Over` state
//! machine the front end drives. Transitions are immutable: every call takes
//! `&GameState` and hands back a new one, together with the one-shot merge
//! events for the renderer.
//!
//! Win and game-over never block. They set a [`Prompt`](crate::types::Prompt)
//! which the front end shows and later answers with
//! [`GameState::resolve`].
//!
//! # Example
//!
//! ```
//! use tui_2048_engine::{GameState, Phase};
//! use tui_2048_types::{Decision, Direction};
//!
//! let game = GameState::new(12345);
//! let step = game.apply_move(Direction::Left);
//! let game = step.state;
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // Answering without a pending prompt changes nothing.
//! assert_eq!(game.resolve(Decision::Restart), game);
//! ```

pub mod game;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use game::{GameState, Phase, Step};
