//! Game session module - the Playing/Over state machine
//!
//! `GameState` ties the core rules together: it owns the board, the score,
//! the seeded RNG and the pending prompt. Every transition takes `&self` and
//! returns the next state, so a caller never observes a half-applied move.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::core::{
    has_reached_target, initialize_board, is_terminal, reduce, spawn_tile, Board, GameSnapshot,
    MergeEvent, SimpleRng, SpawnedTile, MAX_MERGES,
};
use crate::types::{Decision, Direction, GameAction, Prompt, TARGET_TILE};

/// Coarse lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Over,
}

/// Result of applying one action
#[derive(Debug, Clone)]
pub struct Step {
    /// The state after the action
    pub state: GameState,
    pub score_delta: u32,
    pub moved: bool,
    /// Cells produced by merges this step (one-shot, for animation)
    pub merges: ArrayVec<MergeEvent, MAX_MERGES>,
    pub spawned: Option<SpawnedTile>,
}

impl Step {
    fn unchanged(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            score_delta: 0,
            moved: false,
            merges: ArrayVec::new(),
            spawned: None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    score: u32,
    phase: Phase,
    prompt: Option<Prompt>,
    /// Set once the target tile first appears; never cleared until restart.
    won: bool,
    target: u32,
    rng: SimpleRng,
    /// Seed the session was created with.
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Successful moves in the current episode.
    moves: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and the default 2048 target
    pub fn new(seed: u32) -> Self {
        Self::with_target(seed, TARGET_TILE)
    }

    /// Create a new game with a custom target tile
    pub fn with_target(seed: u32, target: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = initialize_board(&mut rng);
        info!(seed, target, "new game");
        Self::assemble(board, rng, seed, target)
    }

    /// Start from an explicit board (puzzles, tests, replays)
    ///
    /// The phase reflects the board: a frozen board starts `Over`.
    pub fn from_board(board: Board, seed: u32) -> Self {
        Self::assemble(board, SimpleRng::new(seed), seed, TARGET_TILE)
    }

    fn assemble(board: Board, rng: SimpleRng, seed: u32, target: u32) -> Self {
        let over = is_terminal(&board);
        Self {
            board,
            score: 0,
            phase: if over { Phase::Over } else { Phase::Playing },
            prompt: over.then_some(Prompt::GameOver),
            won: has_reached_target(&board, target),
            target,
            rng,
            seed,
            episode_id: 0,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// True when a move would be honoured
    pub fn accepts_moves(&self) -> bool {
        self.phase == Phase::Playing && self.prompt.is_none()
    }

    /// Apply a game action
    pub fn apply_action(&self, action: GameAction) -> Step {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::Restart => Step::unchanged(&self.restart()),
        }
    }

    /// Resolve one directional input: reduce, then (if anything moved)
    /// spawn exactly one tile and check for win / game over.
    ///
    /// Ignored while the game is over or a prompt is waiting for an answer.
    pub fn apply_move(&self, direction: Direction) -> Step {
        if !self.accepts_moves() {
            debug!(direction = direction.as_str(), phase = ?self.phase, "move ignored");
            return Step::unchanged(self);
        }

        let outcome = reduce(&self.board, direction);
        if !outcome.moved {
            debug!(direction = direction.as_str(), "nothing moved");
            return Step::unchanged(self);
        }

        let mut next = self.clone();
        next.board = outcome.board;
        next.score = self.score.saturating_add(outcome.score_delta);
        next.moves = self.moves.wrapping_add(1);
        let spawned = spawn_tile(&mut next.board, &mut next.rng);

        debug!(
            direction = direction.as_str(),
            score_delta = outcome.score_delta,
            merges = outcome.merges.len(),
            score = next.score,
            "moved"
        );

        if !next.won && has_reached_target(&next.board, next.target) {
            next.won = true;
            next.prompt = Some(Prompt::Won);
            info!(target = next.target, score = next.score, moves = next.moves, "target reached");
        }

        if is_terminal(&next.board) {
            next.phase = Phase::Over;
            next.prompt = Some(Prompt::GameOver);
            info!(
                score = next.score,
                moves = next.moves,
                best = next.board.max_tile(),
                "game over"
            );
        }

        Step {
            state: next,
            score_delta: outcome.score_delta,
            moved: true,
            merges: outcome.merges,
            spawned,
        }
    }

    /// Answer the pending prompt. Without a pending prompt this is a no-op.
    pub fn resolve(&self, decision: Decision) -> GameState {
        let Some(prompt) = self.prompt else {
            return self.clone();
        };

        match decision {
            Decision::Restart => self.restart(),
            Decision::Dismiss => {
                debug!(?prompt, "prompt dismissed");
                let mut next = self.clone();
                next.prompt = None;
                next
            }
        }
    }

    /// Fresh board, score 0, back to `Playing`.
    ///
    /// The RNG stream continues, so consecutive episodes differ while the
    /// whole session stays reproducible from its seed.
    pub fn restart(&self) -> GameState {
        let mut rng = self.rng.clone();
        let board = initialize_board(&mut rng);
        let episode_id = self.episode_id.wrapping_add(1);
        info!(episode_id, final_score = self.score, "restart");

        Self {
            board,
            score: 0,
            phase: Phase::Playing,
            prompt: None,
            won: false,
            target: self.target,
            rng,
            seed: self.seed,
            episode_id,
            moves: 0,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_value_grid(&mut out.board);
        out.score = self.score;
        out.moves = self.moves;
        out.best_tile = self.board.max_tile();
        out.target = self.target;
        out.won = self.won;
        out.game_over = self.is_game_over();
        out.prompt = self.prompt;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
