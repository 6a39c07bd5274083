use crate::types::{Prompt, GRID_SIZE, TARGET_TILE};

/// Plain-data copy of everything the front end draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub moves: u32,
    pub best_tile: u32,
    pub target: u32,
    pub won: bool,
    pub game_over: bool,
    pub prompt: Option<Prompt>,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u32; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.moves = 0;
        self.best_tile = 0;
        self.target = TARGET_TILE;
        self.won = false;
        self.game_over = false;
        self.prompt = None;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.prompt.is_none()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u32; GRID_SIZE]; GRID_SIZE],
            score: 0,
            moves: 0,
            best_tile: 0,
            target: TARGET_TILE,
            won: false,
            game_over: false,
            prompt: None,
            episode_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
