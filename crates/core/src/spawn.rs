//! Tile spawner.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{
    Cell, GRID_SIZE, INITIAL_TILES, SPAWN_HIGH_CHANCE, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE,
};

/// Where the spawner put a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: u8,
    pub col: u8,
    pub value: u32,
}

/// Place one tile on a uniformly chosen empty cell.
///
/// The tile is a 2 nine times out of ten, otherwise a 4. On a full board
/// this is a no-op and returns `None`.
pub fn spawn_tile(board: &mut Board, rng: &mut SimpleRng) -> Option<SpawnedTile> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let idx = empty[rng.next_range(empty.len() as u32) as usize];
    let (num, den) = SPAWN_HIGH_CHANCE;
    let value = if rng.chance(num, den) {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    };

    *board.cell_mut(idx)? = Cell::new(value);

    Some(SpawnedTile {
        row: (idx / GRID_SIZE) as u8,
        col: (idx % GRID_SIZE) as u8,
        value,
    })
}

/// A fresh board: empty grid plus the opening tiles
pub fn initialize_board(rng: &mut SimpleRng) -> Board {
    let mut board = Board::new();
    for _ in 0..INITIAL_TILES {
        spawn_tile(&mut board, rng);
    }
    board
}
