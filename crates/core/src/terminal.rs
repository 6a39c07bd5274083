//! Terminal-state and target detection.

use crate::board::Board;
use crate::types::GRID_SIZE;

/// True when the board is frozen: no empty cell and no equal neighbours in
/// either axis.
pub fn is_terminal(board: &Board) -> bool {
    !board.has_empty_cell() && !has_adjacent_pair(board)
}

/// True if some horizontally or vertically adjacent pair shares a non-zero value.
pub fn has_adjacent_pair(board: &Board) -> bool {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE - 1 {
            let v = board.value(row, col);
            if v != 0 && v == board.value(row, col + 1) {
                return true;
            }
        }
    }

    for col in 0..GRID_SIZE {
        for row in 0..GRID_SIZE - 1 {
            let v = board.value(row, col);
            if v != 0 && v == board.value(row + 1, col) {
                return true;
            }
        }
    }

    false
}

/// True if any cell holds exactly `target`.
///
/// Independent of [`is_terminal`]; a board can be both won and frozen.
pub fn has_reached_target(board: &Board, target: u32) -> bool {
    board.cells().iter().any(|cell| cell.value == target)
}
