//! Directional reducers.
//!
//! `reduce` applies [`slide_line`] to each row (left/right) or column
//! (up/down) and reports the new board, the score gained, whether anything
//! moved, and the cells produced by merges.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::line::{slide_line, Toward};
use crate::types::{Direction, GRID_SIZE};

/// Upper bound on merges in one move (two per line)
pub const MAX_MERGES: usize = GRID_SIZE * 2;

/// A cell that was produced by a merge on this move.
///
/// Returned once per move for the renderer to animate, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeEvent {
    pub row: u8,
    pub col: u8,
    pub value: u32,
}

/// Result of one directional move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub score_delta: u32,
    /// True iff any row/column's values changed
    pub moved: bool,
    pub merges: ArrayVec<MergeEvent, MAX_MERGES>,
}

/// Slide every line of `board` in `direction`.
///
/// Total over any board; the input is not modified. Tile values and the
/// score delta saturate at `u32::MAX` instead of overflowing. Merged cells
/// carry `just_merged = true` in the returned board and every other cell has
/// the flag cleared.
pub fn reduce(board: &Board, direction: Direction) -> MoveOutcome {
    let toward = match direction {
        Direction::Left | Direction::Up => Toward::Start,
        Direction::Right | Direction::Down => Toward::End,
    };
    let horizontal = direction.is_horizontal();

    let mut next = *board;
    let mut score_delta = 0u32;
    let mut moved = false;
    let mut merges = ArrayVec::new();

    for i in 0..GRID_SIZE {
        let line = if horizontal {
            board.row(i)
        } else {
            board.column(i)
        };

        let out = slide_line(line, toward);
        score_delta = score_delta.saturating_add(out.score);
        moved |= out.changed;

        for (j, cell) in out.cells.iter().enumerate() {
            if cell.just_merged {
                let (row, col) = if horizontal { (i, j) } else { (j, i) };
                merges.push(MergeEvent {
                    row: row as u8,
                    col: col as u8,
                    value: cell.value,
                });
            }
        }

        if horizontal {
            next.set_row(i, out.cells);
        } else {
            next.set_column(i, out.cells);
        }
    }

    MoveOutcome {
        board: next,
        score_delta,
        moved,
        merges,
    }
}

pub fn move_left(board: &Board) -> MoveOutcome {
    reduce(board, Direction::Left)
}

pub fn move_right(board: &Board) -> MoveOutcome {
    reduce(board, Direction::Right)
}

pub fn move_up(board: &Board) -> MoveOutcome {
    reduce(board, Direction::Up)
}

pub fn move_down(board: &Board) -> MoveOutcome {
    reduce(board, Direction::Down)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_move_left_rows_independent() {
        let board = Board::from_values([[2, 2, 2, 2], [0, 0, 0, 0], [2, 0, 0, 2], [4, 0, 4, 8]]);
        let out = move_left(&board);

        assert_eq!(
            out.board.values(),
            [[4, 4, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [8, 8, 0, 0]]
        );
        assert_eq!(out.score_delta, 4 + 4 + 4 + 8);
        assert!(out.moved);
        assert_eq!(out.merges.len(), 4);
    }

    #[test]
    fn test_move_right() {
        let board = Board::from_values([[0, 0, 2, 2], [2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let out = move_right(&board);

        assert_eq!(out.board.values()[0], [0, 0, 0, 4]);
        assert_eq!(out.board.values()[1], [0, 0, 2, 4]);
        assert_eq!(out.score_delta, 4);
        assert_eq!(
            out.merges.as_slice(),
            &[MergeEvent {
                row: 0,
                col: 3,
                value: 4
            }]
        );
    }

    #[test]
    fn test_move_up_and_down_use_columns() {
        let board = Board::from_values([[2, 0, 0, 0], [2, 0, 0, 0], [0, 4, 0, 0], [2, 4, 0, 0]]);

        let up = move_up(&board);
        assert_eq!(
            up.board.values(),
            [[4, 8, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(up.score_delta, 12);
        assert!(up.board.get(0, 0).unwrap().just_merged);
        assert!(up.board.get(0, 1).unwrap().just_merged);
        assert!(!up.board.get(1, 0).unwrap().just_merged);

        let down = move_down(&board);
        assert_eq!(
            down.board.values(),
            [[0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 8, 0, 0]]
        );
        assert_eq!(
            down.merges.as_slice(),
            &[
                MergeEvent {
                    row: 3,
                    col: 0,
                    value: 4
                },
                MergeEvent {
                    row: 3,
                    col: 1,
                    value: 8
                },
            ]
        );
    }

    #[test]
    fn test_no_move_reports_unmoved_and_zero_delta() {
        let board = Board::from_values([[2, 4, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let out = move_left(&board);
        assert!(!out.moved);
        assert_eq!(out.score_delta, 0);
        assert!(out.merges.is_empty());
        assert_eq!(out.board, board);
    }

    #[test]
    fn test_previous_merge_flags_are_cleared() {
        let mut board = Board::from_values([
            [2, 4, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 2],
        ]);
        board.set(0, 1, Cell::merged(4));

        let out = move_down(&board);
        assert!(out.moved);
        assert!(out.board.cells().iter().all(|cell| !cell.just_merged));
    }

    #[test]
    fn test_input_board_untouched() {
        let board = Board::from_values([[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let before = board;
        let _ = reduce(&board, Direction::Left);
        assert_eq!(board, before);
    }
}
