//! Line compaction and merge.
//!
//! Every directional move reduces to the same operation applied to four
//! independent lines (rows for left/right, columns for up/down): slide the
//! tiles toward one end, merging equal neighbours once.

use arrayvec::ArrayVec;

use crate::types::{Cell, GRID_SIZE};

/// One row or column, in board index order
pub type Line = [Cell; GRID_SIZE];

/// Which end of the line the tiles travel toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toward {
    /// Index 0 (left for rows, top for columns)
    Start,
    /// Index 3 (right for rows, bottom for columns)
    End,
}

/// Result of sliding a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    pub cells: Line,
    /// Sum of the values produced by merges
    pub score: u32,
    /// Number of merges performed
    pub merges: u8,
    /// True if any position's value differs from the input
    pub changed: bool,
}

/// Slide and merge one line toward `toward`.
///
/// Only strictly adjacent survivors merge, in a single sweep from the wall:
/// `[2, 2, 2, 2]` toward the start becomes `[4, 4, 0, 0]`. A merged tile is
/// flagged `just_merged`; every other output cell has the flag cleared.
pub fn slide_line(line: Line, toward: Toward) -> LineOutcome {
    let mut oriented = line;
    if toward == Toward::End {
        oriented.reverse();
    }

    let (mut cells, score, merges) = slide_toward_start(&oriented);

    if toward == Toward::End {
        cells.reverse();
    }

    let changed = cells
        .iter()
        .zip(line.iter())
        .any(|(after, before)| after.value != before.value);

    LineOutcome {
        cells,
        score,
        merges,
        changed,
    }
}

fn slide_toward_start(line: &Line) -> (Line, u32, u8) {
    let tiles: ArrayVec<u32, GRID_SIZE> = line
        .iter()
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.value)
        .collect();

    let mut out = [Cell::EMPTY; GRID_SIZE];
    let mut write = 0;
    let mut read = 0;
    let mut score = 0u32;
    let mut merges = 0u8;

    while read < tiles.len() {
        let value = tiles[read];
        if read + 1 < tiles.len() && tiles[read + 1] == value {
            let merged = value.saturating_mul(2);
            out[write] = Cell::merged(merged);
            score = score.saturating_add(merged);
            merges += 1;
            read += 2;
        } else {
            out[write] = Cell::new(value);
            read += 1;
        }
        write += 1;
    }

    (out, score, merges)
}
