//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell holds a tile value (0 = empty) and
//! a `just_merged` animation flag.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where both range 0..3, row 0 at the top.

use arrayvec::ArrayVec;

use crate::line::Line;
use crate::types::{Cell, CELL_COUNT, GRID_SIZE};

/// The game board - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub const fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; CELL_COUNT],
        }
    }

    /// Build a board from plain tile values (0 = empty), all merge flags cleared
    pub fn from_values(values: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                board.cells[row * GRID_SIZE + col] = Cell::new(value);
            }
        }
        board
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Tile value at (row, col), 0 for empty or out of bounds
    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.get(row, col).map_or(0, |cell| cell.value)
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Extract row `row` in column order (`row < GRID_SIZE`)
    pub(crate) fn row(&self, row: usize) -> Line {
        let start = row * GRID_SIZE;
        let mut line = [Cell::EMPTY; GRID_SIZE];
        line.copy_from_slice(&self.cells[start..start + GRID_SIZE]);
        line
    }

    /// Extract column `col` in row order (`col < GRID_SIZE`)
    pub(crate) fn column(&self, col: usize) -> Line {
        std::array::from_fn(|row| self.cells[row * GRID_SIZE + col])
    }

    pub(crate) fn set_row(&mut self, row: usize, line: Line) {
        let start = row * GRID_SIZE;
        self.cells[start..start + GRID_SIZE].copy_from_slice(&line);
    }

    pub(crate) fn set_column(&mut self, col: usize, line: Line) {
        for (row, cell) in line.into_iter().enumerate() {
            self.cells[row * GRID_SIZE + col] = cell;
        }
    }

    /// Flat indices of every empty cell, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(Cell::is_empty)
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|cell| cell.value as u64).sum()
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().map(|cell| cell.value).max().unwrap_or(0)
    }

    /// Tile values as a 2D grid, merge flags dropped
    pub fn values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0u32; GRID_SIZE]; GRID_SIZE];
        self.write_value_grid(&mut out);
        out
    }

    /// Write tile values into an existing grid (no allocation)
    pub fn write_value_grid(&self, out: &mut [[u32; GRID_SIZE]; GRID_SIZE]) {
        for (row, line) in out.iter_mut().enumerate() {
            for (col, slot) in line.iter_mut().enumerate() {
                *slot = self.cells[row * GRID_SIZE + col].value;
            }
        }
    }

    /// Game-logic equality: compares values only, ignoring `just_merged`
    pub fn same_tiles(&self, other: &Board) -> bool {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(a, b)| a.value == b.value)
    }

    /// Drop every `just_merged` flag
    pub fn clear_merge_flags(&mut self) {
        for cell in &mut self.cells {
            cell.just_merged = false;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Mutable cell by flat index (row-major)
    pub(crate) fn cell_mut(&mut self, idx: usize) -> Option<&mut Cell> {
        self.cells.get_mut(idx)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
