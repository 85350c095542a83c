//! Generation transition for Conway's Game of Life on a bounded grid.
//!
//! Neighbors falling outside the grid count as dead; there is no wrap-around.
//! Every step reads only the previous generation and writes into a separate
//! buffer, so no cell ever sees a half-updated board.

use super::{Cell, GridState};
use crate::error::Result;
use rayon::prelude::*;

/// Moore neighborhood as (row, col) offsets
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// Grids at or above this many cells are scanned row-parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100 * 100;

/// Stateless B3/S23 stepper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionEngine {
    parallel_threshold: usize,
}

impl TransitionEngine {
    pub const fn new() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Use `usize::MAX` to force the serial scan
    pub const fn with_parallel_threshold(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Count live neighbors with clamped edges; `(row, col)` must be inside the grid
    pub(crate) fn count_live_neighbors(grid: &GridState, row: usize, col: usize) -> u8 {
        let (rows, cols) = grid.dimensions();
        let cells = grid.cells();

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < rows && c < cols).then(|| cells[r * cols + c])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation; the input is left untouched
    pub fn step(&self, grid: &GridState) -> GridState {
        let (rows, cols) = grid.dimensions();
        if rows * cols >= self.parallel_threshold {
            Self::step_parallel(grid)
        } else {
            Self::step_serial(grid)
        }
    }

    /// Single-threaded scan
    pub fn step_serial(grid: &GridState) -> GridState {
        let (rows, cols) = grid.dimensions();
        let cells: Vec<Cell> = grid
            .iter_cells()
            .map(|(row, col, current)| current.next_state(Self::count_live_neighbors(grid, row, col)))
            .collect();

        GridState::from_cells(rows, cols, cells)
    }

    /// Row-parallel scan using rayon; produces exactly what `step_serial` does
    pub fn step_parallel(grid: &GridState) -> GridState {
        let (rows, cols) = grid.dimensions();
        let source = grid.cells();
        let mut cells = vec![Cell::Dead; rows * cols];

        cells
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, slot) in out.iter_mut().enumerate() {
                    let current = source[row * cols + col];
                    *slot = current.next_state(Self::count_live_neighbors(grid, row, col));
                }
            });

        GridState::from_cells(rows, cols, cells)
    }

    /// Step `grid` and commit the result in place
    pub fn advance(&self, grid: &mut GridState) -> Result<()> {
        let next = self.step(grid);
        grid.replace_all(next)
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::new()
    }
}
