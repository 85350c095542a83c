use super::Cell;
use crate::error::{Result, SimError};
use rand::Rng;

/// Default share of cells brought to life by `randomize`.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.25;

/// GridState owns the 2D cell matrix.
/// Cells live in one flat, row-major buffer; dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl GridState {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SimError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {rows}x{cols}"
            )));
        }

        let len = rows.checked_mul(cols).ok_or_else(|| {
            SimError::InvalidConfiguration(format!("grid of {rows}x{cols} cells is too large"))
        })?;

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Convert 2D coordinates to 1D index, bounds-checked
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(SimError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip the cell at (row, col) and return its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.index(row, col)?;
        let flipped = self.cells[idx].toggle();
        self.cells[idx] = flipped;
        Ok(flipped)
    }

    /// Randomize using the thread-local generator
    pub fn randomize(&mut self, live_probability: f64) -> Result<()> {
        self.randomize_with(live_probability, &mut rand::rng())
    }

    /// Randomize with a caller-supplied generator; seed it for reproducible boards.
    /// Each cell is independently alive with `live_probability`.
    pub fn randomize_with<R: Rng>(&mut self, live_probability: f64, rng: &mut R) -> Result<()> {
        if !(0.0..=1.0).contains(&live_probability) {
            return Err(SimError::InvalidConfiguration(format!(
                "live probability must be within [0, 1], got {live_probability}"
            )));
        }

        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(live_probability) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        Ok(())
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Swap in a complete generation of identical shape.
    /// Either every cell changes or none does.
    pub fn replace_all(&mut self, next: GridState) -> Result<()> {
        if next.dimensions() != self.dimensions() {
            return Err(SimError::DimensionMismatch {
                expected: self.dimensions(),
                actual: next.dimensions(),
            });
        }
        self.cells = next.cells;
        Ok(())
    }

    /// Build a grid from an already computed row-major buffer
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Row-major view of the raw cells
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }
}
