// grid.rs - Bounded grid for Conway's Game of Life

use std::fmt;
use std::ops::Index;

use crate::cell::Cell;
use crate::error::GridError;

/// Moore neighborhood offsets, self excluded.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Fixed-size `rows x cols` grid stored row-major in one buffer.
/// There is no wraparound: positions off the edge simply do not exist.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a grid of dead cells.
    ///
    /// The whole buffer is reserved in a single fallible allocation, so a
    /// failure leaves nothing behind to release.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::OutOfMemory { rows, cols })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::OutOfMemory { rows, cols })?;
        cells.resize(len, Cell::Dead);

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Panics if `(row, col)` is out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index_of(row, col)]
    }

    /// Panics if `(row, col)` is out of range.
    pub fn set(&mut self, row: usize, col: usize, state: Cell) {
        let idx = self.index_of(row, col);
        self.cells[idx] = state;
    }

    /// Signed so that neighbor offsets running off the edge are rejected
    /// instead of wrapping.
    pub fn is_valid_position(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Live neighbors of `(row, col)` as seen by the current generation.
    /// `Dying` cells are still alive until the step commits.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as isize, col as isize);
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let (nr, nc) = (row + dr, col + dc);
            if self.is_valid_position(nr, nc)
                && self.get(nr as usize, nc as usize).counts_as_neighbor()
            {
                count += 1;
            }
        }
        count
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn fill(&mut self, state: Cell) {
        self.cells.fill(state);
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Positions of `Alive` cells in row-major order.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        &self.cells[self.index_of(row, col)]
    }
}

/// Console dump: a live-cell count followed by one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Living cells: {}", self.count_alive())?;
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{} ", if cell.is_alive() { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
