// step.rs - One generation of Conway's rules, mark then commit
//
// Marking writes transient states into the grid itself. Because `Dying`
// still counts as a neighbor and `Birth` does not, every count taken during
// the mark phase sees the generation as it was before the step, whatever
// order the cells are visited in.

use crate::cell::Cell;
use crate::config::{MAX_NEIGHBORS_TO_SURVIVE, MIN_NEIGHBORS_TO_SURVIVE, NEIGHBORS_TO_BIRTH};
use crate::grid::Grid;

/// Rule decision for a resting cell with `neighbors` live neighbors.
pub fn mark_state(current: Cell, neighbors: u8) -> Cell {
    match current {
        Cell::Alive if !(MIN_NEIGHBORS_TO_SURVIVE..=MAX_NEIGHBORS_TO_SURVIVE).contains(&neighbors) => {
            Cell::Dying
        }
        Cell::Dead if neighbors == NEIGHBORS_TO_BIRTH => Cell::Birth,
        other => other,
    }
}

/// Mark phase over the given positions.
pub fn mark(grid: &mut Grid, positions: impl IntoIterator<Item = (usize, usize)>) {
    for (row, col) in positions {
        let neighbors = grid.count_neighbors(row, col);
        let next = mark_state(grid.get(row, col), neighbors);
        grid.set(row, col, next);
    }
}

/// Commit phase: resolves every transient cell.
pub fn commit(grid: &mut Grid) {
    for cell in grid.cells_mut() {
        *cell = cell.settle();
    }
}

/// Advances the grid by exactly one generation.
pub fn advance(grid: &mut Grid) {
    let positions = grid.positions();
    mark(grid, positions);
    commit(grid);
}
