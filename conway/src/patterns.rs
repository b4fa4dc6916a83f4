// patterns.rs - Seeding the grid, randomly or from a manual pattern

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::cell::Cell;
use crate::grid::Grid;

/// Outcome of loading a manual pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualLoad {
    pub rows_applied: usize,
    pub rows_expected: usize,
}

impl ManualLoad {
    pub fn is_complete(&self) -> bool {
        self.rows_applied >= self.rows_expected
    }
}

/// `0` means "pick one from the clock".
pub fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Fills every cell alive or dead with even odds. Returns the seed used.
pub fn apply_random(grid: &mut Grid, seed: u64) -> u64 {
    let seed = resolve_seed(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    for (row, col) in grid.positions() {
        let state = if rng.random_bool(0.5) { Cell::Alive } else { Cell::Dead };
        grid.set(row, col, state);
    }
    seed
}

fn marker(c: char) -> Option<Cell> {
    match c {
        '1' | '#' | '*' | 'X' => Some(Cell::Alive),
        '0' | '.' | ' '       => Some(Cell::Dead),
        _                     => None,   // separator, takes no column
    }
}

/// Clears the grid, then lays the pattern rows over it from the top-left
/// corner. Rows and columns past the grid edge are dropped.
pub fn apply_manual<S: AsRef<str>>(grid: &mut Grid, pattern: &[S]) -> ManualLoad {
    grid.fill(Cell::Dead);

    let rows_expected = grid.rows();
    let mut rows_applied = 0;
    for (row, line) in pattern.iter().take(rows_expected).enumerate() {
        let cells = line.as_ref().chars().filter_map(marker).take(grid.cols());
        for (col, state) in cells.enumerate() {
            grid.set(row, col, state);
        }
        rows_applied += 1;
    }

    let load = ManualLoad { rows_applied, rows_expected };
    if !load.is_complete() {
        warn!("only {rows_applied} of {rows_expected} grid rows were specified");
    }
    load
}
