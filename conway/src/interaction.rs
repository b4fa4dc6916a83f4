// interaction.rs - Mouse clicks to cell toggles

use crate::config::CELL_PIXELS;
use crate::grid::Grid;

/// Maps a pixel position, relative to the grid's top-left corner, to a cell.
pub fn cell_at_pixel(grid: &Grid, x: i32, y: i32) -> Option<(usize, usize)> {
    if x < 0 || y < 0 {
        return None;
    }
    let row = y as usize / CELL_PIXELS;
    let col = x as usize / CELL_PIXELS;
    (row < grid.rows() && col < grid.cols()).then_some((row, col))
}

/// Flips the cell under the pointer between alive and dead. Clicks outside
/// the grid are ignored.
pub fn toggle_at_pixel(grid: &mut Grid, x: i32, y: i32) -> Option<(usize, usize)> {
    let (row, col) = cell_at_pixel(grid, x, y)?;
    let current = grid.get(row, col);
    debug_assert!(!current.is_transient(), "toggle while a step is in progress");
    grid.set(row, col, current.toggled());
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    const PX: i32 = CELL_PIXELS as i32;

    #[test]
    fn click_flips_exactly_one_cell() {
        let mut grid = Grid::new(4, 6).unwrap();
        let before = grid.clone();

        assert_eq!(toggle_at_pixel(&mut grid, 3 * PX + 1, 2 * PX + PX - 1), Some((2, 3)));
        assert_eq!(grid.get(2, 3), Cell::Alive);
        for (r, c) in grid.positions().filter(|&p| p != (2, 3)) {
            assert_eq!(grid.get(r, c), before.get(r, c));
        }

        toggle_at_pixel(&mut grid, 3 * PX, 2 * PX);
        assert_eq!(grid, before);
    }

    #[test]
    fn clicks_outside_the_grid_are_ignored() {
        let mut grid = Grid::new(4, 6).unwrap();
        assert_eq!(toggle_at_pixel(&mut grid, 6 * PX, 0), None);
        assert_eq!(toggle_at_pixel(&mut grid, 0, 4 * PX), None);
        assert_eq!(toggle_at_pixel(&mut grid, -1, 5), None);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn pixel_edges_map_by_integer_division() {
        let grid = Grid::new(4, 6).unwrap();
        assert_eq!(cell_at_pixel(&grid, 0, 0), Some((0, 0)));
        assert_eq!(cell_at_pixel(&grid, PX - 1, PX - 1), Some((0, 0)));
        assert_eq!(cell_at_pixel(&grid, PX, PX), Some((1, 1)));
    }
}
