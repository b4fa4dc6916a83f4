// cell.rs - Cell states for Conway's Game of Life

/// State of a single cell.
///
/// `Dying` and `Birth` only exist between the mark and commit phases of a
/// step; at rest every cell is either `Dead` or `Alive`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    Dying,   // alive this generation, dead in the next
    Birth,   // dead this generation, alive in the next
}

impl Cell {
    /// True for cells that are alive during the current generation,
    /// including ones already marked to die.
    pub fn counts_as_neighbor(self) -> bool {
        matches!(self, Cell::Alive | Cell::Dying)
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn is_transient(self) -> bool {
        matches!(self, Cell::Dying | Cell::Birth)
    }

    /// Resolves a marked cell into its next-generation state.
    pub fn settle(self) -> Cell {
        match self {
            Cell::Dying => Cell::Dead,
            Cell::Birth => Cell::Alive,
            other => other,
        }
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            _ => Cell::Alive,
        }
    }
}
