// simulation.rs - Session state and the per-tick control loop

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use tracing::{debug, info};

use crate::config::{Config, FRAME_DELAY, Mode, PAUSE_DELAY};
use crate::error::GolError;
use crate::grid::Grid;
use crate::{interaction, patterns, step};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Input surfaced by whatever is showing the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Click { x: i32, y: i32 },   // pixels from the grid's top-left corner
    Pause,
    Reset,
}

/// The window (or terminal) side of the loop.
pub trait Frontend {
    /// Next pending event, `None` once the queue is drained. Must not block.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Draws `grid` as it stands at the start of generation `generation`.
    fn render(&mut self, grid: &Grid, generation: u64);

    fn sleep(&mut self, duration: Duration);
}

const HISTORY_LEN: usize = 10;

/// Hashes of the most recent generations, used to notice when the
/// population settles into a loop.
#[derive(Debug, Default)]
struct GridHistory {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl GridHistory {
    fn hash_grid(grid: &Grid) -> u64 {
        let mut hasher = DefaultHasher::new();
        grid.hash(&mut hasher);
        hasher.finish()
    }

    /// Records `grid`; true if it matches one of the last `HISTORY_LEN` grids.
    fn observe(&mut self, grid: &Grid) -> bool {
        let current = Self::hash_grid(grid);
        let seen = self.hashes[..self.count.min(HISTORY_LEN)].contains(&current);
        self.hashes[self.count % HISTORY_LEN] = current;
        self.count += 1;
        seen
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Everything one run owns: the grid, its configuration and the counters.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    config: Config,
    generation: u64,
    state: LoopState,
    history: GridHistory,
    cycle_reported: bool,
}

impl Session {
    /// Allocates the grid and seeds it according to `config.mode`.
    pub fn new(config: Config) -> Result<Self, GolError> {
        let mut grid = Grid::new(config.rows, config.cols)?;

        match config.mode {
            Mode::Random => {
                let seed = patterns::apply_random(&mut grid, config.seed);
                info!(seed, "seeded {}x{} grid randomly", config.rows, config.cols);
            }
            Mode::Manual => {
                let load = patterns::apply_manual(&mut grid, &config.pattern);
                info!(
                    rows = load.rows_applied,
                    "loaded {}x{} grid from manual pattern",
                    config.rows,
                    config.cols
                );
            }
        }

        Ok(Self {
            grid,
            config,
            generation: 0,
            state: LoopState::Running,
            history: GridHistory::default(),
            cycle_reported: false,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Re-seeds a random session and restarts the generation count. Manual
    /// patterns are not kept after loading, so a manual grid is left as is.
    pub fn reset(&mut self) {
        if self.config.mode == Mode::Random {
            let seed = patterns::apply_random(&mut self.grid, self.config.seed);
            info!(seed, "grid reset");
        }
        self.generation = 0;
        self.history.clear();
        self.cycle_reported = false;
    }

    pub fn toggle_at_pixel(&mut self, x: i32, y: i32) {
        if let Some((row, col)) = interaction::toggle_at_pixel(&mut self.grid, x, y) {
            debug!(row, col, "toggled cell");
        }
    }

    /// Ends the session; later ticks do nothing.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            info!(generation = self.generation, "quit requested");
            self.state = LoopState::Stopped;
        }
    }

    /// One generation forward.
    pub fn step(&mut self) {
        step::advance(&mut self.grid);
        self.generation += 1;
        debug!(generation = self.generation, alive = self.grid.count_alive(), "step");

        if self.history.observe(&self.grid) && !self.cycle_reported {
            info!(generation = self.generation, "population entered a repeating cycle");
            self.cycle_reported = true;
        }
    }

    /// Handles pending input, renders, then steps once.
    pub fn tick<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> LoopState {
        if self.state == LoopState::Stopped {
            return LoopState::Stopped;
        }

        while let Some(event) = frontend.poll_event() {
            match event {
                InputEvent::Quit => {
                    self.stop();
                    return self.state;
                }
                InputEvent::Click { x, y } => self.toggle_at_pixel(x, y),
                InputEvent::Pause => frontend.sleep(PAUSE_DELAY),
                InputEvent::Reset => self.reset(),
            }
        }

        frontend.render(&self.grid, self.generation);
        self.step();

        if self.config.steps > 0 && self.generation >= self.config.steps {
            info!(generation = self.generation, "step limit reached");
            self.state = LoopState::Stopped;
        }
        self.state
    }

    /// Ticks until stopped, pacing each tick with `FRAME_DELAY`.
    pub fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        while self.tick(frontend) == LoopState::Running {
            frontend.sleep(FRAME_DELAY);
        }
    }
}
