// lib.rs - Conway's Game of Life on a bounded grid
//
// The grid model, the step rule, seeding, click handling and the tick loop.
// Anything that opens a window lives in the `conway_app` crate and talks to
// the loop through `simulation::Frontend`.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod patterns;
pub mod simulation;
pub mod step;

pub use cell::Cell;
pub use config::{Config, Mode};
pub use error::{ConfigError, GolError, GridError};
pub use grid::Grid;
pub use simulation::{Frontend, InputEvent, LoopState, Session};
