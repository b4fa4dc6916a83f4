// console.rs - Headless frontend that prints every generation

use std::io::{self, Write};
use std::time::Duration;

use conway::{Frontend, Grid, InputEvent, Session};
use tracing::warn;

pub struct ConsoleFrontend<W: Write> {
    out: W,
    pace: bool,    // false skips the sleeps, for tests
}

impl<W: Write> ConsoleFrontend<W> {
    pub fn new(out: W) -> Self {
        Self { out, pace: true }
    }

    fn write_frame(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        writeln!(self.out, "Generation {generation}")?;
        write!(self.out, "{grid}")?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Frontend for ConsoleFrontend<W> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        None
    }

    fn render(&mut self, grid: &Grid, generation: u64) {
        if let Err(err) = self.write_frame(grid, generation) {
            warn!(%err, "failed to print generation");
        }
    }

    fn sleep(&mut self, duration: Duration) {
        if self.pace {
            std::thread::sleep(duration);
        }
    }
}

/// Runs the session to completion on stdout. Without a step limit this only
/// ends when the process is interrupted.
pub fn run(mut session: Session) {
    let stdout = io::stdout();
    let mut frontend = ConsoleFrontend::new(stdout.lock());
    session.run(&mut frontend);
}
