// config.rs - Simulation constants and the configuration file loader
//
// File format, one directive per line:
//
//   # comment
//   @nrows 40
//   @ncols 60
//   @config random|manual
//   @steps 500          (optional, 0 = run until closed)
//   @seed 1234          (optional, 0 = seed from the clock)
//   @grid               (manual only, pattern rows follow)
//   00100
//   00100

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::error::{ConfigError, GolError};

pub const CELL_PIXELS: usize = 8;                              // Side of one cell on screen
pub const FRAME_DELAY: Duration = Duration::from_millis(25);   // Per-tick pacing
pub const PAUSE_DELAY: Duration = Duration::from_millis(500);  // One-shot pause on Space

pub const NEIGHBORS_TO_BIRTH: u8 = 3;
pub const MIN_NEIGHBORS_TO_SURVIVE: u8 = 2;
pub const MAX_NEIGHBORS_TO_SURVIVE: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Random,
    Manual,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Mode::Random),
            "manual" => Ok(Mode::Manual),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub mode: Mode,
    pub steps: u64,                // 0 = unbounded
    pub seed: u64,                 // 0 = derive from wall-clock time
    pub pattern: Vec<String>,      // raw @grid rows, empty in random mode
}

impl Config {
    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GolError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GolError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            mode = ?config.mode,
            rows = config.rows,
            cols = config.cols,
            "loaded configuration"
        );
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut rows: Option<usize> = None;
        let mut cols: Option<usize> = None;
        let mut mode: Option<String> = None;
        let mut steps: u64 = 0;
        let mut seed: u64 = 0;
        let mut pattern = Vec::new();
        let mut in_grid = false;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with("@grid") {
                in_grid = true;
                pattern.clear();
                continue;
            }

            if let Some(directive) = line.strip_prefix('@') {
                let mut parts = directive.split_whitespace();
                let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                    continue;
                };
                match key {
                    "nrows" => rows = Some(parse_number("@nrows", line_no, value)?),
                    "ncols" => cols = Some(parse_number("@ncols", line_no, value)?),
                    "steps" => steps = parse_number("@steps", line_no, value)?,
                    "seed" => seed = parse_number("@seed", line_no, value)?,
                    "config" => mode = Some(value.to_string()),
                    _ => {}
                }
                continue;
            }

            if in_grid {
                pattern.push(line.to_string());
            }
        }

        let rows = rows.ok_or(ConfigError::MissingKey("@nrows"))?;
        let cols = cols.ok_or(ConfigError::MissingKey("@ncols"))?;
        let mode: Mode = mode.ok_or(ConfigError::MissingKey("@config"))?.parse()?;

        if rows == 0 {
            return Err(ConfigError::ZeroDimension { key: "@nrows" });
        }
        if cols == 0 {
            return Err(ConfigError::ZeroDimension { key: "@ncols" });
        }

        match mode {
            Mode::Manual if !in_grid => return Err(ConfigError::MissingGrid),
            Mode::Random => pattern.clear(),
            Mode::Manual => {}
        }

        Ok(Self { rows, cols, mode, steps, seed, pattern })
    }
}

fn parse_number<T: FromStr>(key: &'static str, line: usize, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        line,
        value: value.to_string(),
    })
}
