// error.rs - Fatal error taxonomy and process exit codes

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Grid allocation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    EmptyDimensions { rows: usize, cols: usize },
    OutOfMemory { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyDimensions { rows, cols } => {
                write!(f, "grid dimensions must be positive (got {rows}x{cols})")
            }
            GridError::OutOfMemory { rows, cols } => {
                write!(f, "failed to allocate a {rows}x{cols} grid")
            }
        }
    }
}

impl Error for GridError {}

/// Problems with the contents of a configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingKey(&'static str),
    ZeroDimension { key: &'static str },
    UnknownMode(String),
    InvalidValue { key: &'static str, line: usize, value: String },
    MissingGrid,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingKey(key) => {
                write!(f, "missing required configuration parameter {key}")
            }
            ConfigError::ZeroDimension { key } => {
                write!(f, "grid dimensions must be positive ({key} is 0)")
            }
            ConfigError::UnknownMode(mode) => write!(f, "unknown configuration type '{mode}'"),
            ConfigError::InvalidValue { key, line, value } => {
                write!(f, "line {line}: invalid value '{value}' for {key}")
            }
            ConfigError::MissingGrid => {
                write!(f, "manual configuration requires a @grid section")
            }
        }
    }
}

impl Error for ConfigError {}

/// Every fatal condition the program can hit, each with a stable exit code.
#[derive(Debug)]
pub enum GolError {
    Args(String),
    File { path: PathBuf, source: io::Error },
    Config(ConfigError),
    Render(String),
    Memory(GridError),
}

impl GolError {
    pub fn exit_code(&self) -> u8 {
        match self {
            GolError::Args(_)      => 1,
            GolError::File { .. }  => 2,
            GolError::Config(_)    => 3,
            GolError::Render(_)    => 4,
            GolError::Memory(_)    => 5,
        }
    }
}

impl fmt::Display for GolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GolError::Args(msg) => write!(f, "{msg}"),
            GolError::File { path, source } => {
                write!(f, "cannot open configuration file '{}': {source}", path.display())
            }
            GolError::Config(e) => write!(f, "{e}"),
            GolError::Render(msg) => write!(f, "rendering subsystem failed: {msg}"),
            GolError::Memory(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GolError::File { source, .. } => Some(source),
            GolError::Config(e) => Some(e),
            GolError::Memory(e) => Some(e),
            GolError::Args(_) | GolError::Render(_) => None,
        }
    }
}

impl From<ConfigError> for GolError {
    fn from(e: ConfigError) -> Self {
        GolError::Config(e)
    }
}

/// Zero dimensions are a configuration problem; anything else is memory.
impl From<GridError> for GolError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::EmptyDimensions { rows, .. } => GolError::Config(ConfigError::ZeroDimension {
                key: if rows == 0 { "@nrows" } else { "@ncols" },
            }),
            GridError::OutOfMemory { .. } => GolError::Memory(e),
        }
    }
}
