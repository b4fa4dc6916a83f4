// main.rs - Conway's Game of Life in a window, or headless on stdout

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use conway::{Config, GolError, Session};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod console;   // Headless stdout frontend
mod ui;        // eframe window frontend

/// Conway's Game of Life on a bounded grid.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Configuration file describing the grid.
    #[arg(value_name = "CONFIG_FILE")]
    config: PathBuf,
    /// Print each generation to stdout instead of opening a window.
    #[arg(long)]
    headless: bool,
    /// Log every generation.
    #[arg(short, long)]
    verbose: bool,
}

fn print_usage() {
    println!("Usage: gol [--headless] [--verbose] <config_file>");
    println!();
    println!("Configuration file format:");
    println!("  @nrows <number>     - Number of grid rows");
    println!("  @ncols <number>     - Number of grid columns");
    println!("  @config <type>      - Configuration type (random|manual)");
    println!("  @steps <number>     - Number of steps (optional, 0 = infinite)");
    println!("  @seed <number>      - Random seed (optional, 0 = time-based)");
    println!();
    println!("For manual configuration, add:");
    println!("  @grid");
    println!("  <grid_rows>         - Grid pattern using 1/#/*/X for alive, 0/./<space> for dead");
    println!();
    println!("Example manual config file:");
    println!("  @nrows 5");
    println!("  @ncols 5");
    println!("  @config manual");
    println!("  @grid");
    println!("  00100");
    println!("  00100");
    println!("  00100");
    println!("  00000");
    println!("  00000");
    println!();
    println!("Controls:");
    println!("  Left click          - Toggle cell state");
    println!("  Space               - Pause briefly");
    println!("  R                   - Reset grid (random configs only)");
    println!("  Close window        - Exit");
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging unavailable: {err}");
    }
}

fn run(args: &CliArgs) -> Result<(), GolError> {
    let config = Config::load(&args.config)?;
    let session = Session::new(config)?;

    if args.headless {
        console::run(session);
        Ok(())
    } else {
        ui::run(session)
    }
}

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            print_usage();
            let err = GolError::Args(err.kind().to_string());
            return ExitCode::from(err.exit_code());
        }
    };

    init_tracing(args.verbose);
    info!(config = %args.config.display(), headless = args.headless, "starting");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
