//! loctop - Interactive TUI viewer for tracked locations.
//!
//! Usage:
//!   loctop data.json              # browse recorded locations
//!   loctop data.json --watch      # watch mode: follow the latest point
//!   loctop data.json --replay     # feed records back one per tick
//!   loctop data.json --tick-ms 50 # faster replay

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use loctop::model::load_locations;
use loctop::tui::App;

/// Interactive TUI viewer for tracked locations.
#[derive(Parser)]
#[command(name = "loctop", about = "Location tracking dashboard")]
struct Args {
    /// Path to a JSON file with recorded locations.
    #[arg(value_name = "FILE")]
    data: PathBuf,

    /// Start in watch mode: show only the latest point.
    #[arg(short = 'w', long)]
    watch: bool,

    /// Replay the records one per tick instead of loading them up front.
    #[arg(long)]
    replay: bool,

    /// Tick interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 250)]
    tick_ms: u64,

    /// Write diagnostic logs to this file. Disabled by default because the
    /// terminal is owned by the TUI.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &PathBuf) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "loctop=info".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file
        && let Err(e) = init_logging(path)
    {
        eprintln!("Error opening log file '{}': {}", path.display(), e);
        std::process::exit(1);
    }

    let locations = match load_locations(&args.data) {
        Ok(locations) => locations,
        Err(e) => {
            eprintln!("Error loading locations from '{}': {}", args.data.display(), e);
            std::process::exit(1);
        }
    };

    let tick_rate = Duration::from_millis(args.tick_ms);
    let app = App::new(locations, args.watch, args.replay);

    if let Err(e) = app.run(tick_rate) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
