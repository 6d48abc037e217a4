//! Territory -- a move-decision bot for toroidal territory-control games.
//!
//! This binary reads the game engine's handshake and map frames from stdin
//! and writes one move line per turn to stdout. Logs go to stderr so they
//! never interleave with protocol output.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use territory::config::EngineConfig;
use territory::engine;

/// Territory - a move-decision bot for toroidal territory-control games
#[derive(Parser, Debug)]
#[command(name = "territory")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name announced to the game engine (overrides the config file)
    #[arg(short, long)]
    name: Option<String>,

    /// JSON file with weight and threshold overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluate cells on all CPU cores
    #[arg(short, long)]
    parallel: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn load_config(args: &Args) -> Result<EngineConfig, territory::config::ConfigError> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if args.parallel {
        config.parallel = true;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());

    match engine::run(config, stdin.lock(), out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session aborted");
            ExitCode::FAILURE
        }
    }
}
