//! Passage CLI - Command Line Operations for First-Passage Estimation
//!
//! This is the operational entry point for the passage simulation library.
//!
//! # Commands
//!
//! - `passage simulate` - Run one estimation with parameters as flags
//! - `passage run` - Legacy mode: ordered parameters on standard input
//! - `passage check` - Echo effective defaults and engine limits
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! foundation and engine layers behind a unified command-line interface;
//! parameter ingestion and file output live here, never in the engine.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod input;
mod output;

pub use error::{CliError, Result};

/// Passage first-passage simulation CLI
#[derive(Parser)]
#[command(name = "passage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a first-passage-time distribution from explicit flags
    Simulate(commands::simulate::SimulateOptions),

    /// Legacy mode: read ordered parameters from standard input
    Run {
        /// Rate parameterisation of the input (rates, sqrt-rates, none)
        #[arg(short, long, default_value = "rates")]
        parameterisation: String,

        /// Base directory for the tag-derived output file
        #[arg(short, long, default_value = "results")]
        output_dir: String,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Report progress every this many trials (0 disables)
        #[arg(long, default_value_t = 1000)]
        progress_every: usize,
    },

    /// Check effective defaults and engine limits
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate(opts) => commands::simulate::run(opts),
        Commands::Run {
            parameterisation,
            output_dir,
            seed,
            progress_every,
        } => commands::run::run(&parameterisation, &output_dir, seed, progress_every),
        Commands::Check => commands::check::run(),
    }
}
