//! Simulate command implementation
//!
//! Runs one Monte Carlo first-passage estimation with parameters supplied
//! as flags and reports summary statistics.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use passage_core::types::{NegativeBoundary, SimulationParameters};
use passage_mc::mc::{EngineConfig, MonteCarloEngine};

use crate::{output, CliError, Result};

/// Flag set for the `simulate` command.
#[derive(Args, Debug)]
pub struct SimulateOptions {
    /// Resetting rate on the positive half-line
    #[arg(long, default_value_t = 0.0)]
    pub reset_rate_pos: f64,

    /// Resetting rate on the negative half-line
    #[arg(long, default_value_t = 0.0)]
    pub reset_rate_neg: f64,

    /// Probability that the absorbing target is on the positive side
    #[arg(long, default_value_t = 0.5)]
    pub target_prob: f64,

    /// Number of independent trials
    #[arg(short, long, default_value_t = 10_000)]
    pub trials: usize,

    /// Diffusion constant
    #[arg(long, default_value_t = 1.0)]
    pub diffusion: f64,

    /// Absolute distance from the origin to either target
    #[arg(long, default_value_t = 1.0)]
    pub target_distance: f64,

    /// Discretisation interval
    #[arg(long, default_value_t = 1e-5)]
    pub time_step: f64,

    /// Seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Interpret the supplied rates as square roots and square them
    #[arg(long)]
    pub sqrt_rates: bool,

    /// Replace the negative-side hazard with an instant-reset wall
    #[arg(long)]
    pub instant_wall: bool,

    /// Abort any trial that exceeds this many steps without absorbing
    #[arg(long)]
    pub max_steps: Option<u64>,

    /// Write the first-passage times to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report progress every this many trials (0 disables)
    #[arg(long, default_value_t = 1000)]
    pub progress_every: usize,

    /// Summary format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Run the simulate command
pub fn run(opts: SimulateOptions) -> Result<()> {
    if !matches!(opts.format.as_str(), "text" | "json") {
        return Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: text, json",
            opts.format
        )));
    }

    let (rate_pos, rate_neg) = if opts.sqrt_rates {
        (
            opts.reset_rate_pos * opts.reset_rate_pos,
            opts.reset_rate_neg * opts.reset_rate_neg,
        )
    } else {
        (opts.reset_rate_pos, opts.reset_rate_neg)
    };

    let params = SimulationParameters {
        reset_rate_positive: rate_pos,
        reset_rate_negative: rate_neg,
        target_probability: opts.target_prob,
        diffusion_constant: opts.diffusion,
        target_distance: opts.target_distance,
        time_step: opts.time_step,
        negative_boundary: if opts.instant_wall {
            NegativeBoundary::InstantReset
        } else {
            NegativeBoundary::Hazard
        },
    };
    params.validate()?;

    let mut builder = EngineConfig::builder().trial_count(opts.trials);
    if let Some(seed) = opts.seed {
        builder = builder.seed(seed);
    }
    if let Some(cap) = opts.max_steps {
        builder = builder.max_steps_per_trial(cap);
    }
    let config = builder.build()?;

    info!(
        "r1 = {} r2 = {} p = {} runs = {}",
        params.reset_rate_positive, params.reset_rate_negative, params.target_probability,
        opts.trials
    );
    info!("dt = {}", params.time_step);

    let mut engine = MonteCarloEngine::new(config)?;
    let started = Instant::now();
    let times = engine.run_with_progress(&params, opts.progress_every, |completed| {
        info!("{} trials completed", completed);
    })?;
    let elapsed = started.elapsed();

    if let Some(path) = &opts.output {
        output::write_passage_times(path, times.as_slice())?;
        info!(
            "wrote {} first-passage times to {}",
            times.len(),
            path.display()
        );
    }

    let summary = times.summary();
    match opts.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => {
            println!("trials     {}", summary.trials);
            println!("mean FPT   {:.6}", summary.mean);
            println!("std error  {:.6}", summary.std_error);
            println!("min / max  {:.6} / {:.6}", summary.min, summary.max);
        }
    }

    info!("time measured: {:.3}s", elapsed.as_secs_f64());
    Ok(())
}
