//! Run command implementation
//!
//! Legacy mode: reads one ordered, whitespace-delimited parameter record
//! from standard input, runs the simulation, and writes the first-passage
//! times to a tag-derived destination.

use std::io;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use passage_mc::mc::{EngineConfig, MonteCarloEngine};

use crate::input::{self, RateParameterisation};
use crate::{output, Result};

/// Run the legacy stdin-driven command
pub fn run(
    parameterisation: &str,
    output_dir: &str,
    seed: Option<u64>,
    progress_every: usize,
) -> Result<()> {
    let scheme = RateParameterisation::from_flag(parameterisation)?;
    let legacy = input::read_legacy(io::stdin().lock(), scheme)?;

    info!(
        "r1 = {} r2 = {} p = {} runs = {}",
        legacy.parameters.reset_rate_positive,
        legacy.parameters.reset_rate_negative,
        legacy.probability_label,
        legacy.trial_count
    );
    info!("dt = {}", legacy.parameters.time_step);

    let mut builder = EngineConfig::builder().trial_count(legacy.trial_count);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;
    let mut engine = MonteCarloEngine::new(config)?;

    let started = Instant::now();
    let times = engine.run_with_progress(&legacy.parameters, progress_every, |completed| {
        info!("{} trials completed", completed);
    })?;

    let path = output::results_path(
        Path::new(output_dir),
        legacy.probability_label,
        legacy.file_tag,
    );
    output::write_passage_times(&path, times.as_slice())?;
    info!(
        "wrote {} first-passage times to {}",
        times.len(),
        path.display()
    );
    info!("time measured: {:.3}s", started.elapsed().as_secs_f64());

    Ok(())
}
