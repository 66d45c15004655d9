//! Check command implementation
//!
//! Echoes effective defaults and engine limits.

use passage_core::types::SimulationParameters;
use passage_mc::mc::MAX_TRIALS;

use crate::Result;

/// Run the check command
pub fn run() -> Result<()> {
    let defaults = SimulationParameters::default();

    println!("passage {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("default diffusion constant   {}", defaults.diffusion_constant);
    println!("default target distance      {}", defaults.target_distance);
    println!("default time step            {}", defaults.time_step);
    println!("default target probability   {}", defaults.target_probability);
    println!("maximum trials per run       {}", MAX_TRIALS);

    Ok(())
}
