//! Monte Carlo first-passage kernel.
//!
//! This module provides the simulation infrastructure for estimating
//! first-passage-time distributions of resetting diffusion.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── EngineConfig   (trial count, seed, optional step cap)
//! ├── SimRng         (seeded random number generation)
//! └── Orchestration
//!     ├── StepKernel       (precomputed stepping constants)
//!     ├── run_trial()      (one trial, one first-passage time)
//!     └── PassageTimes     (result sequence + summary statistics)
//! ```
//!
//! # Execution Model
//!
//! The whole run is one single-threaded sequential computation with no
//! I/O inside the hot loop; memory is bounded by the result sequence.
//! A trial with statistically unreachable absorption loops indefinitely
//! unless a step cap is configured; this is a property of the model,
//! documented rather than silently capped.
//!
//! # Examples
//!
//! ```rust
//! use passage_core::types::SimulationParameters;
//! use passage_mc::mc::{EngineConfig, MonteCarloEngine};
//!
//! let config = EngineConfig::builder()
//!     .trial_count(500)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let mut engine = MonteCarloEngine::new(config).unwrap();
//!
//! let params = SimulationParameters {
//!     reset_rate_positive: 4.0,
//!     reset_rate_negative: 1.0,
//!     target_probability: 0.5,
//!     time_step: 1e-3,
//!     ..SimulationParameters::default()
//! };
//!
//! let times = engine.run(&params).unwrap();
//! let summary = times.summary();
//! println!("mean FPT: {:.4} +/- {:.4}", summary.mean, summary.std_error);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod result;
pub mod trial;

// Re-exports for convenient access
pub use config::{EngineConfig, EngineConfigBuilder, MAX_TRIALS};
pub use driver::MonteCarloEngine;
pub use error::{ConfigError, SimulationError};
pub use result::{PassageSummary, PassageTimes};
pub use trial::{run_trial, run_trial_capped, StepKernel, TrialOutcome, TrialState};
