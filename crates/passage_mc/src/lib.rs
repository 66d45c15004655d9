//! # Passage Engine (Layer 2: Monte Carlo Kernel)
//!
//! ## Layer 2 Role
//!
//! passage_mc is the simulation engine of the workspace:
//! - Seeded random number generation (`rng`)
//! - The single-trial first-passage simulator and the Monte Carlo driver
//!   (`mc`)
//!
//! The process being simulated is a one-dimensional overdamped Brownian
//! particle with state-dependent stochastic resetting to the origin and a
//! two-sided absorbing target; each trial yields one first-passage time.
//!
//! ## Usage Example
//!
//! ```rust
//! use passage_core::types::SimulationParameters;
//! use passage_mc::mc::{EngineConfig, MonteCarloEngine};
//!
//! let config = EngineConfig::builder()
//!     .trial_count(100)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut engine = MonteCarloEngine::new(config).unwrap();
//!
//! let params = SimulationParameters {
//!     reset_rate_positive: 2.0,
//!     reset_rate_negative: 2.0,
//!     time_step: 1e-3,
//!     ..SimulationParameters::default()
//! };
//!
//! let times = engine.run(&params).unwrap();
//! assert_eq!(times.len(), 100);
//! ```
//!
//! ## Determinism
//!
//! All randomness flows through a single engine-owned generator whose
//! state advances monotonically across the run. Identical seed and
//! parameters reproduce the result sequence exactly; individual trials are
//! not reproducible in isolation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{
    EngineConfig, EngineConfigBuilder, MonteCarloEngine, PassageSummary, PassageTimes,
    SimulationError,
};
pub use rng::{NoiseSource, SimRng};
