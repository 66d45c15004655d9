//! # passage_core: Parameter Model for First-Passage Simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! passage_core is the bottom layer of the workspace, providing:
//! - The physical parameter set for the resetting-diffusion process
//!   (`types::parameters`)
//! - Structured validation errors (`types::error`)
//! - Closed-form mean first-passage references used by tests and
//!   diagnostics (`analytical`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other passage_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured validation errors
//! - serde: Serialisation support for parameter echoing
//!
//! ## Usage Example
//!
//! ```rust
//! use passage_core::analytical::mean_fpt_reflected;
//! use passage_core::types::SimulationParameters;
//!
//! let params = SimulationParameters::default();
//! assert!(params.validate().is_ok());
//!
//! // Mean first-passage time of reflected diffusion to a unit target
//! let reference = mean_fpt_reflected(1.0_f64, 1.0_f64);
//! assert!((reference - 0.5).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod types;

pub use types::{NegativeBoundary, ParameterError, SimulationParameters};
