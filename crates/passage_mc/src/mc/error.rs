//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for engine configuration
//! validation and for runtime failures of a simulation run.

use std::fmt;

use passage_core::types::ParameterError;

/// Configuration error for the Monte Carlo engine.
///
/// These errors occur during construction when invalid settings are
/// provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Trial count above the supported maximum.
    InvalidTrialCount(usize),
    /// Invalid setting with name and description.
    InvalidParameter {
        /// Setting name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTrialCount(count) => {
                write!(
                    f,
                    "Invalid trial count {}: must be at most {}",
                    count,
                    super::config::MAX_TRIALS
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid setting '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime error for a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// The physical parameter set failed validation.
    InvalidParameters(ParameterError),
    /// A trial exceeded the configured step cap without absorbing.
    ///
    /// Only produced when
    /// [`max_steps_per_trial`](super::EngineConfig::max_steps_per_trial)
    /// is set; without a cap a non-absorbing trial loops indefinitely by
    /// design.
    TrialDidNotAbsorb {
        /// Index of the failed trial in execution order.
        trial: usize,
        /// Step cap that was exhausted.
        steps: u64,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters(err) => write!(f, "Invalid parameters: {}", err),
            Self::TrialDidNotAbsorb { trial, steps } => {
                write!(
                    f,
                    "Trial {} did not absorb within {} steps",
                    trial, steps
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidParameters(err) => Some(err),
            Self::TrialDidNotAbsorb { .. } => None,
        }
    }
}

impl From<ParameterError> for SimulationError {
    fn from(err: ParameterError) -> Self {
        Self::InvalidParameters(err)
    }
}
