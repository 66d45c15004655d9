//! CLI error type.
//!
//! Wraps the layer errors of the engine crates plus the parse and I/O
//! failures that can only occur at the service boundary.

use thiserror::Error;

use passage_core::types::ParameterError;
use passage_mc::mc::{ConfigError, SimulationError};

/// Errors surfaced by the `passage` binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// Standard input ended before all ordered parameters were read.
    #[error("missing parameter '{0}' on standard input")]
    MissingParameter(&'static str),

    /// An ordered parameter failed numeric parsing.
    #[error("malformed value for '{field}': {value}")]
    MalformedNumber {
        /// Name of the parameter being parsed.
        field: &'static str,
        /// The offending token.
        value: String,
    },

    /// An unsupported command-line argument value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The assembled physical parameters failed validation.
    #[error("invalid simulation parameters: {0}")]
    Parameters(#[from] ParameterError),

    /// The engine configuration failed validation.
    #[error("invalid engine configuration: {0}")]
    Config(#[from] ConfigError),

    /// The simulation run failed.
    #[error("simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    /// File or stream I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Summary serialisation failed.
    #[error("serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
