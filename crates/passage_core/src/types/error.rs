//! Error types for parameter validation.
//!
//! This module provides `ParameterError`, one variant per violated
//! invariant of [`SimulationParameters`](super::SimulationParameters),
//! with the offending value embedded for diagnostics.

use thiserror::Error;

/// Validation error for the physical parameter set.
///
/// Each variant corresponds to one invariant of
/// [`SimulationParameters`](super::SimulationParameters) and carries the
/// rejected value.
///
/// # Examples
/// ```
/// use passage_core::types::ParameterError;
///
/// let err = ParameterError::InvalidTargetProbability(1.5);
/// assert!(format!("{}", err).contains("1.5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Resetting rate is negative or non-finite.
    #[error("Invalid {side} resetting rate {value}: must be finite and non-negative")]
    InvalidResetRate {
        /// Which half-line the rate applies to ("positive" or "negative").
        side: &'static str,
        /// The rejected rate.
        value: f64,
    },

    /// Target-side probability outside `[0, 1]`.
    #[error("Invalid target probability {0}: must lie in [0, 1]")]
    InvalidTargetProbability(f64),

    /// Diffusion constant is not strictly positive and finite.
    #[error("Invalid diffusion constant {0}: must be finite and positive")]
    InvalidDiffusionConstant(f64),

    /// Target distance is not strictly positive and finite.
    #[error("Invalid target distance {0}: must be finite and positive")]
    InvalidTargetDistance(f64),

    /// Time step is not strictly positive and finite.
    #[error("Invalid time step {0}: must be finite and positive")]
    InvalidTimeStep(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_rate_display() {
        let err = ParameterError::InvalidResetRate {
            side: "positive",
            value: -2.0,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid positive resetting rate -2: must be finite and non-negative"
        );
    }

    #[test]
    fn test_target_probability_display() {
        let err = ParameterError::InvalidTargetProbability(-0.25);
        assert!(format!("{}", err).contains("[0, 1]"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ParameterError::InvalidTimeStep(0.0);
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = ParameterError::InvalidTargetDistance(0.0);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
