//! Physical parameters of the resetting-diffusion process.
//!
//! The process is a one-dimensional overdamped Brownian particle that, at
//! each discrete step, either resets instantaneously to the origin (with a
//! probability set by the resetting rate on its current side of the origin)
//! or takes an Euler-Maruyama diffusion step. A trial ends when the
//! particle crosses its absorbing target at `±target_distance`.

use serde::{Deserialize, Serialize};

use super::ParameterError;

/// Behaviour of the process on the negative half-line.
///
/// The default is a stochastic resetting hazard at
/// [`reset_rate_negative`](SimulationParameters::reset_rate_negative). The
/// `InstantReset` variant replaces the hazard with an unconditional return
/// to the origin on any step that starts below it, which is the limit of an
/// infinite negative-side rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NegativeBoundary {
    /// Stochastic resetting at the negative-side rate.
    #[default]
    Hazard,

    /// Unconditional reset to the origin while below it.
    ///
    /// No random draw is consumed on such a step; the negative-side rate is
    /// ignored under this mode.
    InstantReset,
}

/// Physical parameter set for one simulation run.
///
/// All fields are plain values; run-shape settings (trial count, seed, step
/// cap) live in the engine configuration, not here.
///
/// # Invariants
///
/// - Both resetting rates are finite and non-negative
/// - `target_probability` lies in `[0, 1]`
/// - `diffusion_constant`, `target_distance` and `time_step` are finite and
///   strictly positive
///
/// Use [`validate`](Self::validate) to check the invariants; the simulation
/// engine assumes a validated set.
///
/// # Examples
///
/// ```rust
/// use passage_core::types::SimulationParameters;
///
/// let params = SimulationParameters {
///     reset_rate_positive: 2.0,
///     reset_rate_negative: 0.5,
///     target_probability: 0.5,
///     ..SimulationParameters::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Resetting rate per unit time while the position is non-negative.
    pub reset_rate_positive: f64,
    /// Resetting rate per unit time while the position is negative.
    pub reset_rate_negative: f64,
    /// Probability that a trial's absorbing target sits on the positive side.
    pub target_probability: f64,
    /// Diffusion constant (D).
    pub diffusion_constant: f64,
    /// Absolute distance from the origin to either target.
    pub target_distance: f64,
    /// Discretisation interval (dt).
    pub time_step: f64,
    /// Behaviour on the negative half-line.
    pub negative_boundary: NegativeBoundary,
}

impl SimulationParameters {
    /// Creates a parameter set with the given rates and target probability,
    /// keeping the default diffusion constant, target distance and time
    /// step.
    ///
    /// # Arguments
    ///
    /// * `reset_rate_positive` - Resetting rate on the positive half-line
    /// * `reset_rate_negative` - Resetting rate on the negative half-line
    /// * `target_probability` - Probability of a positive-side target
    #[inline]
    pub fn with_rates(
        reset_rate_positive: f64,
        reset_rate_negative: f64,
        target_probability: f64,
    ) -> Self {
        Self {
            reset_rate_positive,
            reset_rate_negative,
            target_probability,
            ..Self::default()
        }
    }

    /// Creates the rate-free single-sided parameter set: zero resetting
    /// rates, an instant-reset wall below the origin, and the given target
    /// probability.
    #[inline]
    pub fn single_sided(target_probability: f64) -> Self {
        Self {
            reset_rate_positive: 0.0,
            reset_rate_negative: 0.0,
            target_probability,
            negative_boundary: NegativeBoundary::InstantReset,
            ..Self::default()
        }
    }

    /// Per-step resetting probability on the positive side, `r1 * dt`.
    ///
    /// Valid as a hazard approximation only while `r1 * dt` is small; the
    /// simulator deliberately performs no clamping when it is not.
    #[inline]
    pub fn reset_probability_positive(&self) -> f64 {
        self.reset_rate_positive * self.time_step
    }

    /// Per-step resetting probability on the negative side, `r2 * dt`.
    #[inline]
    pub fn reset_probability_negative(&self) -> f64 {
        self.reset_rate_negative * self.time_step
    }

    /// Amplitude of the per-step Gaussian increment, `sqrt(2 * D * dt)`.
    #[inline]
    pub fn noise_amplitude(&self) -> f64 {
        (2.0 * self.diffusion_constant * self.time_step).sqrt()
    }

    /// Validates the parameter invariants.
    ///
    /// # Errors
    ///
    /// Returns the [`ParameterError`] for the first violated invariant.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.reset_rate_positive.is_finite() || self.reset_rate_positive < 0.0 {
            return Err(ParameterError::InvalidResetRate {
                side: "positive",
                value: self.reset_rate_positive,
            });
        }
        if !self.reset_rate_negative.is_finite() || self.reset_rate_negative < 0.0 {
            return Err(ParameterError::InvalidResetRate {
                side: "negative",
                value: self.reset_rate_negative,
            });
        }
        if !self.target_probability.is_finite()
            || !(0.0..=1.0).contains(&self.target_probability)
        {
            return Err(ParameterError::InvalidTargetProbability(
                self.target_probability,
            ));
        }
        if !self.diffusion_constant.is_finite() || self.diffusion_constant <= 0.0 {
            return Err(ParameterError::InvalidDiffusionConstant(
                self.diffusion_constant,
            ));
        }
        if !self.target_distance.is_finite() || self.target_distance <= 0.0 {
            return Err(ParameterError::InvalidTargetDistance(self.target_distance));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ParameterError::InvalidTimeStep(self.time_step));
        }
        Ok(())
    }
}

impl Default for SimulationParameters {
    /// Defaults mirror the reference study: unit diffusion constant, unit
    /// target distance, `dt = 1e-5`, symmetric target, no resetting.
    fn default() -> Self {
        Self {
            reset_rate_positive: 0.0,
            reset_rate_negative: 0.0,
            target_probability: 0.5,
            diffusion_constant: 1.0,
            target_distance: 1.0,
            time_step: 1e-5,
            negative_boundary: NegativeBoundary::Hazard,
        }
    }
}
