//! Single-trial first-passage simulation.
//!
//! This module implements the discretised diffusion-with-resetting process:
//! per step the particle either resets to the origin (hazard probability
//! `rate * dt`, rate chosen by the sign of the position) or takes an
//! Euler-Maruyama diffusion step of amplitude `sqrt(2 * D * dt)`. A trial
//! ends when the position crosses the trial's absorbing target.
//!
//! # Draw Order
//!
//! Per trial: one uniform for the target-side draw. Per hazard step: one
//! uniform for the resetting test (drawn before any branch-specific work),
//! plus one standard normal only when the step diffuses. Instant-wall steps
//! below the origin draw nothing. Resetting and diffusion are mutually
//! exclusive outcomes of a step, never additive.
//!
//! # Numerical Semantics
//!
//! `rate * dt` is a first-order hazard approximation, valid while
//! `rate * dt` is small. No clamping is performed: when `rate * dt >= 1`
//! the comparison against a uniform in `[0, 1)` always triggers and the
//! particle resets on every hazard step. That edge condition is part of
//! the model, not an error.

use passage_core::types::{NegativeBoundary, SimulationParameters};

use crate::rng::NoiseSource;

/// Precomputed per-run stepping constants.
///
/// Built once from a validated [`SimulationParameters`] before the trial
/// loop; immutable for the duration of a run.
///
/// # Examples
///
/// ```rust
/// use passage_core::types::SimulationParameters;
/// use passage_mc::mc::{run_trial, StepKernel};
/// use passage_mc::rng::SimRng;
///
/// let params = SimulationParameters {
///     reset_rate_positive: 2.0,
///     reset_rate_negative: 2.0,
///     time_step: 1e-3,
///     ..SimulationParameters::default()
/// };
/// let kernel = StepKernel::new(&params);
/// let mut rng = SimRng::from_seed(42);
/// let fpt = run_trial(&kernel, &mut rng);
/// assert!(fpt > 0.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StepKernel {
    /// Per-step resetting probability while non-negative (`r1 * dt`).
    reset_prob_positive: f64,
    /// Per-step resetting probability while negative (`r2 * dt`).
    reset_prob_negative: f64,
    /// Gaussian increment amplitude, `sqrt(2 * D * dt)`.
    noise_amplitude: f64,
    /// Absolute distance from the origin to either target.
    target_distance: f64,
    /// Probability of a positive-side target.
    target_probability: f64,
    /// Discretisation interval.
    time_step: f64,
    /// Behaviour on the negative half-line.
    negative_boundary: NegativeBoundary,
}

impl StepKernel {
    /// Precomputes the stepping constants for a parameter set.
    ///
    /// The parameters are assumed validated; see
    /// [`SimulationParameters::validate`].
    pub fn new(params: &SimulationParameters) -> Self {
        Self {
            reset_prob_positive: params.reset_probability_positive(),
            reset_prob_negative: params.reset_probability_negative(),
            noise_amplitude: params.noise_amplitude(),
            target_distance: params.target_distance,
            target_probability: params.target_probability,
            time_step: params.time_step,
            negative_boundary: params.negative_boundary,
        }
    }

    /// Returns the discretisation interval.
    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Returns the target distance.
    #[inline]
    pub fn target_distance(&self) -> f64 {
        self.target_distance
    }

    /// Advances the state by one step.
    ///
    /// Elapsed time advances by one interval regardless of which branch
    /// was taken.
    #[inline]
    fn step<R: NoiseSource>(&self, state: &mut TrialState, rng: &mut R) {
        if self.negative_boundary == NegativeBoundary::InstantReset && state.position < 0.0 {
            // Wall: unconditional return to the origin, no draw consumed.
            state.position = 0.0;
        } else {
            let reset_prob = if state.position >= 0.0 {
                self.reset_prob_positive
            } else {
                self.reset_prob_negative
            };
            let u = rng.gen_uniform();
            if reset_prob >= u {
                state.position = 0.0;
            } else {
                state.position += self.noise_amplitude * rng.gen_normal();
            }
        }
        state.elapsed += self.time_step;
    }
}

/// Mutable state of one trial.
///
/// Created at the origin when the trial begins; only
/// [`elapsed`](Self::elapsed) survives absorption, as the recorded
/// first-passage time.
#[derive(Clone, Copy, Debug)]
pub struct TrialState {
    /// Current position of the particle.
    pub position: f64,
    /// Elapsed simulated time.
    pub elapsed: f64,
    /// Side of the trial's absorbing target, `+1.0` or `-1.0`.
    pub target_sign: f64,
}

impl TrialState {
    /// Starts a trial: draws the target side and places the particle at
    /// the origin.
    #[inline]
    pub fn begin<R: NoiseSource>(kernel: &StepKernel, rng: &mut R) -> Self {
        let target_sign = if rng.gen_uniform() <= kernel.target_probability {
            1.0
        } else {
            -1.0
        };
        Self {
            position: 0.0,
            elapsed: 0.0,
            target_sign,
        }
    }

    /// Whether the particle has reached or crossed its target.
    #[inline]
    pub fn absorbed(&self, kernel: &StepKernel) -> bool {
        self.target_sign * self.position >= kernel.target_distance
    }
}

/// Outcome of a step-capped trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrialOutcome {
    /// The trial absorbed; carries the first-passage time.
    Absorbed(f64),
    /// The step cap was exhausted before absorption.
    DidNotAbsorb {
        /// The exhausted step cap.
        steps: u64,
    },
}

/// Runs one trial to absorption and returns its first-passage time.
///
/// The inner loop has no iteration cap: under pathological parameters
/// (for example a hazard so strong the particle is pinned at the origin)
/// absorption can be statistically unreachable and the loop runs
/// indefinitely. Use [`run_trial_capped`] to bound a trial instead.
pub fn run_trial<R: NoiseSource>(kernel: &StepKernel, rng: &mut R) -> f64 {
    let mut state = TrialState::begin(kernel, rng);
    while !state.absorbed(kernel) {
        kernel.step(&mut state, rng);
    }
    state.elapsed
}

/// Runs one trial with a step cap.
///
/// Identical stepping to [`run_trial`], but gives up after `max_steps`
/// steps and reports [`TrialOutcome::DidNotAbsorb`] instead of looping
/// forever.
pub fn run_trial_capped<R: NoiseSource>(
    kernel: &StepKernel,
    rng: &mut R,
    max_steps: u64,
) -> TrialOutcome {
    let mut state = TrialState::begin(kernel, rng);
    let mut steps = 0;
    while !state.absorbed(kernel) {
        if steps == max_steps {
            return TrialOutcome::DidNotAbsorb { steps };
        }
        kernel.step(&mut state, rng);
        steps += 1;
    }
    TrialOutcome::Absorbed(state.elapsed)
}
