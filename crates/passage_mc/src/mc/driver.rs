//! Monte Carlo driver.
//!
//! This module provides the orchestration layer of the engine: the
//! [`MonteCarloEngine`] repeats the single-trial simulator for the
//! configured trial count, accumulating one first-passage time per trial
//! into a [`PassageTimes`] sequence.
//!
//! # Randomness
//!
//! The engine owns a single [`SimRng`] seeded from the configuration
//! (seed 0 when unset). Its state advances monotonically across the whole
//! run and is never reset per trial: the full sequence is reproducible for
//! a fixed seed, individual trials are not reproducible in isolation.

use passage_core::types::SimulationParameters;

use super::config::EngineConfig;
use super::error::{ConfigError, SimulationError};
use super::result::PassageTimes;
use super::trial::{run_trial, run_trial_capped, StepKernel, TrialOutcome};
use crate::rng::SimRng;

/// Monte Carlo first-passage engine.
///
/// Owns the run-shape configuration and the random number generator;
/// invoke [`run`](Self::run) with a validated parameter set to produce a
/// result sequence.
///
/// # Examples
///
/// ```rust
/// use passage_core::types::SimulationParameters;
/// use passage_mc::mc::{EngineConfig, MonteCarloEngine};
///
/// let config = EngineConfig::builder()
///     .trial_count(200)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut engine = MonteCarloEngine::new(config).unwrap();
///
/// let params = SimulationParameters {
///     reset_rate_positive: 4.0,
///     reset_rate_negative: 4.0,
///     time_step: 1e-2,
///     target_distance: 0.5,
///     ..SimulationParameters::default()
/// };
/// let times = engine.run(&params).unwrap();
/// assert_eq!(times.len(), 200);
/// ```
pub struct MonteCarloEngine {
    config: EngineConfig,
    rng: SimRng,
}

impl MonteCarloEngine {
    /// Creates a new engine with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed().unwrap_or(0);
        Ok(Self {
            config,
            rng: SimRng::from_seed(seed),
        })
    }

    /// Creates a new engine with a specific seed, overriding the config
    /// seed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            rng: SimRng::from_seed(seed),
        })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reseeds the generator for a reproducible rerun.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = SimRng::from_seed(seed);
    }

    /// Runs the configured number of trials and collects their
    /// first-passage times in execution order.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if the parameters fail validation, or if
    /// a step cap is configured and a trial exhausts it.
    pub fn run(
        &mut self,
        params: &SimulationParameters,
    ) -> Result<PassageTimes, SimulationError> {
        self.run_with_progress(params, 0, |_| {})
    }

    /// Runs the configured number of trials, invoking `callback` with the
    /// completed-trial count every `interval` trials.
    ///
    /// An `interval` of zero disables the callback. Progress reporting is
    /// a non-semantic side effect; it does not perturb the draw order.
    ///
    /// # Errors
    ///
    /// As for [`run`](Self::run).
    pub fn run_with_progress<F>(
        &mut self,
        params: &SimulationParameters,
        interval: usize,
        mut callback: F,
    ) -> Result<PassageTimes, SimulationError>
    where
        F: FnMut(usize),
    {
        params.validate()?;

        let kernel = StepKernel::new(params);
        let trial_count = self.config.trial_count();
        let mut times = Vec::with_capacity(trial_count);

        for trial in 0..trial_count {
            let fpt = match self.config.max_steps_per_trial() {
                Some(cap) => match run_trial_capped(&kernel, &mut self.rng, cap) {
                    TrialOutcome::Absorbed(fpt) => fpt,
                    TrialOutcome::DidNotAbsorb { steps } => {
                        return Err(SimulationError::TrialDidNotAbsorb { trial, steps });
                    }
                },
                None => run_trial(&kernel, &mut self.rng),
            };
            times.push(fpt);

            let completed = trial + 1;
            if interval > 0 && completed % interval == 0 {
                callback(completed);
            }
        }

        Ok(PassageTimes::from(times))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passage_core::types::NegativeBoundary;

    /// Fast-absorbing parameters for unit tests.
    fn fast_params() -> SimulationParameters {
        SimulationParameters {
            reset_rate_positive: 2.0,
            reset_rate_negative: 2.0,
            target_probability: 0.5,
            diffusion_constant: 1.0,
            target_distance: 0.5,
            time_step: 1e-2,
            negative_boundary: NegativeBoundary::Hazard,
        }
    }

    fn engine(trials: usize, seed: u64) -> MonteCarloEngine {
        let config = EngineConfig::builder()
            .trial_count(trials)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloEngine::new(config).unwrap()
    }

    #[test]
    fn test_result_length_matches_trial_count() {
        let mut engine = engine(250, 42);
        let times = engine.run(&fast_params()).unwrap();
        assert_eq!(times.len(), 250);
    }

    #[test]
    fn test_all_times_positive_step_multiples() {
        let params = fast_params();
        let mut engine = engine(200, 7);
        let times = engine.run(&params).unwrap();
        for &fpt in times.as_slice() {
            assert!(fpt > 0.0);
            let steps = fpt / params.time_step;
            assert!(
                (steps - steps.round()).abs() < 1e-6,
                "fpt {} is not a step multiple",
                fpt
            );
        }
    }

    #[test]
    fn test_same_seed_reproduces_sequence() {
        let params = fast_params();
        let times1 = engine(100, 42).run(&params).unwrap();
        let times2 = engine(100, 42).run(&params).unwrap();
        assert_eq!(times1, times2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let params = fast_params();
        let times1 = engine(100, 1).run(&params).unwrap();
        let times2 = engine(100, 2).run(&params).unwrap();
        assert_ne!(times1, times2);
    }

    #[test]
    fn test_with_seed_overrides_config_seed() {
        let params = fast_params();
        let config = EngineConfig::builder()
            .trial_count(50)
            .seed(1)
            .build()
            .unwrap();
        let times1 = MonteCarloEngine::with_seed(config, 42)
            .unwrap()
            .run(&params)
            .unwrap();
        let times2 = engine(50, 42).run(&params).unwrap();
        assert_eq!(times1, times2);
    }

    #[test]
    fn test_reset_with_seed_reproduces() {
        let params = fast_params();
        let mut eng = engine(50, 42);
        let first = eng.run(&params).unwrap();
        eng.reset_with_seed(42);
        let second = eng.run(&params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_trials_yields_empty_sequence() {
        let mut eng = engine(0, 42);
        let times = eng.run(&fast_params()).unwrap();
        assert!(times.is_empty());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = SimulationParameters {
            time_step: -1.0,
            ..fast_params()
        };
        let mut eng = engine(10, 42);
        assert!(matches!(
            eng.run(&params),
            Err(SimulationError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_progress_callback_intervals() {
        let mut eng = engine(100, 42);
        let mut reported = Vec::new();
        eng.run_with_progress(&fast_params(), 25, |completed| reported.push(completed))
            .unwrap();
        assert_eq!(reported, vec![25, 50, 75, 100]);
    }

    #[test]
    fn test_capped_run_reports_failing_trial() {
        // Saturated hazard: rate * dt = 10, every step resets.
        let params = SimulationParameters {
            reset_rate_positive: 1e3,
            reset_rate_negative: 1e3,
            ..fast_params()
        };
        let config = EngineConfig::builder()
            .trial_count(5)
            .seed(42)
            .max_steps_per_trial(1000)
            .build()
            .unwrap();
        let mut eng = MonteCarloEngine::new(config).unwrap();

        assert_eq!(
            eng.run(&params),
            Err(SimulationError::TrialDidNotAbsorb {
                trial: 0,
                steps: 1000,
            })
        );
    }

    #[test]
    fn test_capped_run_succeeds_with_generous_cap() {
        let config = EngineConfig::builder()
            .trial_count(50)
            .seed(42)
            .max_steps_per_trial(10_000_000)
            .build()
            .unwrap();
        let mut eng = MonteCarloEngine::new(config).unwrap();
        let times = eng.run(&fast_params()).unwrap();
        assert_eq!(times.len(), 50);
    }
}
