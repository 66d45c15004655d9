//! Monte Carlo engine configuration.
//!
//! This module provides the run-shape configuration for the engine: trial
//! count, seed, and the optional per-trial step cap. The physical
//! parameters of the process live in
//! [`passage_core::types::SimulationParameters`].

use super::error::ConfigError;

/// Maximum number of trials allowed per run.
pub const MAX_TRIALS: usize = 100_000_000;

/// Monte Carlo engine configuration.
///
/// Immutable run-shape settings. Use [`EngineConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use passage_mc::mc::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .trial_count(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.trial_count(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Number of independent trials.
    trial_count: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Optional per-trial step cap.
    max_steps_per_trial: Option<u64>,
}

impl EngineConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Returns the number of trials.
    ///
    /// A zero trial count is permitted and yields an empty result
    /// sequence.
    #[inline]
    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the optional per-trial step cap.
    ///
    /// When `None`, a trial that never satisfies its absorption condition
    /// loops indefinitely; see the crate documentation on the inherited
    /// non-termination risk.
    #[inline]
    pub fn max_steps_per_trial(&self) -> Option<u64> {
        self.max_steps_per_trial
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `trial_count` exceeds [`MAX_TRIALS`] or a
    /// zero step cap was requested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trial_count > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.trial_count));
        }
        if self.max_steps_per_trial == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_steps_per_trial",
                value: "must be positive when set".to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`EngineConfig`].
///
/// # Examples
///
/// ```rust
/// use passage_mc::mc::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .trial_count(50_000)
///     .seed(12345)
///     .max_steps_per_trial(10_000_000)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineConfigBuilder {
    trial_count: Option<usize>,
    seed: Option<u64>,
    max_steps_per_trial: Option<u64>,
}

impl EngineConfigBuilder {
    /// Sets the number of trials.
    #[inline]
    pub fn trial_count(mut self, trial_count: usize) -> Self {
        self.trial_count = Some(trial_count);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the per-trial step cap.
    ///
    /// A trial that reaches the cap without absorbing surfaces
    /// [`SimulationError::TrialDidNotAbsorb`](super::SimulationError::TrialDidNotAbsorb)
    /// instead of looping forever.
    #[inline]
    pub fn max_steps_per_trial(mut self, max_steps: u64) -> Self {
        self.max_steps_per_trial = Some(max_steps);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `trial_count` was not set or any setting
    /// is invalid.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let trial_count = self.trial_count.ok_or(ConfigError::InvalidParameter {
            name: "trial_count",
            value: "must be specified".to_string(),
        })?;

        let config = EngineConfig {
            trial_count,
            seed: self.seed,
            max_steps_per_trial: self.max_steps_per_trial,
        };

        config.validate()?;
        Ok(config)
    }
}
