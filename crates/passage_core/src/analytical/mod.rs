//! Closed-form first-passage references.
//!
//! Exact mean first-passage times are known for two limits of the simulated
//! process; the Monte Carlo tests compare empirical means against them.
//!
//! # Available Solutions
//!
//! - [`mean_fpt_reflected`]: diffusion on `[0, a]`, reflecting at the
//!   origin, absorbing at `a`
//! - [`mean_fpt_resetting`]: free diffusion with Poissonian resetting to
//!   the origin and an absorbing target at distance `a`
//! - [`optimal_reset_rate`]: the rate minimising the resetting mean
//!   first-passage time

mod fpt;

pub use fpt::{mean_fpt_reflected, mean_fpt_resetting, optimal_reset_rate};
