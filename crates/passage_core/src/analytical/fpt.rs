//! Mean first-passage times of diffusion with and without resetting.
//!
//! # Mathematical Background
//!
//! For free diffusion started at the origin with an absorbing boundary at
//! distance `a` and a reflecting boundary at the origin, the mean
//! first-passage time is
//!
//! ```text
//! <T> = a² / (2D)
//! ```
//!
//! For free diffusion on the line with Poissonian resetting to the origin
//! at rate `r` and an absorbing target at distance `a`, the mean
//! first-passage time is finite for every `r > 0`:
//!
//! ```text
//! <T>(r) = (exp(a·sqrt(r/D)) − 1) / r
//! ```
//!
//! and is minimised at a rate `r*` fixed by the transcendental condition
//! `z/2 = 1 − exp(−z)` with `z = a·sqrt(r/D)`.
//!
//! # References
//!
//! - Evans, M. R. and Majumdar, S. N. (2011). "Diffusion with Stochastic
//!   Resetting." Physical Review Letters, 106, 160601.
//! - Redner, S. (2001). "A Guide to First-Passage Processes." Cambridge
//!   University Press.

use num_traits::Float;

/// Root of `z/2 = 1 − exp(−z)`, the dimensionless optimal resetting rate.
const OPTIMAL_Z: f64 = 1.593_624_260_040_04;

/// Mean first-passage time of reflected diffusion to an absorbing boundary.
///
/// Diffusion on `[0, a]` with a reflecting boundary at the origin and an
/// absorbing boundary at `a`, started at the origin: `<T> = a² / (2D)`.
///
/// # Arguments
///
/// * `target_distance` - Distance `a` from the origin to the absorbing boundary
/// * `diffusion` - Diffusion constant `D`
///
/// # Examples
///
/// ```rust
/// use passage_core::analytical::mean_fpt_reflected;
///
/// let t = mean_fpt_reflected(1.0_f64, 1.0_f64);
/// assert!((t - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn mean_fpt_reflected<T: Float>(target_distance: T, diffusion: T) -> T {
    target_distance * target_distance / (T::from(2.0).unwrap() * diffusion)
}

/// Mean first-passage time of resetting diffusion to an absorbing target.
///
/// Free diffusion on the line, resetting to the origin at rate `r`,
/// absorbing target at distance `a` (Evans-Majumdar 2011):
/// `<T>(r) = (exp(a·sqrt(r/D)) − 1) / r`.
///
/// The expression diverges as `r → 0` (free diffusion to a single point has
/// infinite mean first-passage time) and as `r → ∞` (the particle is pinned
/// at the origin); callers must pass `r > 0`.
///
/// # Arguments
///
/// * `reset_rate` - Resetting rate `r`, strictly positive
/// * `target_distance` - Distance `a` from the origin to the target
/// * `diffusion` - Diffusion constant `D`
#[inline]
pub fn mean_fpt_resetting<T: Float>(reset_rate: T, target_distance: T, diffusion: T) -> T {
    let z = target_distance * (reset_rate / diffusion).sqrt();
    (z.exp() - T::one()) / reset_rate
}

/// Resetting rate minimising the mean first-passage time.
///
/// `r* = D·z*² / a²` with `z* ≈ 1.5936` the root of `z/2 = 1 − exp(−z)`.
///
/// # Arguments
///
/// * `target_distance` - Distance `a` from the origin to the target
/// * `diffusion` - Diffusion constant `D`
#[inline]
pub fn optimal_reset_rate<T: Float>(target_distance: T, diffusion: T) -> T {
    let z = T::from(OPTIMAL_Z).unwrap();
    diffusion * z * z / (target_distance * target_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reflected_unit_case() {
        assert_relative_eq!(mean_fpt_reflected(1.0, 1.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_reflected_scales_quadratically_in_distance() {
        let near = mean_fpt_reflected(1.0, 1.0);
        let far = mean_fpt_reflected(2.0, 1.0);
        assert_relative_eq!(far, 4.0 * near, epsilon = 1e-12);
    }

    #[test]
    fn test_resetting_unit_case() {
        // r = D = a = 1: <T> = e - 1
        let t = mean_fpt_resetting(1.0, 1.0, 1.0);
        assert_relative_eq!(t, std::f64::consts::E - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_resetting_faster_diffusion_is_faster() {
        let slow = mean_fpt_resetting(1.0, 1.0, 1.0);
        let fast = mean_fpt_resetting(1.0, 1.0, 4.0);
        assert!(fast < slow);
    }

    #[test]
    fn test_optimal_rate_is_a_minimum() {
        let a = 1.0;
        let d = 1.0;
        let r_star = optimal_reset_rate(a, d);
        let at_optimum = mean_fpt_resetting(r_star, a, d);
        assert!(at_optimum < mean_fpt_resetting(r_star * 0.8, a, d));
        assert!(at_optimum < mean_fpt_resetting(r_star * 1.2, a, d));
    }

    #[test]
    fn test_optimal_z_satisfies_transcendental_condition() {
        let z = OPTIMAL_Z;
        assert_relative_eq!(z / 2.0, 1.0 - (-z).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_generic_over_f32() {
        let t: f32 = mean_fpt_reflected(1.0_f32, 1.0_f32);
        assert!((t - 0.5).abs() < 1e-6);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn positive_strategy() -> impl Strategy<Value = f64> {
            1e-3..1e3
        }

        proptest! {
            #[test]
            fn test_reflected_mean_is_positive(
                a in positive_strategy(),
                d in positive_strategy()
            ) {
                prop_assert!(mean_fpt_reflected(a, d) > 0.0);
            }

            #[test]
            fn test_resetting_mean_exceeds_direct_ballistic_bound(
                r in positive_strategy(),
                a in positive_strategy(),
                d in positive_strategy()
            ) {
                // (exp(z) - 1)/r >= z/r > 0 for z > 0
                let t = mean_fpt_resetting(r, a, d);
                prop_assert!(t > 0.0);
                prop_assert!(t >= a * (r / d).sqrt() / r);
            }

            #[test]
            fn test_optimum_beats_neighbouring_rates(
                a in 0.1..10.0f64,
                d in 0.1..10.0f64
            ) {
                let r_star = optimal_reset_rate(a, d);
                let best = mean_fpt_resetting(r_star, a, d);
                prop_assert!(best <= mean_fpt_resetting(r_star * 0.5, a, d));
                prop_assert!(best <= mean_fpt_resetting(r_star * 2.0, a, d));
            }
        }
    }
}
