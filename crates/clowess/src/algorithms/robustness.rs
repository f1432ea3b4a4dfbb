//! Robustness weight computation for outlier downweighting.
//!
//! ## Purpose
//!
//! After each smoothing pass except the last, residuals are turned into
//! bisquare weights that the next pass multiplies into its kernel weights.
//! Points with large residuals lose influence; gross outliers are rejected.
//!
//! ## Design notes
//!
//! * **Scale**: Six times the median absolute residual. The median is the
//!   mean of the two middle order statistics, so `cmad = 3 * (lower + upper)`.
//! * **Saturation**: Residuals within 0.1% of `cmad` keep weight 1 and
//!   residuals beyond 99.9% get weight 0.
//! * **Perfect fits**: When more than half the residuals are exactly zero the
//!   scale collapses to zero. Exact fits then keep weight 1 and everything else
//!   is rejected, with no division by zero.
//!
//! ## Invariants
//!
//! * Robustness weights are in [0, 1].
//! * Residuals are never mutated; the median works on a scratch copy.
//!
//! ## Non-goals
//!
//! * This module does not perform the regression itself.
//! * This module does not decide the number of robustness passes.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::middle_abs_pair;

// ============================================================================
// Constants
// ============================================================================

/// Multiplier applied to the sum of the two middle absolute residuals.
///
/// `3 * (lower + upper)` is six times their mean (Cleveland 1979).
const MIDDLE_PAIR_SCALE: f64 = 3.0;

/// Residuals at or below this fraction of `cmad` keep full weight.
const NEAR_FRACTION: f64 = 0.001;

/// Residuals above this fraction of `cmad` are rejected.
const FAR_FRACTION: f64 = 0.999;

// ============================================================================
// Robustness Update
// ============================================================================

/// Recompute `weights` from `residuals`.
///
/// `scratch` must be at least as long as `residuals`. Returns the scale
/// `cmad` used for the update.
pub fn update_robustness_weights<T: Float>(
    residuals: &[T],
    weights: &mut [T],
    scratch: &mut [T],
) -> T {
    let n = residuals.len();
    if n == 0 {
        return T::zero();
    }

    let scratch = &mut scratch[..n];
    scratch.copy_from_slice(residuals);
    let (lower, upper) = middle_abs_pair(scratch);
    let cmad = T::from(MIDDLE_PAIR_SCALE).unwrap() * (lower + upper);

    for (w, &r) in weights.iter_mut().zip(residuals) {
        *w = bisquare_weight(r, cmad);
    }

    cmad
}

/// Compute bisquare weight.
///
/// # Formula
///
/// c1 = 0.001 * cmad
/// c9 = 0.999 * cmad
///
/// w = 1.0                    if |r| <= c1
/// w = (1 - (r/cmad)^2)^2     if c1 < |r| <= c9
/// w = 0.0                    if |r| > c9
#[inline]
pub fn bisquare_weight<T: Float>(residual: T, cmad: T) -> T {
    let r = residual.abs();

    if cmad <= T::zero() {
        // Both thresholds are zero: only exact fits survive
        return if r <= T::zero() { T::one() } else { T::zero() };
    }

    let c1 = T::from(NEAR_FRACTION).unwrap() * cmad;
    let c9 = T::from(FAR_FRACTION).unwrap() * cmad;

    if r <= c1 {
        T::one()
    } else if r <= c9 {
        let u = r / cmad;
        let tmp = T::one() - u * u;
        tmp * tmp
    } else {
        T::zero()
    }
}
