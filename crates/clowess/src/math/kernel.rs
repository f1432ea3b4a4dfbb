//! Tricube kernel weights for LOWESS smoothing.
//!
//! ## Purpose
//!
//! This module maps distances from a target abscissa to neighbor weights.
//! It controls the influence of neighboring points on the local fit.
//!
//! ## Design notes
//!
//! * **Normalization**: Maps distances u = |x - x_i| / bandwidth to weights.
//! * **Saturation**: Distances within 0.1% of the bandwidth get weight 1 and
//!   distances beyond 99.9% get weight 0, so the cube never underflows.
//! * **Ties**: The window scan runs past the nominal right edge until the
//!   first zero-weight point to the right of the target, picking up every
//!   neighbor tied with the edge.
//!
//! ## Invariants
//!
//! * Weights are non-negative and at most 1 before robustness scaling.
//! * The kernel is symmetric (K(u) = K(-u)) and zero outside [-1, 1].
//!
//! ## Non-goals
//!
//! * This module does not normalize weights.
//! * This module does not choose the bandwidth.

// External dependencies
use num_traits::Float;

/// Tricube kernel: K(u) = (1 - |u|^3)^3 for |u| < 1, else 0.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u >= T::one() {
        return T::zero();
    }

    let tmp = T::one() - abs_u * abs_u * abs_u;
    tmp * tmp * tmp
}

/// Apply the tricube weighting to the neighbors of `x_current`.
///
/// Scans from `left` towards the end of the series and stops at the first
/// point to the right of `x_current` that falls outside `h9`. When
/// `robustness` is given, each kernel weight is multiplied by the matching
/// robustness weight.
///
/// Returns the weight sum and the rightmost index scanned (which may lie
/// beyond the nominal window when x-values are tied).
#[allow(clippy::too_many_arguments)]
pub fn compute_window_weights<T: Float>(
    x: &[T],
    left: usize,
    x_current: T,
    bandwidth: T,
    h1: T,
    h9: T,
    robustness: Option<&[T]>,
    weights: &mut [T],
) -> (T, usize) {
    let n = x.len();

    if left >= n {
        return (T::zero(), left);
    }

    let mut sum = T::zero();
    let mut rightmost = left;

    let mut j = left;
    while j < n {
        let xj = x[j];
        let distance = (xj - x_current).abs();

        if distance > h9 {
            weights[j] = T::zero();
            if xj > x_current {
                // x is sorted: nothing further right can carry weight
                break;
            }
        } else {
            let mut w = if distance <= h1 {
                T::one()
            } else {
                tricube(distance / bandwidth)
            };

            if let Some(rw) = robustness {
                w = w * rw[j];
            }

            weights[j] = w;
            sum = sum + w;
        }

        rightmost = j;
        j += 1;
    }

    (sum, rightmost)
}
