//! Interpolation and delta skipping for LOWESS smoothing.
//!
//! ## Purpose
//!
//! When abscissas are densely sampled, fitting every point is wasted work.
//! The smoothing pass fits anchor points and this module fills the points it
//! skipped by linear interpolation between neighboring anchors.
//!
//! ## Design notes
//!
//! * **Delta**: Points within `delta` of the last anchor are skipped.
//! * **Defaults**: The builder uses 1% of the x-range when no delta is given.
//! * **Interpolation form**: `alpha * y1 + (1 - alpha) * y0` so that a gap
//!   between equal anchor values reproduces that value exactly.
//!
//! ## Invariants
//!
//! * Input x-values are sorted in ascending order.
//! * Anchors are never overwritten.

// External dependencies
use num_traits::Float;

// ============================================================================
// Delta Calculation
// ============================================================================

/// Resolve the delta parameter.
///
/// If `delta` is `None`, computes a conservative default as 1% of the x-range:
/// ```text
/// delta = 0.01 × (max(x) - min(x))
/// ```
pub fn calculate_delta<T: Float>(delta: Option<T>, x_sorted: &[T]) -> T {
    match delta {
        Some(d) => d,
        None => match (x_sorted.first(), x_sorted.last()) {
            (Some(&lo), Some(&hi)) => T::from(0.01).unwrap() * (hi - lo),
            _ => T::zero(),
        },
    }
}

// ============================================================================
// Linear Interpolation
// ============================================================================

/// Interpolate the skipped points strictly between two anchors.
///
/// # Special cases
///
/// * **No gap**: If `current <= last_fitted + 1`, nothing is written.
/// * **Tied anchors**: If the anchors share an abscissa, the gap takes the
///   left anchor's value (unreachable from the smoothing pass, which folds
///   ties into the anchor itself).
pub fn interpolate_gap<T: Float>(x: &[T], y_smooth: &mut [T], last_fitted: usize, current: usize) {
    if current <= last_fitted + 1 {
        return;
    }

    let x0 = x[last_fitted];
    let x1 = x[current];
    let y0 = y_smooth[last_fitted];
    let y1 = y_smooth[current];

    let denom = x1 - x0;

    if denom <= T::zero() {
        y_smooth[(last_fitted + 1)..current].fill(y0);
        return;
    }

    for k in (last_fitted + 1)..current {
        let alpha = (x[k] - x0) / denom;
        y_smooth[k] = alpha * y1 + (T::one() - alpha) * y0;
    }
}
