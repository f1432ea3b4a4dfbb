//! Windowing primitives for LOWESS smoothing.
//!
//! This module provides the sliding neighbor window used by the smoothing
//! pass. The window holds a fixed number of points and only ever moves right,
//! so each pass touches every boundary position at most once.

// External dependencies
use num_traits::Float;

// Inclusive window bounds `[left, right]` for a local fit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Initial window of `span` points anchored at the start of the series.
    #[inline]
    pub fn initialize(span: usize) -> Self {
        debug_assert!(span >= 1, "initialize: span must be at least 1");

        Self {
            left: 0,
            right: span - 1,
        }
    }

    // Slide right while that brings the window closer to `x[current]`.
    //
    // Stops as soon as the distance to the left edge no longer exceeds the
    // distance to the next point on the right. Ties at the right edge are
    // picked up by the fit itself, which scans past `right`.
    #[inline]
    pub fn advance<T: Float>(&mut self, x: &[T], current: usize) {
        let n = x.len();
        debug_assert!(current < n, "advance: current index out of bounds");

        let x_current = x[current];

        while self.right + 1 < n {
            let d_left = x_current - x[self.left];
            let d_right = x[self.right + 1] - x_current;

            if d_left <= d_right {
                break;
            }

            self.left += 1;
            self.right += 1;
        }
    }

    // Compute the maximum distance from `x_current` to either window edge.
    #[inline]
    pub fn max_distance<T: Float>(&self, x: &[T], x_current: T) -> T {
        T::max(x_current - x[self.left], x[self.right] - x_current)
    }

    // Number of neighbors for fraction `frac` of `n` points.
    //
    // `floor(frac * n)`, capped at `n - 1` and then raised to at least 2, so
    // two points always take part even when `n == 2`.
    #[inline]
    pub fn calculate_span<T: Float>(n: usize, frac: T) -> usize {
        let frac_n = (frac * T::from(n).unwrap_or_else(T::zero)).floor();
        let frac_n_int = frac_n.to_usize().unwrap_or(0);
        usize::max(2, usize::min(n.saturating_sub(1), frac_n_int))
    }

    // Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }
}
