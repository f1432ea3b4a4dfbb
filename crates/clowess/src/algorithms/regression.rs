//! Regression Logic
//!
//! ## Purpose
//!
//! This module computes the locally weighted fit at a single target abscissa:
//! - Tricube neighbor weights, optionally scaled by robustness weights.
//! - A degree-1 weighted least squares fit, folded into one extra weighting
//!   pass instead of a general solve.
//! - A degree-0 (weighted mean) fallback when the local x-spread is too small.
//!
//! ## Design notes
//!
//! * The normalized weights stay in the caller's scratch buffer so that the
//!   fitted value is exactly `sum(w[j] * y[j])` over `[left, rightmost]`.
//! * Weighted sums go through [`WeightedSums`], which has SIMD
//!   implementations for `f64` and `f32`.
//!
//! ## Invariants
//!
//! * A successful fit leaves weights over `[left, rightmost]` summing to one.
//! * `x`, `y` and the robustness weights are never mutated.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// Internal dependencies
use crate::math::kernel::compute_window_weights;
use crate::primitives::window::Window;

// ============================================================================
// Weight Parameters
// ============================================================================

/// Parameters for weight computation.
pub struct WeightParams<T: Float> {
    /// Target abscissa of the fit
    pub x_current: T,

    /// Bandwidth: distance to the farther window edge
    pub window_radius: T,

    /// Near-threshold: points closer than this get weight 1.0.
    pub h1: T,

    /// Far-threshold: points farther than this get weight 0.0.
    pub h9: T,
}

impl<T: Float> WeightParams<T> {
    /// Derive the saturation thresholds from the bandwidth.
    ///
    /// A zero bandwidth is valid: only points tied with the target then
    /// receive weight.
    pub fn new(x_current: T, window_radius: T) -> Self {
        let h1 = T::from(0.001).unwrap() * window_radius;
        let h9 = T::from(0.999).unwrap() * window_radius;

        Self {
            x_current,
            window_radius,
            h1,
            h9,
        }
    }
}

// ============================================================================
// Weighted Sums
// ============================================================================

/// Scalar weighted sum `sum(w[i] * v[i])`.
#[inline]
pub fn weighted_sum_scalar<T: Float>(weights: &[T], values: &[T]) -> T {
    weights
        .iter()
        .zip(values)
        .fold(T::zero(), |acc, (&w, &v)| acc + w * v)
}

/// Scalar weighted squared deviation `sum(w[i] * (v[i] - center)^2)`.
#[inline]
pub fn weighted_sq_dev_scalar<T: Float>(weights: &[T], values: &[T], center: T) -> T {
    weights.iter().zip(values).fold(T::zero(), |acc, (&w, &v)| {
        let d = v - center;
        acc + w * d * d
    })
}

/// SIMD weighted sum (f64).
#[inline]
pub fn weighted_sum_simd_f64(weights: &[f64], values: &[f64]) -> f64 {
    let n = weights.len().min(values.len());
    let (weights, values) = (&weights[..n], &values[..n]);

    let mut acc = f64x2::splat(0.0);
    let w_chunks = weights.chunks_exact(2);
    let v_chunks = values.chunks_exact(2);
    let (w_rem, v_rem) = (w_chunks.remainder(), v_chunks.remainder());

    for (w, v) in w_chunks.zip(v_chunks) {
        acc += f64x2::new([w[0], w[1]]) * f64x2::new([v[0], v[1]]);
    }

    acc.reduce_add() + weighted_sum_scalar(w_rem, v_rem)
}

/// SIMD weighted squared deviation (f64).
#[inline]
pub fn weighted_sq_dev_simd_f64(weights: &[f64], values: &[f64], center: f64) -> f64 {
    let n = weights.len().min(values.len());
    let (weights, values) = (&weights[..n], &values[..n]);

    let c = f64x2::splat(center);
    let mut acc = f64x2::splat(0.0);
    let w_chunks = weights.chunks_exact(2);
    let v_chunks = values.chunks_exact(2);
    let (w_rem, v_rem) = (w_chunks.remainder(), v_chunks.remainder());

    for (w, v) in w_chunks.zip(v_chunks) {
        let d = f64x2::new([v[0], v[1]]) - c;
        acc += f64x2::new([w[0], w[1]]) * d * d;
    }

    acc.reduce_add() + weighted_sq_dev_scalar(w_rem, v_rem, center)
}

/// SIMD weighted sum (f32).
#[inline]
pub fn weighted_sum_simd_f32(weights: &[f32], values: &[f32]) -> f32 {
    let n = weights.len().min(values.len());
    let (weights, values) = (&weights[..n], &values[..n]);

    let mut acc = f32x8::splat(0.0);
    let w_chunks = weights.chunks_exact(8);
    let v_chunks = values.chunks_exact(8);
    let (w_rem, v_rem) = (w_chunks.remainder(), v_chunks.remainder());

    for (w, v) in w_chunks.zip(v_chunks) {
        acc += lanes_f32(w) * lanes_f32(v);
    }

    acc.reduce_add() + weighted_sum_scalar(w_rem, v_rem)
}

/// SIMD weighted squared deviation (f32).
#[inline]
pub fn weighted_sq_dev_simd_f32(weights: &[f32], values: &[f32], center: f32) -> f32 {
    let n = weights.len().min(values.len());
    let (weights, values) = (&weights[..n], &values[..n]);

    let c = f32x8::splat(center);
    let mut acc = f32x8::splat(0.0);
    let w_chunks = weights.chunks_exact(8);
    let v_chunks = values.chunks_exact(8);
    let (w_rem, v_rem) = (w_chunks.remainder(), v_chunks.remainder());

    for (w, v) in w_chunks.zip(v_chunks) {
        let d = lanes_f32(v) - c;
        acc += lanes_f32(w) * d * d;
    }

    acc.reduce_add() + weighted_sq_dev_scalar(w_rem, v_rem, center)
}

#[inline]
fn lanes_f32(c: &[f32]) -> f32x8 {
    f32x8::new([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]])
}

/// Type-specific weighted sums used by the local fit.
pub trait WeightedSums: Float {
    /// `sum(w[i] * v[i])`.
    #[inline]
    fn weighted_sum(weights: &[Self], values: &[Self]) -> Self {
        weighted_sum_scalar(weights, values)
    }

    /// `sum(w[i] * (v[i] - center)^2)`.
    #[inline]
    fn weighted_sq_dev(weights: &[Self], values: &[Self], center: Self) -> Self {
        weighted_sq_dev_scalar(weights, values, center)
    }
}

impl WeightedSums for f64 {
    #[inline]
    fn weighted_sum(weights: &[f64], values: &[f64]) -> f64 {
        weighted_sum_simd_f64(weights, values)
    }

    #[inline]
    fn weighted_sq_dev(weights: &[f64], values: &[f64], center: f64) -> f64 {
        weighted_sq_dev_simd_f64(weights, values, center)
    }
}

impl WeightedSums for f32 {
    #[inline]
    fn weighted_sum(weights: &[f32], values: &[f32]) -> f32 {
        weighted_sum_simd_f32(weights, values)
    }

    #[inline]
    fn weighted_sq_dev(weights: &[f32], values: &[f32], center: f32) -> f32 {
        weighted_sq_dev_simd_f32(weights, values, center)
    }
}

// ============================================================================
// Local Fit Result
// ============================================================================

/// Degree of the local polynomial actually fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitDegree {
    /// Weighted linear fit (the normal case).
    Linear,

    /// Weighted mean: zero bandwidth or x-spread too small for a slope.
    Constant,
}

/// Fitted value at a single target abscissa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFit<T> {
    /// Fitted ordinate.
    pub value: T,

    /// Rightmost index that took part in the fit (may exceed the window's
    /// right edge when x-values are tied there).
    pub rightmost: usize,

    /// Degree of the fit.
    pub degree: FitDegree,
}

// ============================================================================
// Neighbor Fit
// ============================================================================

/// Context containing all data needed to fit a single target abscissa.
pub struct NeighborFit<'a, T: Float> {
    /// Slice of x-values (sorted ascending)
    pub x: &'a [T],

    /// Slice of y-values
    pub y: &'a [T],

    /// Target abscissa; need not be an element of `x`
    pub x_current: T,

    /// Candidate neighbor window
    pub window: Window,

    /// Whether to scale kernel weights by robustness weights
    pub use_robustness: bool,

    /// Robustness weights (read only when `use_robustness` is set)
    pub robustness_weights: &'a [T],

    /// Scratch for the normalized weights, same length as `x`
    pub weights: &'a mut [T],
}

impl<'a, T: Float + WeightedSums> NeighborFit<'a, T> {
    /// Perform the local fit.
    ///
    /// Returns `None` when every weight in the neighborhood is zero (the
    /// caller decides the fallback).
    pub fn fit(&mut self) -> Option<LocalFit<T>> {
        let n = self.x.len();
        let Window { left, right } = self.window;

        if left > right || right >= n {
            return None;
        }
        debug_assert!(
            !self.use_robustness || self.robustness_weights.len() >= n,
            "fit: robustness weights must cover the series"
        );

        let x_current = self.x_current;
        let window_radius = self.window.max_distance(self.x, x_current);
        let params = WeightParams::new(x_current, window_radius);

        let robustness = if self.use_robustness {
            Some(self.robustness_weights)
        } else {
            None
        };

        let (weight_sum, rightmost) = compute_window_weights(
            self.x,
            left,
            params.x_current,
            params.window_radius,
            params.h1,
            params.h9,
            robustness,
            self.weights,
        );

        if weight_sum <= T::zero() {
            return None;
        }

        let window_x = &self.x[left..=rightmost];
        let window_weights = &mut self.weights[left..=rightmost];
        for w in window_weights.iter_mut() {
            *w = *w / weight_sum;
        }

        let mut degree = FitDegree::Constant;
        if window_radius > T::zero() {
            let x_mean = T::weighted_sum(window_weights, window_x);
            let spread = T::weighted_sq_dev(window_weights, window_x, x_mean);
            let x_range = self.x[n - 1] - self.x[0];

            if spread.sqrt() > T::from(0.001).unwrap() * x_range {
                // Fold the slope into the weights: sum(w) stays one
                let slope = (x_current - x_mean) / spread;
                for (w, &xj) in window_weights.iter_mut().zip(window_x) {
                    *w = *w * (T::one() + slope * (xj - x_mean));
                }
                degree = FitDegree::Linear;
            }
        }

        let value = T::weighted_sum(window_weights, &self.y[left..=rightmost]);

        Some(LocalFit {
            value,
            rightmost,
            degree,
        })
    }
}
