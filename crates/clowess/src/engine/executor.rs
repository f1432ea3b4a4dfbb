//! Execution engine for LOWESS smoothing operations.
//!
//! ## Purpose
//!
//! This module drives the smoothing passes. It walks the sorted series with
//! a sliding neighbor window, fits anchor points, interpolates the points it
//! skips, and between passes turns residuals into robustness weights.
//!
//! ## Design notes
//!
//! * One pass is an explicit state machine ([`SmoothPass`]); each `step`
//!   fits one anchor and fills the gap behind it.
//! * The next anchor is found in the same scan that absorbs ties, so a pass
//!   never revisits a point.
//! * All working memory lives in a [`SmoothBuffer`] allocated once per call.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Input x-values are non-decreasing (sorted).
//! * The window always holds `span` points and only moves right.
//! * Robustness weights are always in [0, 1].
//! * The last point of the series is always an anchor.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not sort input data (caller's responsibility).
//! * This module does not provide public-facing result formatting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate_gap;
use crate::algorithms::regression::{NeighborFit, WeightedSums};
use crate::algorithms::robustness::update_robustness_weights;
pub use crate::primitives::buffer::SmoothBuffer;
use crate::primitives::window::Window;

// ============================================================================
// Output
// ============================================================================

/// Output from LOWESS execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Smoothed y-values.
    pub smoothed: Vec<T>,

    /// Residuals `y - smoothed` from the final pass.
    pub residuals: Vec<T>,

    /// Robustness weights used by the final pass.
    pub robustness_weights: Vec<T>,

    /// Number of points in each neighbor window.
    pub neighbors: usize,

    /// Number of direct local fits in the final pass.
    pub fits: usize,
}

// ============================================================================
// Smoothing Pass State
// ============================================================================

/// State of one smoothing pass over a sorted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothPass {
    /// Most recent anchor (fitted or absorbed by a tie).
    pub last: Option<usize>,

    /// Current neighbor window.
    pub window: Window,

    /// Next point to fit; `None` once the pass is complete.
    pub next: Option<usize>,
}

impl SmoothPass {
    /// Start a pass with a window of `span` points.
    pub fn new(span: usize) -> Self {
        Self {
            last: None,
            window: Window::initialize(span),
            next: Some(0),
        }
    }

    /// Whether every point has received a value.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.next.is_none()
    }

    /// Fit the next anchor, fill the skipped points behind it and pick the
    /// one after.
    ///
    /// Returns `false` without touching anything once the pass is complete.
    #[allow(clippy::too_many_arguments)]
    pub fn step<T>(
        &mut self,
        x: &[T],
        y: &[T],
        delta: T,
        use_robustness: bool,
        robustness_weights: &[T],
        weights: &mut [T],
        y_smooth: &mut [T],
    ) -> bool
    where
        T: Float + WeightedSums,
    {
        let Some(current) = self.next else {
            return false;
        };
        let n = x.len();

        self.window.advance(x, current);

        let mut ctx = NeighborFit {
            x,
            y,
            x_current: x[current],
            window: self.window,
            use_robustness,
            robustness_weights,
            weights,
        };

        y_smooth[current] = match ctx.fit() {
            Some(fit) => fit.value,
            None => {
                trace!("zero weight sum at index {current}, keeping the observed value");
                y[current]
            }
        };

        if let Some(last) = self.last {
            interpolate_gap(x, y_smooth, last, current);
        }

        // Absorb ties and find the first point beyond the delta cutoff
        let cutpoint = x[current] + delta;
        let mut anchor = current;
        let mut stop = n;
        for j in (current + 1)..n {
            if x[j] > cutpoint {
                stop = j;
                break;
            }
            if x[j] == x[anchor] {
                y_smooth[j] = y_smooth[anchor];
                anchor = j;
            }
        }

        self.last = Some(anchor);
        self.next = if anchor >= n - 1 {
            None
        } else {
            Some(usize::max(anchor + 1, stop - 1))
        };

        true
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for LOWESS smoothing operations.
#[derive(Debug, Clone)]
pub struct LowessExecutor<T: Float> {
    /// Smoothing fraction (0, 1].
    pub fraction: T,

    /// Number of robustness iterations.
    pub iterations: usize,

    /// Delta for interpolation skipping.
    pub delta: T,
}

impl<T: Float> Default for LowessExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LowessExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self {
            fraction: T::from(2.0 / 3.0).unwrap(),
            iterations: 3,
            delta: T::zero(),
        }
    }

    /// Set the smoothing fraction (bandwidth).
    pub fn fraction(mut self, frac: T) -> Self {
        self.fraction = frac;
        self
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, niter: usize) -> Self {
        self.iterations = niter;
        self
    }

    /// Set the delta parameter for interpolation skipping.
    pub fn delta(mut self, delta: T) -> Self {
        self.delta = delta;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Run LOWESS on sorted data.
    ///
    /// # Special Cases
    ///
    /// * **Empty input**: Returns empty output.
    /// * **Single point**: Returns `y` unchanged with unit weight and zero residual.
    pub fn run(&self, x: &[T], y: &[T], buffer: Option<&mut SmoothBuffer<T>>) -> ExecutorOutput<T>
    where
        T: WeightedSums,
    {
        let n = x.len();

        if n <= 1 {
            return ExecutorOutput {
                smoothed: y.to_vec(),
                residuals: vec![T::zero(); n],
                robustness_weights: vec![T::one(); n],
                neighbors: n,
                fits: 0,
            };
        }

        let span = Window::calculate_span(n, self.fraction);

        let mut internal_buffers;
        let buffers = if let Some(b) = buffer {
            b.prepare(n);
            b
        } else {
            internal_buffers = SmoothBuffer::with_capacity(n);
            internal_buffers.prepare(n);
            &mut internal_buffers
        };

        let fits = Self::iteration_loop(x, y, span, self.iterations, self.delta, buffers);

        ExecutorOutput {
            smoothed: buffers.y_smooth.to_vec(),
            residuals: buffers.residuals.to_vec(),
            robustness_weights: buffers.robustness_weights.to_vec(),
            neighbors: span,
            fits,
        }
    }

    /// Perform the full LOWESS iteration loop: `niter + 1` passes, robust
    /// from the second pass onward.
    ///
    /// Returns the number of direct fits in the final pass.
    pub fn iteration_loop(
        x: &[T],
        y: &[T],
        span: usize,
        niter: usize,
        delta: T,
        buffers: &mut SmoothBuffer<T>,
    ) -> usize
    where
        T: WeightedSums,
    {
        let mut fits = 0;

        for iter in 0..=niter {
            fits = Self::smooth_pass(
                x,
                y,
                span,
                delta,
                iter > 0,
                &buffers.robustness_weights,
                &mut buffers.weights,
                &mut buffers.y_smooth,
            );

            for ((r, &yi), &fi) in buffers.residuals.iter_mut().zip(y).zip(buffers.y_smooth.iter()) {
                *r = yi - fi;
            }

            debug!("pass {}/{}: {} direct fits over {} points", iter + 1, niter + 1, fits, x.len());

            if iter < niter {
                let cmad = update_robustness_weights(
                    &buffers.residuals,
                    &mut buffers.robustness_weights,
                    &mut buffers.scratch,
                );
                debug!(
                    "robustness scale after pass {}: {}",
                    iter + 1,
                    cmad.to_f64().unwrap_or(f64::NAN)
                );
            }
        }

        fits
    }

    // ========================================================================
    // Main Algorithmic Logic
    // ========================================================================

    /// Perform a single smoothing pass over all points.
    ///
    /// Returns the number of direct fits.
    #[allow(clippy::too_many_arguments)]
    pub fn smooth_pass(
        x: &[T],
        y: &[T],
        span: usize,
        delta: T,
        use_robustness: bool,
        robustness_weights: &[T],
        weights: &mut [T],
        y_smooth: &mut [T],
    ) -> usize
    where
        T: WeightedSums,
    {
        let mut pass = SmoothPass::new(span);
        let mut fits = 0;

        while pass.step(
            x,
            y,
            delta,
            use_robustness,
            robustness_weights,
            weights,
            y_smooth,
        ) {
            fits += 1;
        }

        fits
    }
}
