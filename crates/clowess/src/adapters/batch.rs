//! Batch adapter for standard LOWESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for LOWESS smoothing.
//! It handles complete `(x, y)` datasets in memory, in any order.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, sorts, executes, and unsorts.
//! * **Sorting**: Stable, so tied abscissas keep their input order.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reuse**: A built model holds no mutable state and may fit many series.
//!
//! ## Invariants
//!
//! * Input arrays x and y must have the same length.
//! * All values must be finite.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not clamp out-of-range parameters.
//! * This adapter does not handle missing values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::calculate_delta;
use crate::algorithms::regression::WeightedSums;
use crate::engine::executor::LowessExecutor;
use crate::engine::output::LowessResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::LowessError;
use crate::primitives::sorting::{sort_by_x, unsort};

// ============================================================================
// Batch LOWESS Builder
// ============================================================================

/// Builder for batch LOWESS processor.
#[derive(Debug, Clone)]
pub struct BatchLowessBuilder<T: Float> {
    /// Smoothing fraction (span)
    pub fraction: T,

    /// Number of robustness iterations
    pub iterations: usize,

    /// Interpolation delta; 1% of the x-range when unset
    pub delta: Option<T>,

    /// Whether to return residuals
    pub return_residuals: bool,

    /// Whether to return robustness weights
    pub return_robustness_weights: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchLowessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchLowessBuilder<T> {
    /// Create a new batch LOWESS builder with default parameters.
    fn new() -> Self {
        Self {
            fraction: T::from(2.0 / 3.0).unwrap(),
            iterations: 3,
            delta: None,
            return_residuals: false,
            return_robustness_weights: false,
            duplicate_param: None,
        }
    }

    /// Set the smoothing fraction (span).
    pub fn fraction(mut self, fraction: T) -> Self {
        self.fraction = fraction;
        self
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the delta parameter for interpolation skipping.
    pub fn delta(mut self, delta: T) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Enable returning residuals in the output.
    pub fn return_residuals(mut self, enabled: bool) -> Self {
        self.return_residuals = enabled;
        self
    }

    /// Enable returning robustness weights in the result.
    pub fn return_robustness_weights(mut self, enabled: bool) -> Self {
        self.return_robustness_weights = enabled;
        self
    }

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchLowess<T>, LowessError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_fraction(self.fraction)?;
        Validator::validate_iterations(self.iterations)?;
        if let Some(delta) = self.delta {
            Validator::validate_delta(delta)?;
        }

        Ok(BatchLowess { config: self })
    }
}

// ============================================================================
// Batch LOWESS Processor
// ============================================================================

/// Batch LOWESS processor.
#[derive(Debug, Clone)]
pub struct BatchLowess<T: Float> {
    config: BatchLowessBuilder<T>,
}

impl<T: Float + WeightedSums> BatchLowess<T> {
    /// Perform LOWESS smoothing on the provided data.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<LowessResult<T>, LowessError> {
        Validator::validate_inputs(x, y)?;

        let sorted = sort_by_x(x, y);
        let delta = calculate_delta(self.config.delta, &sorted.x);

        debug!(
            "batch fit: {} points, fraction {}, {} iterations",
            x.len(),
            self.config.fraction.to_f64().unwrap_or(f64::NAN),
            self.config.iterations
        );

        let result = LowessExecutor::new()
            .fraction(self.config.fraction)
            .iterations(self.config.iterations)
            .delta(delta)
            .run(&sorted.x, &sorted.y, None);

        // Unsort results using sorting module
        let indices = &sorted.indices;
        let residuals: Option<Vec<T>> = if self.config.return_residuals {
            Some(unsort(&result.residuals, indices))
        } else {
            None
        };
        let robustness_weights = if self.config.return_robustness_weights {
            Some(unsort(&result.robustness_weights, indices))
        } else {
            None
        };

        Ok(LowessResult {
            x: x.to_vec(),
            y: unsort(&result.smoothed, indices),
            residuals,
            robustness_weights,
            fraction_used: self.config.fraction,
            delta_used: delta,
            iterations: self.config.iterations,
            neighbors: result.neighbors,
            fits: result.fits,
        })
    }
}
