//! High-level API for LOWESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points for LOWESS:
//! - A fluent builder for configuring smoothing parameters and choosing an
//!   execution adapter (Batch or EvenGrid).
//! - [`lowess_core`], the strict direct call on sorted data returning fitted
//!   values, robustness weights and residuals.
//! - [`lowess_even`], the permissive call for evenly spaced ordinates.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LowessBuilder`] via `Lowess::new()`.
//! 2. Chain configuration methods (`.fraction()`, `.iterations()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.
//! 4. Call `.build()?` and then `.fit(..)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchLowessBuilder;
use crate::adapters::even::{EvenGridLowessBuilder, smooth_even};
use crate::engine::executor::LowessExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::batch::BatchLowess;
pub use crate::adapters::even::EvenGridLowess;
pub use crate::algorithms::regression::WeightedSums;
pub use crate::engine::output::LowessResult;
pub use crate::primitives::errors::LowessError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, EvenGrid};
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring LOWESS parameters and execution modes.
#[derive(Debug, Clone)]
pub struct LowessBuilder<T> {
    /// Smoothing fraction (0..1].
    pub fraction: Option<T>,

    /// Robustness iterations.
    pub iterations: Option<usize>,

    /// Threshold for skipping fits (delta skipping).
    pub delta: Option<T>,

    /// Return residuals r_i.
    pub return_residuals: Option<bool>,

    /// Return final robustness weights w_i.
    pub return_robustness_weights: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LowessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LowessBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fraction: None,
            iterations: None,
            delta: None,
            return_residuals: None,
            return_robustness_weights: None,
            duplicate_param: None,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: LowessAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the smoothing fraction (bandwidth alpha).
    pub fn fraction(mut self, fraction: T) -> Self {
        if self.fraction.is_some() {
            self.duplicate_param = Some("fraction");
        }
        self.fraction = Some(fraction);
        self
    }

    /// Set the number of robustness iterations (typically 0-4).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the delta parameter for interpolation skipping.
    pub fn delta(mut self, delta: T) -> Self {
        if self.delta.is_some() {
            self.duplicate_param = Some("delta");
        }
        self.delta = Some(delta);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.return_residuals = Some(true);
        self
    }

    /// Include final robustness weights in output.
    pub fn return_robustness_weights(mut self) -> Self {
        self.return_robustness_weights = Some(true);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from a generic builder to an execution builder.
pub trait LowessAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`LowessBuilder`] into a specialized execution builder.
    fn convert(builder: LowessBuilder<T>) -> Self::Output;
}

/// Marker for in-memory batch processing of `(x, y)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> LowessAdapter<T> for Batch {
    type Output = BatchLowessBuilder<T>;

    fn convert(builder: LowessBuilder<T>) -> Self::Output {
        let mut result = BatchLowessBuilder::default();

        if let Some(fraction) = builder.fraction {
            result.fraction = fraction;
        }
        if let Some(iterations) = builder.iterations {
            result.iterations = iterations;
        }
        if let Some(delta) = builder.delta {
            result.delta = Some(delta);
        }
        if let Some(rr) = builder.return_residuals {
            result.return_residuals = rr;
        }
        if let Some(rw) = builder.return_robustness_weights {
            result.return_robustness_weights = rw;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for evenly spaced ordinates on the grid `0..n`.
#[derive(Debug, Clone, Copy)]
pub struct EvenGrid;

impl<T: Float> LowessAdapter<T> for EvenGrid {
    type Output = EvenGridLowessBuilder<T>;

    fn convert(builder: LowessBuilder<T>) -> Self::Output {
        let mut result = EvenGridLowessBuilder::default();

        if let Some(fraction) = builder.fraction {
            result.fraction = fraction;
        }
        if let Some(iterations) = builder.iterations {
            result.iterations = iterations;
        }
        if let Some(delta) = builder.delta {
            result.delta = delta;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// ============================================================================
// Direct Entry Points
// ============================================================================

/// Raw outputs of [`lowess_core`], index-aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Smoothed<T> {
    /// Fitted values.
    pub ys: Vec<T>,

    /// Robustness weights used by the final pass (all ones when
    /// `iterations == 0`).
    pub rw: Vec<T>,

    /// Residuals `y - ys`.
    pub res: Vec<T>,
}

/// Smooth sorted data directly.
///
/// `x` must be non-decreasing. Runs `iterations + 1` passes; `delta` is used
/// as given (zero fits every distinct abscissa).
///
/// # Errors
///
/// Fails on empty or mismatched input, non-finite values, unsorted `x`, a
/// fraction outside (0, 1], more than 1000 iterations or a negative delta.
pub fn lowess_core<T: Float + WeightedSums>(
    x: &[T],
    y: &[T],
    fraction: T,
    iterations: usize,
    delta: T,
) -> Result<Smoothed<T>, LowessError> {
    Validator::validate_inputs(x, y)?;
    Validator::validate_sorted(x)?;
    Validator::validate_fraction(fraction)?;
    Validator::validate_iterations(iterations)?;
    Validator::validate_delta(delta)?;

    let output = LowessExecutor::new()
        .fraction(fraction)
        .iterations(iterations)
        .delta(delta)
        .run(x, y, None);

    Ok(Smoothed {
        ys: output.smoothed,
        rw: output.robustness_weights,
        res: output.residuals,
    })
}

/// Smooth evenly spaced ordinates.
///
/// The abscissas are `0, 1, ..., n - 1`. A fraction outside (0, 1) is
/// replaced by 0.1 and delta is clamped to `[1, n]`, each with a logged
/// warning. Empty input gives an empty result.
pub fn lowess_even<T: Float + WeightedSums>(
    y: &[T],
    fraction: T,
    delta: T,
    iterations: usize,
) -> Vec<T> {
    smooth_even(y, fraction, delta, iterations)
}
