//! Even-grid adapter for evenly spaced series.
//!
//! ## Purpose
//!
//! Many series are sampled at a fixed rate and only the ordinates matter.
//! This adapter smooths such a series on the synthetic abscissas
//! `0, 1, ..., n - 1` with a reduced set of parameters.
//!
//! ## Design notes
//!
//! * **Permissive**: Out-of-range parameters are clamped with a warning
//!   instead of rejected. A fraction outside (0, 1) becomes 0.1 and delta is
//!   clamped to [1, n].
//! * **Defaults**: fraction 0.1, delta 3.2, one robustness iteration.
//! * **Delegation**: Runs the same execution engine as the batch adapter.
//!
//! ## Non-goals
//!
//! * This adapter does not return residuals or robustness weights.
//! * This adapter does not accept abscissas.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::warn;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::WeightedSums;
use crate::engine::executor::LowessExecutor;
use crate::engine::validator::Validator;
use crate::primitives::errors::LowessError;

// ============================================================================
// Even-Grid LOWESS Builder
// ============================================================================

/// Builder for the even-grid LOWESS processor.
#[derive(Debug, Clone)]
pub struct EvenGridLowessBuilder<T: Float> {
    /// Smoothing fraction; replaced by 0.1 when outside (0, 1)
    pub fraction: T,

    /// Number of robustness iterations
    pub iterations: usize,

    /// Interpolation delta; clamped to [1, n] at fit time
    pub delta: T,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for EvenGridLowessBuilder<T> {
    fn default() -> Self {
        Self {
            fraction: T::from(0.1).unwrap(),
            iterations: 1,
            delta: T::from(3.2).unwrap(),
            duplicate_param: None,
        }
    }
}

impl<T: Float> EvenGridLowessBuilder<T> {
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
        self.delta = delta;
        self
    }

    /// Build the even-grid processor.
    ///
    /// Only duplicate parameters and the iteration cap are errors here;
    /// fraction and delta are clamped when fitting.
    pub fn build(self) -> Result<EvenGridLowess<T>, LowessError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_iterations(self.iterations)?;

        Ok(EvenGridLowess { config: self })
    }
}

// ============================================================================
// Even-Grid LOWESS Processor
// ============================================================================

/// Even-grid LOWESS processor.
#[derive(Debug, Clone)]
pub struct EvenGridLowess<T: Float> {
    config: EvenGridLowessBuilder<T>,
}

impl<T: Float + WeightedSums> EvenGridLowess<T> {
    /// Smooth `y` as if sampled at `0, 1, ..., n - 1`.
    ///
    /// Returns an empty vector for empty input.
    pub fn fit(&self, y: &[T]) -> Vec<T> {
        smooth_even(y, self.config.fraction, self.config.delta, self.config.iterations)
    }
}

// ============================================================================
// Parameter Clamping
// ============================================================================

/// Replace a fraction outside (0, 1) with 0.1.
pub fn clamp_fraction<T: Float>(fraction: T) -> T {
    if fraction > T::zero() && fraction < T::one() {
        return fraction;
    }

    let fallback = T::from(0.1).unwrap();
    warn!(
        "fraction {} outside (0, 1), using {}",
        fraction.to_f64().unwrap_or(f64::NAN),
        fallback.to_f64().unwrap_or(f64::NAN)
    );
    fallback
}

/// Clamp delta to `[1, n]`.
pub fn clamp_delta<T: Float>(delta: T, n: usize) -> T {
    let upper = T::from(n).unwrap_or_else(T::max_value);

    let clamped = if delta > upper {
        upper
    } else if delta >= T::one() {
        delta
    } else {
        // Also catches NaN
        T::one()
    };

    if clamped != delta {
        warn!(
            "delta {} outside [1, {}], using {}",
            delta.to_f64().unwrap_or(f64::NAN),
            n,
            clamped.to_f64().unwrap_or(f64::NAN)
        );
    }
    clamped
}

/// Clamp the parameters, build the synthetic grid and run the engine.
pub fn smooth_even<T: Float + WeightedSums>(y: &[T], fraction: T, delta: T, iterations: usize) -> Vec<T> {
    let n = y.len();
    if n == 0 {
        return Vec::new();
    }

    let fraction = clamp_fraction(fraction);
    let delta = clamp_delta(delta, n);

    let x: Vec<T> = (0..n).map(|i| T::from(i).unwrap_or_else(T::zero)).collect();

    LowessExecutor::new()
        .fraction(fraction)
        .iterations(iterations)
        .delta(delta)
        .run(&x, y, None)
        .smoothed
}
