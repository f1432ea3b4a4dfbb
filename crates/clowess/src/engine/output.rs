//! Output types and result structures for LOWESS operations.
//!
//! ## Purpose
//!
//! This module defines the `LowessResult` struct which holds the outputs of
//! a fitted model: smoothed values, optional residuals and robustness
//! weights, and the parameters the fit actually used.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option<Vec<T>>` and are
//!   only populated when requested from the builder.
//! * **Ordering**: Every vector is in the caller's original input order.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All populated vectors have the same length as the input data.
//! * Robustness weights are always in the range [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// LOWESS output containing smoothed values and fit metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LowessResult<T> {
    /// Input x-values.
    pub x: Vec<T>,

    /// Smoothed y-values.
    pub y: Vec<T>,

    /// Residuals from the fit (y_i - y_hat_i).
    pub residuals: Option<Vec<T>>,

    /// Robustness weights used by the final pass.
    pub robustness_weights: Option<Vec<T>>,

    /// Smoothing fraction used for the fit.
    pub fraction_used: T,

    /// Delta used for interpolation skipping.
    pub delta_used: T,

    /// Number of robustness iterations performed.
    pub iterations: usize,

    /// Number of points in each neighbor window.
    pub neighbors: usize,

    /// Number of direct local fits in the final pass.
    pub fits: usize,
}

impl<T: Float> LowessResult<T> {
    /// Number of points that were interpolated instead of fitted.
    pub fn interpolated(&self) -> usize {
        self.y.len().saturating_sub(self.fits)
    }

    /// Check if robustness reweighting took place.
    pub fn is_robust(&self) -> bool {
        self.iterations > 0
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for LowessResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.x.len())?;
        writeln!(f, "  Fraction:    {}", self.fraction_used)?;
        writeln!(f, "  Delta:       {}", self.delta_used)?;
        writeln!(f, "  Neighbors:   {}", self.neighbors)?;
        writeln!(f, "  Iterations:  {}", self.iterations)?;
        writeln!(f, "  Local fits:  {} ({} interpolated)", self.fits, self.interpolated())?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;

        let has_resid = self.residuals.is_some();
        let has_weights = self.robustness_weights.is_some();

        // Build header
        write!(f, "{:>8} {:>12}", "X", "Y_smooth")?;
        if has_resid {
            write!(f, " {:>12}", "Residual")?;
        }
        if has_weights {
            write!(f, " {:>10}", "Rob_Weight")?;
        }
        writeln!(f)?;

        let line_width = 21 + if has_resid { 13 } else { 0 } + if has_weights { 11 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;

            if let Some(resid) = &self.residuals {
                write!(f, " {:>12.6}", resid[idx])?;
            }

            if let Some(weights) = &self.robustness_weights {
                write!(f, " {:>10.4}", weights[idx])?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
