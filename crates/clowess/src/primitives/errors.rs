//! Error types for LOWESS operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur before smoothing
//! starts: malformed input series and out-of-range parameters.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Duplicate builder parameters are recorded and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, unsorted or non-finite values.
//! 2. **Parameter validation**: Invalid fraction, delta or iteration count.
//!
//! ## Non-goals
//!
//! * A window whose weights are all zero is not an error. The driver passes
//!   the raw ordinate through instead.
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for LOWESS operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LowessError {
    /// Input arrays are empty; LOWESS requires at least 1 point.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Abscissas must be non-decreasing for the direct entry point.
    UnsortedInput {
        /// First index whose x-value is smaller than its predecessor.
        index: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Smoothing fraction must be in the range (0, 1].
    InvalidFraction(f64),

    /// Delta controls interpolation optimization and must be non-negative.
    InvalidDelta(f64),

    /// Robustness iteration count exceeds the supported maximum.
    InvalidIterations(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LowessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::UnsortedInput { index } => {
                write!(
                    f,
                    "Unsorted input: x[{index}] is smaller than x[{}]",
                    index - 1
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidFraction(frac) => {
                write!(f, "Invalid fraction: {frac} (must be > 0 and <= 1)")
            }
            Self::InvalidDelta(delta) => write!(f, "Invalid delta: {delta} (must be >= 0)"),
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid iterations: {iter} (must be in [0, 1000])")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LowessError {}
