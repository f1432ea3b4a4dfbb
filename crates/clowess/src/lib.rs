//! # clowess: Robust Locally Weighted Scatterplot Smoothing
//!
//! A faithful LOWESS smoother after Cleveland (1979): tricube-weighted local
//! linear fits over a sliding window of nearest neighbors, bisquare
//! robustness passes, and delta skipping with linear interpolation for
//! dense data.
//!
//! ## What is LOWESS?
//!
//! LOWESS (Locally Weighted Scatterplot Smoothing) is a nonparametric regression
//! method that fits smooth curves through scatter plots. At each point, it fits
//! a weighted line using nearby data points, with weights decreasing smoothly
//! with distance. Robustness passes then downweight points with large
//! residuals so that outliers do not drag the curve.
//!
//! ## Quick Start
//!
//! ```rust
//! use clowess::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];
//!
//! // Build the model
//! let model = Lowess::new()
//!     .fraction(0.5)      // Use 50% of data for each local fit
//!     .iterations(3)      // 3 robustness iterations
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit(&x, &y)?;
//!
//! println!("{}", result);
//! # Result::<(), LowessError>::Ok(())
//! ```
//!
//! ### Direct calls
//!
//! [`lowess_core`](prelude::lowess_core) smooths data that is already sorted
//! and returns the fitted values, the robustness weights and the residuals.
//! Parameters are validated strictly:
//!
//! ```rust
//! use clowess::prelude::*;
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let y = [1.1, 1.9, 3.2, 3.9, 5.1, 5.8];
//!
//! let out = lowess_core(&x, &y, 0.5, 2, 0.0)?;
//! assert_eq!(out.ys.len(), 6);
//! assert!(lowess_core(&x, &y, 1.5, 2, 0.0).is_err());
//! # Result::<(), LowessError>::Ok(())
//! ```
//!
//! [`lowess_even`](prelude::lowess_even) smooths ordinates sampled on an even
//! grid. It never fails: an out-of-range fraction or delta is clamped and a
//! warning is logged through the `log` facade.
//!
//! ```rust
//! use clowess::prelude::*;
//!
//! let y: Vec<f64> = (0..50).map(|i| (i as f64 * 0.2).sin()).collect();
//! let smooth = lowess_even(&y, 0.1, 3.2, 1);
//! assert_eq!(smooth.len(), y.len());
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! clowess = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"
//! - Cleveland, W. S. (1981). "LOWESS: A Program for Smoothing Scatterplots by Robust Locally Weighted Regression"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - core LOWESS algorithms.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for LOWESS smoothing.
mod api;

// Standard LOWESS prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, EvenGrid},
        BatchLowess, EvenGridLowess, LowessBuilder as Lowess, LowessError, LowessResult, Smoothed,
        WeightedSums, lowess_core, lowess_even,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
