//! Layer 3: Algorithms
//!
//! This layer implements the core logic for local weighted regression, robustness
//! updates, and interpolation. It contains the "business logic" of LOWESS
//! but is orchestrated by the engine layer.

// Local weighted regression at a single abscissa.
pub mod regression;

// Robustness weight updates for outlier downweighting.
pub mod robustness;

// Interpolation and delta skipping utilities.
pub mod interpolation;
