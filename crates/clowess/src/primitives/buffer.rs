//! Working memory for LOWESS operations.
//!
//! ## Purpose
//!
//! Every top-level smoothing call allocates its buffers exactly once and
//! reuses them across all robustness passes. This module owns that memory.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: `SmoothBuffer` holds all scratch space for one call.
//! * **Reuse**: `prepare` resizes in place, so a buffer handed to several calls
//!   stabilizes at the largest size seen.
//!
//! ## Key concepts
//!
//! * **Slot**: A reusable vector wrapper with automatic capacity management.
//! * **SmoothBuffer**: Fitted values, residuals, robustness weights, kernel
//!   weights and the sort scratch used for the residual median.
//!
//! ## Invariants
//!
//! * After `prepare(n)` every slot has length `n`.
//! * Robustness weights start at 1.0, everything else at 0.0.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::{One, Zero};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Get a reference to the underlying vector.
    #[inline]
    pub fn as_vec(&self) -> &Vec<T> {
        &self.0
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }

    /// Consume the slot and return its vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// SmoothBuffer - Working Memory for the Smoothing Driver
// ============================================================================

/// Working memory for the smoothing driver.
#[derive(Debug, Clone)]
pub struct SmoothBuffer<T> {
    /// Current fitted values.
    pub y_smooth: Slot<T>,

    /// Robustness weights (recomputed between passes).
    pub robustness_weights: Slot<T>,

    /// Residuals buffer (y - y_smooth).
    pub residuals: Slot<T>,

    /// Kernel weights scratch buffer.
    pub weights: Slot<T>,

    /// Scratch for the residual median.
    pub scratch: Slot<T>,
}

impl<T> Default for SmoothBuffer<T> {
    fn default() -> Self {
        Self {
            y_smooth: Slot::default(),
            robustness_weights: Slot::default(),
            residuals: Slot::default(),
            weights: Slot::default(),
            scratch: Slot::default(),
        }
    }
}

impl<T: Clone> SmoothBuffer<T> {
    /// Create a buffer pre-allocated for `n` data points.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            y_smooth: Slot::new(n),
            robustness_weights: Slot::new(n),
            residuals: Slot::new(n),
            weights: Slot::new(n),
            scratch: Slot::new(n),
        }
    }

    /// Prepare buffers for a dataset of size `n`.
    pub fn prepare(&mut self, n: usize)
    where
        T: Zero + One,
    {
        self.y_smooth.as_vec_mut().assign(n, T::zero());
        self.robustness_weights.as_vec_mut().assign(n, T::one());
        self.residuals.as_vec_mut().assign(n, T::zero());
        self.weights.as_vec_mut().assign(n, T::zero());
        self.scratch.as_vec_mut().assign(n, T::zero());
    }
}

/// Helper trait to simplify resizing and filling vectors.
pub trait VecExt<T> {
    /// Resize the vector to `n` and fill with `val`.
    fn assign(&mut self, n: usize, val: T);
}

impl<T: Clone> VecExt<T> for Vec<T> {
    fn assign(&mut self, n: usize, val: T) {
        if self.len() != n {
            self.clear();
            self.resize(n, val);
        } else {
            self.fill(val);
        }
    }
}
