//! Sorting utilities for LOWESS input data.
//!
//! ## Purpose
//!
//! The smoothing pass requires abscissas in ascending order. The batch
//! adapter accepts arbitrary order, so it sorts here, smooths, and maps the
//! results back.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting to preserve the relative order of equal x-values.
//! * **Efficiency**: Already-sorted input is detected and copied without sorting.
//!
//! ## Invariants
//!
//! * Sorted x-values are non-decreasing (inputs are validated finite beforehand).
//! * The index mapping is a valid permutation of `0..n`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Result of sorting input data by x-coordinates.
pub struct SortedData<T> {
    /// Sorted x-coordinates.
    pub x: Vec<T>,

    /// Y-coordinates reordered to match sorted x-coordinates.
    pub y: Vec<T>,

    /// Index mapping where `indices[sorted_pos] = original_pos`.
    pub indices: Vec<usize>,
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Index of the first element smaller than its predecessor, if any.
#[inline]
pub fn first_descent<T: Float>(x: &[T]) -> Option<usize> {
    x.windows(2).position(|w| w[1] < w[0]).map(|i| i + 1)
}

/// Sort input data by x-coordinates in ascending order.
#[inline]
pub fn sort_by_x<T: Float>(x: &[T], y: &[T]) -> SortedData<T> {
    let n = x.len();

    if first_descent(x).is_none() {
        return SortedData {
            x: x.to_vec(),
            y: y.to_vec(),
            indices: (0..n).collect(),
        };
    }

    // Only x and the index travel through the sort; y is gathered afterwards
    let mut pairs: Vec<(T, usize)> = x.iter().enumerate().map(|(i, &xi)| (xi, i)).collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    SortedData {
        x: pairs.iter().map(|p| p.0).collect(),
        y: pairs.iter().map(|p| y[p.1]).collect(),
        indices: pairs.iter().map(|p| p.1).collect(),
    }
}

/// Map sorted results back to the original input order in O(n) time.
#[inline]
pub fn unsort<T: Float>(sorted_values: &[T], indices: &[usize]) -> Vec<T> {
    let mut result = vec![T::zero(); indices.len()];

    for (sorted_idx, &orig_idx) in indices.iter().enumerate() {
        result[orig_idx] = sorted_values[sorted_idx];
    }

    result
}
