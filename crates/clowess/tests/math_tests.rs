#![cfg(feature = "dev")]
//! Tests for the math layer.
//!
//! ## Test Organization
//!
//! 1. **Tricube Kernel** - Shape, symmetry and support
//! 2. **Window Weights** - Saturation, tie scanning, robustness scaling
//! 3. **Middle Order Statistics** - Odd, even and degenerate inputs

use approx::assert_relative_eq;

use clowess::internals::math::kernel::{compute_window_weights, tricube};
use clowess::internals::math::scaling::middle_abs_pair;

// ============================================================================
// Tricube Kernel Tests
// ============================================================================

/// Test the tricube shape at reference points.
#[test]
fn test_tricube_values() {
    assert_relative_eq!(tricube(0.0f64), 1.0);
    assert_relative_eq!(tricube(0.5f64), 0.669921875, epsilon = 1e-15);
    assert_relative_eq!(tricube(1.0f64), 0.0);
    assert_relative_eq!(tricube(2.5f64), 0.0);
}

/// Test symmetry K(u) = K(-u).
#[test]
fn test_tricube_symmetric() {
    for &u in &[0.1f64, 0.3, 0.77, 0.999] {
        assert_relative_eq!(tricube(u), tricube(-u), epsilon = 1e-15);
    }
}

// ============================================================================
// Window Weight Tests
// ============================================================================

/// Test that the scan runs past the nominal window to absorb ties.
///
/// Target x = 3 with window [1, 3]: the two further points tied at x = 3
/// carry full weight and the scan stops at the first far point (x = 10).
#[test]
fn test_window_weights_absorb_ties() {
    let x = [0.0, 1.0, 2.0, 3.0, 3.0, 3.0, 10.0];
    let mut weights = [9.0; 7];

    let h = 2.0;
    let (sum, rightmost) =
        compute_window_weights(&x, 1, 3.0, h, 0.001 * h, 0.999 * h, None, &mut weights);

    assert_eq!(rightmost, 5);
    assert_relative_eq!(weights[1], 0.0);
    assert_relative_eq!(weights[2], 0.669921875, epsilon = 1e-15);
    assert_relative_eq!(weights[3], 1.0);
    assert_relative_eq!(weights[4], 1.0);
    assert_relative_eq!(weights[5], 1.0);
    assert_relative_eq!(sum, 3.669921875, epsilon = 1e-15);
    // Far point is zeroed, points past it are left alone
    assert_relative_eq!(weights[6], 0.0);
    assert_relative_eq!(weights[0], 9.0);
}

/// Test that robustness weights scale the kernel weights.
#[test]
fn test_window_weights_robustness() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let rw = [1.0, 0.5, 0.0, 0.25, 1.0];
    let mut weights = [0.0; 5];

    let h = 2.0;
    let (sum, rightmost) =
        compute_window_weights(&x, 0, 2.0, h, 0.001 * h, 0.999 * h, Some(&rw), &mut weights);

    // Both edges sit exactly at the bandwidth and get zero weight
    assert_eq!(rightmost, 3);
    assert_relative_eq!(weights[1], 0.5 * 0.669921875, epsilon = 1e-15);
    assert_relative_eq!(weights[2], 0.0);
    assert_relative_eq!(weights[3], 0.25 * 0.669921875, epsilon = 1e-15);
    assert_relative_eq!(sum, 0.75 * 0.669921875, epsilon = 1e-15);
}

/// Test zero bandwidth: only tied points carry weight.
#[test]
fn test_window_weights_zero_bandwidth() {
    let x = [1.0, 1.0, 1.0, 2.0];
    let mut weights = [0.0; 4];

    let (sum, rightmost) = compute_window_weights(&x, 0, 1.0, 0.0, 0.0, 0.0, None, &mut weights);

    assert_eq!(rightmost, 2);
    assert_relative_eq!(sum, 3.0);
}

// ============================================================================
// Middle Order Statistic Tests
// ============================================================================

/// Test even-length input: the two middle values differ.
#[test]
fn test_middle_abs_pair_even() {
    let mut vals = [-3.0f64, 1.0, -2.0, 4.0];
    let (lower, upper) = middle_abs_pair(&mut vals);

    assert_relative_eq!(lower, 2.0);
    assert_relative_eq!(upper, 3.0);
}

/// Test odd-length input: the median is returned twice.
#[test]
fn test_middle_abs_pair_odd() {
    let mut vals = [5.0f64, -1.0, 3.0, -100.0, 0.5];
    let (lower, upper) = middle_abs_pair(&mut vals);

    assert_relative_eq!(lower, 3.0);
    assert_relative_eq!(upper, 3.0);
}

#[test]
fn test_middle_abs_pair_degenerate() {
    let mut empty: [f64; 0] = [];
    assert_eq!(middle_abs_pair(&mut empty), (0.0, 0.0));

    let mut zeros = [0.0f64, 0.0, 0.0, 7.0];
    assert_eq!(middle_abs_pair(&mut zeros), (0.0, 0.0));
}
