//! Reference tests for LOWESS smoothing through the public API.
//!
//! These tests pin the smoother to known published values:
//! - The classic 20-point scatter with ties (fraction 0.25)
//! - The 64-point evenly spaced series (fraction 0.1, delta 3.2)
//! - Exact reproduction of linear data
//!
//! ## Test Organization
//!
//! 1. **Reference Fixture** - Plain, delta-skipping and robust fits
//! 2. **Delta Invariance** - Directly fitted points do not depend on delta
//! 3. **Degenerate Input** - Single point, two points
//! 4. **Linear Data** - Round trip within 1e-9
//! 5. **Even Grid** - Published 64-point result

use approx::{assert_abs_diff_eq, assert_relative_eq};

use clowess::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

fn fixture_x() -> Vec<f64> {
    let mut x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    x.extend(std::iter::repeat_n(6.0, 10));
    x.extend([8.0, 10.0, 12.0, 14.0, 50.0]);
    x
}

fn fixture_y() -> Vec<f64> {
    vec![
        18.0, 2.0, 15.0, 6.0, 10.0, 4.0, 16.0, 11.0, 7.0, 3.0, 14.0, 17.0, 20.0, 12.0, 9.0, 13.0,
        1.0, 8.0, 5.0, 19.0,
    ]
}

fn with_ties(head: &[f64], tie: f64, tail: &[f64]) -> Vec<f64> {
    let mut v = head.to_vec();
    v.extend(std::iter::repeat_n(tie, 10));
    v.extend_from_slice(tail);
    v
}

fn assert_all_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "index {i}: got {a}, expected {e} (tol {tol})"
        );
    }
}

// ============================================================================
// Reference Fixture Tests
// ============================================================================

/// Test the plain fit (no robustness, no skipping).
#[test]
fn test_reference_fixture_plain() {
    let out = lowess_core(&fixture_x(), &fixture_y(), 0.25, 0, 0.0).unwrap();

    let expected = with_ties(
        &[13.659, 11.145, 8.701, 9.722, 10.000],
        11.300,
        &[13.000, 6.440, 5.596, 5.456, 18.998],
    );
    assert_all_close(&out.ys, &expected, 1e-3);

    // No robustness pass: all weights stay at one
    assert!(out.rw.iter().all(|&w| w == 1.0));
}

/// Test the fit with delta skipping.
#[test]
fn test_reference_fixture_delta() {
    let out = lowess_core(&fixture_x(), &fixture_y(), 0.25, 0, 3.0).unwrap();

    let expected = with_ties(
        &[13.659, 12.347, 11.034, 9.722, 10.511],
        11.300,
        &[13.000, 6.440, 5.596, 5.456, 18.998],
    );
    assert_all_close(&out.ys, &expected, 1e-3);
}

/// Test the robust fit with two robustness iterations.
#[test]
fn test_reference_fixture_robust() {
    let x = fixture_x();
    let y = fixture_y();
    let out = lowess_core(&x, &y, 0.25, 2, 0.0).unwrap();

    let expected = with_ties(
        &[14.811, 12.115, 8.984, 9.676, 10.000],
        11.346,
        &[13.000, 6.734, 5.744, 5.415, 18.998],
    );
    assert_all_close(&out.ys, &expected, 1e-3);

    // Weights from the last robustness update
    let expected_rw = [
        0.946554, 0.639695, 0.846381, 0.943862, 1.0, 0.786982, 0.910539, 0.999539, 0.922754,
        0.729702, 0.970308, 0.869577, 0.709262, 0.998122, 0.977302, 1.0, 0.870024, 0.977994,
        0.999252, 1.0,
    ];
    assert_all_close(&out.rw, &expected_rw, 1e-5);

    for i in 0..x.len() {
        assert_relative_eq!(out.res[i], y[i] - out.ys[i], epsilon = 1e-12);
    }
}

// ============================================================================
// Delta Invariance Tests
// ============================================================================

/// Test that points fitted directly in both runs are bitwise identical.
///
/// With delta = 3 the anchors are 0, 3, 14..19. Points 5..=13 are tied with
/// 14 and copied from it, so the whole range 5..=19 must match exactly.
#[test]
fn test_delta_invariance_at_fitted_points() {
    let x = fixture_x();
    let y = fixture_y();
    let plain = lowess_core(&x, &y, 0.25, 0, 0.0).unwrap();
    let skipped = lowess_core(&x, &y, 0.25, 0, 3.0).unwrap();

    let shared: Vec<usize> = [0, 3].into_iter().chain(5..20).collect();
    for i in shared {
        assert_eq!(plain.ys[i], skipped.ys[i], "index {i} differs");
    }
}

/// Test that delta skipping reduces the number of direct fits.
#[test]
fn test_delta_reduces_fits() {
    let x = fixture_x();
    let y = fixture_y();

    let plain = Lowess::new()
        .fraction(0.25)
        .iterations(0)
        .delta(0.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let skipped = Lowess::new()
        .fraction(0.25)
        .iterations(0)
        .delta(3.0)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(plain.fits, 11);
    assert_eq!(skipped.fits, 8);
    assert_eq!(plain.neighbors, 5);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test that a single point is returned unchanged.
#[test]
fn test_single_point() {
    let out = lowess_core(&[3.0], &[7.5], 0.5, 3, 0.0).unwrap();

    assert_eq!(out.ys, vec![7.5]);
    assert_eq!(out.rw, vec![1.0]);
    assert_eq!(out.res, vec![0.0]);
}

/// Test that two points are interpolated exactly.
#[test]
fn test_two_points() {
    let out = lowess_core(&[0.0, 1.0], &[1.0, 3.0], 0.1, 2, 0.0).unwrap();

    assert_abs_diff_eq!(out.ys[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out.ys[1], 3.0, epsilon = 1e-12);
}

/// Test that a series with a single distinct abscissa gives the mean.
#[test]
fn test_all_tied_abscissas() {
    let x = [2.0; 6];
    let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let out = lowess_core(&x, &y, 0.5, 0, 0.0).unwrap();

    // Zero bandwidth: every tied point gets weight one, the fit is the mean
    for &v in &out.ys {
        assert_relative_eq!(v, 3.5, epsilon = 1e-12);
    }
}

// ============================================================================
// Linear Data Tests
// ============================================================================

/// Test that linear data is reproduced for a range of parameters.
#[test]
fn test_linear_round_trip() {
    let x = [0.0, 1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 8.0, 9.0, 12.0];
    let y: Vec<f64> = x.iter().map(|&v| 2.5 * v - 1.0).collect();

    for &delta in &[0.0, 1.0, 4.0] {
        for &frac in &[0.3, 0.5, 0.9] {
            let out = lowess_core(&x, &y, frac, 0, delta).unwrap();
            for i in 0..x.len() {
                assert_abs_diff_eq!(out.ys[i], y[i], epsilon = 1e-9);
            }
        }
    }
}

// ============================================================================
// Even Grid Tests
// ============================================================================

#[rustfmt::skip]
const EVEN_Y: [f64; 64] = [
    -0.836854, -0.172280,   0.187117,   1.61544,  -0.176774,    0.653145,
    -0.546364,  0.194146,   0.925709,   1.20432,   1.53055,    -1.35556,
     0.0514889, 1.02018,   -1.22616,    0.708497,  0.871673,   -0.789721,
     0.332079,  0.205603,  -0.169367,  -0.318417, -0.295643,    0.522291,
    -2.23105,   0.258274,  -0.0877757, -1.64685,   0.286812,    0.299986,
     1.10391,   0.742706,  -0.157581,  -0.597687,  0.659809,   -0.0328137,
     1.16512,  -1.04800,    0.817815,  -1.40729,   0.519207,   -0.733439,
     0.325304, -0.0428672, -0.871454,   0.771570,  0.00988832, -0.894773,
    -0.649426, -0.00869429, 1.87727,   -2.47856,  -1.68368,    -0.764296,
     0.145749,  0.221329,   2.39680,    1.91128,   1.69614,     0.808025,
     2.78748,   0.0275070,  0.104824,   1.78011,
];

#[rustfmt::skip]
const EVEN_EXPECTED: [f64; 64] = [
    -0.77791489, -0.36606162,  0.04579164,  0.4576449,   0.35414759,  0.25065028,
     0.14715296,  0.40698497,  0.66681697,  0.92664898,  0.6450437,   0.36343843,
     0.08183315,  0.12254237,  0.16325159,  0.20396081,  0.14572313,  0.08748545,
     0.02924777, -0.02934921, -0.08794618, -0.14654316, -0.18142722, -0.21631129,
    -0.25119536, -0.25733781, -0.26348027, -0.26962273,  0.01774429,  0.3051113,
     0.59247832,  0.40541144,  0.21834456,  0.03127769,  0.08988462,  0.14849156,
     0.2070985,   0.07388618, -0.05932614, -0.19253847, -0.17348405, -0.15442962,
    -0.1353752,  -0.12315045, -0.11092569, -0.09870093, -0.18450075, -0.27030057,
    -0.35610039, -0.58174107, -0.80738175, -1.03302243, -0.70402216, -0.37502189,
    -0.04602162,  0.52206765,  1.09015692,  1.6582462,   1.45195496,  1.24566373,
     1.0393725,   1.03840063,  1.03742877,  1.0364569,
];

/// Test the published 64-point even-grid result.
#[test]
fn test_even_grid_reference() {
    let smooth = lowess_even(&EVEN_Y, 0.1, 3.2, 1);
    assert_all_close(&smooth, &EVEN_EXPECTED, 1e-3);
}

/// Test that the even-grid adapter defaults match the reference parameters.
#[test]
fn test_even_grid_adapter_defaults() {
    let model = Lowess::new().adapter(EvenGrid).build().unwrap();
    let smooth = model.fit(&EVEN_Y);

    assert_eq!(smooth, lowess_even(&EVEN_Y, 0.1, 3.2, 1));
}

/// Test that the even grid agrees with the direct call on explicit abscissas.
#[test]
fn test_even_grid_matches_core() {
    let x: Vec<f64> = (0..64).map(|i| i as f64).collect();
    let core = lowess_core(&x, &EVEN_Y, 0.1, 1, 3.2).unwrap();

    assert_eq!(lowess_even(&EVEN_Y, 0.1, 3.2, 1), core.ys);
}

/// Test single precision on the even grid.
#[test]
fn test_even_grid_f32() {
    let y: Vec<f32> = EVEN_Y.iter().map(|&v| v as f32).collect();
    let smooth = lowess_even(&y, 0.1, 3.2, 1);

    for (&a, &e) in smooth.iter().zip(EVEN_EXPECTED.iter()) {
        assert!((a as f64 - e).abs() < 1e-3, "got {a}, expected {e}");
    }
}
