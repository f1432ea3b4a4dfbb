//! Robust scale estimation from residual magnitudes.
//!
//! The robustness step needs the median absolute residual. It is taken from
//! the two middle order statistics (the same element twice for odd lengths),
//! found by quickselect rather than a full sort.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Middle order statistics `(lower, upper)` of `|vals|`, 0-based ranks
// `(n - 1) / 2` and `n / 2`. Reorders `vals` in place.
pub fn middle_abs_pair<T: Float>(vals: &mut [T]) -> (T, T) {
    let n = vals.len();
    if n == 0 {
        return (T::zero(), T::zero());
    }

    for val in vals.iter_mut() {
        *val = val.abs();
    }

    let mid = n / 2;
    vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
    let upper = vals[mid];

    if n % 2 == 1 {
        return (upper, upper);
    }

    // Largest value of the lower half
    let mut lower = vals[0];
    let mut i = 1;
    while i < mid {
        if vals[i] > lower {
            lower = vals[i];
        }
        i += 1;
    }

    (lower, upper)
}
