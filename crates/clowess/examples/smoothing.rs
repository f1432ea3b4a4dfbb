//! LOWESS Smoothing Examples
//!
//! This example walks through the three ways to run the smoother:
//! - Batch adapter on unordered data, with residuals and robustness weights
//! - Direct call on sorted data, comparing plain and robust fits
//! - Evenly spaced series through the even-grid adapter

#[cfg(feature = "std")]
use clowess::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), LowessError> {
    println!("{}", "=".repeat(72));
    println!("LOWESS Smoothing Examples");
    println!("{}", "=".repeat(72));
    println!();

    example_1_batch_with_outlier()?;
    example_2_direct_call()?;
    example_3_even_grid()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

/// Noisy sine wave sampled at irregular abscissas.
#[cfg(feature = "std")]
fn noisy_series(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.5 + ((i * 37) % 7) as f64 * 0.05).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &v)| v.sin() + if i % 3 == 0 { 0.15 } else { -0.1 })
        .collect();
    (x, y)
}

/// Example 1: Batch smoothing with an outlier.
/// Input is shuffled; the result comes back in the caller's order.
#[cfg(feature = "std")]
fn example_1_batch_with_outlier() -> Result<(), LowessError> {
    println!("Example 1: Batch Smoothing with an Outlier");
    println!("{}", "-".repeat(72));

    let (mut x, mut y) = noisy_series(30);
    y[12] += 8.0;
    x.reverse();
    y.reverse();

    let model = Lowess::new()
        .fraction(0.3)
        .iterations(3)
        .return_residuals()
        .return_robustness_weights()
        .adapter(Batch)
        .build()?;

    let result = model.fit(&x, &y)?;
    println!("{}", result);

    if let Some(weights) = &result.robustness_weights {
        let rejected = weights.iter().filter(|&&w| w == 0.0).count();
        println!("Points rejected by the robustness passes: {}", rejected);
    }

    println!();
    Ok(())
}

/// Example 2: Direct call on sorted data.
#[cfg(feature = "std")]
fn example_2_direct_call() -> Result<(), LowessError> {
    println!("Example 2: Direct Call");
    println!("{}", "-".repeat(72));

    let (x, y) = noisy_series(40);

    let plain = lowess_core(&x, &y, 0.25, 0, 0.0)?;
    let robust = lowess_core(&x, &y, 0.25, 2, 0.2)?;

    println!("{:>8} {:>10} {:>10} {:>10}", "X", "Y", "Plain", "Robust");
    for i in (0..x.len()).step_by(5) {
        println!(
            "{:>8.2} {:>10.4} {:>10.4} {:>10.4}",
            x[i], y[i], plain.ys[i], robust.ys[i]
        );
    }

    // Unsorted input is an error here; use the batch adapter instead
    if let Err(err) = lowess_core(&[2.0, 1.0], &[0.0, 0.0], 0.5, 0, 0.0) {
        println!("Unsorted input: {}", err);
    }

    println!();
    Ok(())
}

/// Example 3: Evenly spaced series.
/// Out-of-range parameters are clamped rather than rejected.
#[cfg(feature = "std")]
fn example_3_even_grid() -> Result<(), LowessError> {
    println!("Example 3: Even Grid");
    println!("{}", "-".repeat(72));

    let y: Vec<f64> = (0..64)
        .map(|i| (i as f64 / 10.0).cos() + if i % 4 == 0 { 0.3 } else { -0.1 })
        .collect();

    let model = Lowess::new().adapter(EvenGrid).build()?;
    let smooth = model.fit(&y);

    // fraction 1.5 falls back to 0.1, delta 0.2 is raised to 1
    let clamped = lowess_even(&y, 1.5, 0.2, 1);

    for i in (0..y.len()).step_by(8) {
        println!(
            "{:>4} {:>10.4} {:>10.4} {:>10.4}",
            i, y[i], smooth[i], clamped[i]
        );
    }

    println!();
    Ok(())
}
