//! Example: Rebin a histogram and label its contents
//!
//! What it demonstrates
//! - Merging fine histogram bins into coarser ones with `Histogram::rebin`.
//! - Rendering bin contents as `value(uncertainty)` labels with
//!   `UncertaintyFormatter` (the same formatter that drives egui_plot axis
//!   ticks via `axis_formatter()`).
//!
//! How to run
//! ```bash
//! cargo run --example rebin_labels
//! ```
//! Prints the rebinned bins with their label strings to stdout.

use runplot::{Histogram, UncertaintyFormatter};

fn main() {
    env_logger::init();

    let weights = vec![12.0, 7.0, 3.0, 41.0, 25.0, 9.0, 4.0];
    let edges = (0..=7).map(f64::from).collect();
    let hist = Histogram::new(weights, edges).expect("weights and edges line up");

    let coarse = hist.rebin(2).expect("positive rebin factor");
    println!("total counts: {}", coarse.total());

    let labels = UncertaintyFormatter::new(0.5).expect("positive uncertainty");
    for (i, (w, lo)) in coarse
        .weights()
        .iter()
        .zip(coarse.edges())
        .enumerate()
    {
        println!("bin {i} [{lo}, ..): {}", labels.format(*w));
    }
}
