//! Weighted histograms and integer-factor rebinning.

use crate::error::Error;

/// A binned, weighted histogram: `N` bin weights plus `N + 1` bin edges.
///
/// Edges are expected to be strictly increasing; that is a caller-side
/// precondition, not a runtime check. The shape invariant
/// (`edges.len() == weights.len() + 1`) is enforced at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    weights: Vec<f64>,
    edges: Vec<f64>,
}

impl Histogram {
    /// Create a histogram from bin weights and edges.
    ///
    /// Returns [`Error::ShapeMismatch`] unless `edges` has exactly one more
    /// entry than `weights`.
    pub fn new(weights: Vec<f64>, edges: Vec<f64>) -> Result<Self, Error> {
        if edges.len() != weights.len() + 1 {
            return Err(Error::ShapeMismatch {
                weights: weights.len(),
                edges: edges.len(),
            });
        }
        Ok(Self { weights, edges })
    }

    /// Bin weights, in bin order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Bin edges; one more entry than [`weights`](Self::weights).
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.weights.len()
    }

    /// Sum of all bin weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Merge every `factor` consecutive bins into one.
    ///
    /// Output weights are group sums. When `factor` does not divide the bin
    /// count evenly, the trailing short group is summed as-is (equivalent to
    /// zero-padding on the right), so the output has `ceil(N / factor)` bins
    /// and the total weight is conserved.
    ///
    /// Output edges are every `factor`-th input edge; on non-exact division
    /// the final edge is synthesized as `last_kept_edge + factor`.
    ///
    /// # Edge-value assumption
    /// The synthesized trailing edge treats edge values as unit-spaced bin
    /// indices. With physical-unit edges (e.g. energy), that edge is off by
    /// the bin width; rescale edges before or after rebinning in that case.
    pub fn rebin(&self, factor: usize) -> Result<Histogram, Error> {
        if factor == 0 {
            return Err(Error::InvalidRebinFactor);
        }

        let weights: Vec<f64> = self
            .weights
            .chunks(factor)
            .map(|group| group.iter().sum())
            .collect();

        let mut edges: Vec<f64> = self.edges.iter().copied().step_by(factor).collect();
        if edges.len() == weights.len() {
            // The stride stopped one edge short of the padded final bin.
            let last = edges[edges.len() - 1];
            edges.push(last + factor as f64);
        } else {
            edges.truncate(weights.len() + 1);
        }

        Ok(Histogram { weights, edges })
    }
}
