//! Crate-wide error type.

/// Errors produced by the helpers in this crate.
///
/// Every failure is local to a single call; nothing is retried or recovered
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rebin factor of zero cannot partition a histogram.
    #[error("rebin factor must be a positive integer")]
    InvalidRebinFactor,
    /// Weights and edges do not describe the same histogram.
    #[error("shape mismatch: {weights} weights vs {edges} edges")]
    ShapeMismatch { weights: usize, edges: usize },
    /// The central value cannot be decomposed (zero or non-finite).
    #[error("cannot extract scientific notation for value {0}")]
    InvalidValue(f64),
    /// The uncertainty is not a positive finite number.
    #[error("invalid uncertainty {0}: must be positive and finite")]
    InvalidUncertainty(f64),
    /// The assembled data path glob pattern was rejected.
    #[error("invalid data path pattern")]
    Pattern(#[from] glob::PatternError),
}
