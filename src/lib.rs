//! Runplot crate root: re-exports and module wiring.
//!
//! Helper routines for plotting experiment run data:
//! - `histogram`: integer-factor rebinning of weighted histograms
//! - `sci_notation`: `value(uncertainty)` scientific-notation decomposition
//!   and rendering
//! - `tick_formatter`: uncertainty-aware axis tick labels for egui_plot
//! - `data_paths`: discovery of RAW data files for numbered runs

pub mod data_paths;
pub mod error;
pub mod histogram;
pub mod sci_notation;
pub mod tick_formatter;

// Public re-exports for a compact external API
pub use data_paths::RunDataLayout;
pub use error::Error;
pub use histogram::Histogram;
pub use sci_notation::SciNotation;
pub use tick_formatter::UncertaintyFormatter;
