//! Uncertainty-aware tick labels for egui_plot axes.

use std::ops::RangeInclusive;

use egui_plot::GridMark;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::sci_notation::SciNotation;

/// Formats axis tick values as `value(uncertainty)` scientific notation with
/// a fixed absolute uncertainty.
///
/// The uncertainty is part of the formatter instance: configure it once for
/// the render pass instead of mutating shared state between passes.
///
/// # Example
/// ```
/// # use runplot::tick_formatter::UncertaintyFormatter;
/// let fmt = UncertaintyFormatter::new(0.5).unwrap();
/// assert_eq!(fmt.format(0.0), "$0$");
/// assert_eq!(fmt.format(123.4), "$123.40(50)$");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyFormatter {
    uncertainty: f64,
}

impl UncertaintyFormatter {
    /// Create a formatter with the given absolute uncertainty.
    ///
    /// Returns [`Error::InvalidUncertainty`] unless `uncertainty` is positive
    /// and finite.
    pub fn new(uncertainty: f64) -> Result<Self, Error> {
        if uncertainty <= 0.0 || !uncertainty.is_finite() {
            return Err(Error::InvalidUncertainty(uncertainty));
        }
        Ok(Self { uncertainty })
    }

    /// The configured absolute uncertainty.
    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// Format a single tick value.
    ///
    /// Exactly zero renders as the literal `$0$`; non-finite values fall back
    /// to the default float rendering.
    pub fn format(&self, value: f64) -> String {
        if value == 0.0 {
            return "$0$".to_string();
        }
        match SciNotation::extract(value, self.uncertainty) {
            Ok(notation) => notation.to_string(),
            Err(_) => format!("{value}"),
        }
    }

    /// Produce a tick-formatter closure for
    /// [`egui_plot::Plot::x_axis_formatter`] /
    /// [`y_axis_formatter`](egui_plot::Plot::y_axis_formatter).
    ///
    /// The visible-range argument is ignored; labels depend only on the tick
    /// value and the configured uncertainty.
    pub fn axis_formatter(self) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
        move |mark, _range| self.format(mark.value)
    }
}
