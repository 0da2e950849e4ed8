//! Scientific-notation decomposition and rendering for measured values.
//!
//! Converts a central value and its absolute uncertainty into the
//! `value(uncertainty)` notation used in physics publications: the value is
//! rounded so its last digit lines up with the uncertainty's last significant
//! digit, and the uncertainty is printed as an integer in units of that
//! digit, e.g. `$123.40(50)$` or `$1.2346(12)\times10^{4}$`.

use std::fmt;

use crate::error::Error;

// ─────────────────────────────────────────────────────────────────────────────
// SciNotation
// ─────────────────────────────────────────────────────────────────────────────

/// Decomposition of a value and its absolute uncertainty into scientific
/// notation with two significant uncertainty digits.
///
/// Produced by [`SciNotation::extract`] and consumed immediately by its
/// [`Display`](std::fmt::Display) impl; the struct has no identity beyond a
/// single format call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SciNotation {
    /// Value scaled so the leading digit sits just left of the decimal point,
    /// rounded to [`decimals`](Self::decimals) places.
    pub mantissa: f64,
    /// Uncertainty expressed as an integer in units of the last displayed
    /// digit of the mantissa (two significant digits, so `11..=100`).
    pub uncertainty: u32,
    /// Power of ten restoring the original magnitude.
    pub exponent: i32,
    /// Decimal places retained in the mantissa.
    pub decimals: i32,
}

impl SciNotation {
    /// Decompose `value` ± `uncertainty`.
    ///
    /// `value` must be non-zero and finite ([`Error::InvalidValue`]) and
    /// `uncertainty` positive and finite ([`Error::InvalidUncertainty`]).
    /// Exact zero is a display-level concern handled by
    /// [`UncertaintyFormatter`](crate::tick_formatter::UncertaintyFormatter),
    /// not a valid decomposition.
    ///
    /// ```
    /// # use runplot::sci_notation::SciNotation;
    /// let n = SciNotation::extract(123.4, 0.5).unwrap();
    /// assert_eq!(n.exponent, 2);
    /// assert_eq!(n.uncertainty, 50);
    /// assert!((n.mantissa - 1.234).abs() < 1e-12);
    /// ```
    pub fn extract(value: f64, uncertainty: f64) -> Result<Self, Error> {
        if value == 0.0 || !value.is_finite() {
            return Err(Error::InvalidValue(value));
        }
        if uncertainty <= 0.0 || !uncertainty.is_finite() {
            return Err(Error::InvalidUncertainty(uncertainty));
        }

        // Leading-digit position of the value; position of the uncertainty's
        // second significant digit.
        let exponent = value.abs().log10().ceil() as i32 - 1;
        let dexponent = uncertainty.log10().ceil() as i32 - 2;

        let uncertainty = (uncertainty / 10f64.powi(dexponent)).round_ties_even() as u32;
        let decimals = exponent - dexponent;
        let mantissa = round_to(value / 10f64.powi(exponent), decimals);

        Ok(Self {
            mantissa,
            uncertainty,
            exponent,
            decimals,
        })
    }
}

impl fmt::Display for SciNotation {
    /// Render as `$V(U)$` when the exponent is 0, 1 or 2 (the value is shown
    /// at its natural magnitude) and `$M(U)\times10^{E}$` otherwise.
    ///
    /// The printed precision always puts the value's last digit in the same
    /// decimal position as the uncertainty's last significant digit; trailing
    /// zeros are produced by fixed-precision formatting rather than by
    /// patching the default float rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=2).contains(&self.exponent) {
            let places = (self.decimals - self.exponent).max(0) as usize;
            let value = self.mantissa * 10f64.powi(self.exponent);
            write!(f, "${:.*}({})$", places, value, self.uncertainty)
        } else {
            let places = self.decimals.max(0) as usize;
            write!(
                f,
                "${:.*}({})\\times10^{{{}}}$",
                places, self.mantissa, self.uncertainty, self.exponent
            )
        }
    }
}

/// Round to a signed number of decimal places (negative rounds left of the
/// decimal point), ties to even.
///
/// ```
/// # use runplot::sci_notation::round_to;
/// assert_eq!(round_to(1.23456, 4), 1.2346);
/// assert_eq!(round_to(125.0, -1), 120.0);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if decimals >= 0 {
        let scale = 10f64.powi(decimals);
        (value * scale).round_ties_even() / scale
    } else {
        let scale = 10f64.powi(-decimals);
        (value / scale).round_ties_even() * scale
    }
}
