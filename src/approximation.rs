//! Floating-point to rational conversion
//!
//! Values are approximated by expanding them as a continued fraction and
//! stopping at the first convergent `h/k` whose error relative to the input
//! is within the configured tolerance.

use log::{debug, trace};

use crate::settings::ApproximationSettings;
use crate::types::{Rational, RationalError};

/// 2^63 as an `f64`; every finite value strictly below it (and at or above its
/// negation) converts to `i64` without saturating.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn to_i64(value: f64) -> Option<i64> {
    let rounded = value.round();
    if rounded.is_finite() && (-I64_BOUND..I64_BOUND).contains(&rounded) {
        Some(rounded as i64)
    } else {
        None
    }
}

/// Returns the first convergent `(h, k)` of `value` within tolerance.
///
/// The stopping test scales the tolerance by `value` itself, not its absolute
/// value, so a negative non-integral input is never accepted and expansion
/// runs until the convergents overflow to infinity.
pub(crate) fn continued_fraction(
    value: f64,
    settings: &ApproximationSettings,
) -> Result<(i64, i64), RationalError> {
    if !value.is_finite() {
        return Err(RationalError::NotRepresentable(value));
    }

    // Integral input terminates the expansion with b - a == 0
    if value.fract() == 0.0 {
        return to_i64(value)
            .map(|n| (n, 1))
            .ok_or(RationalError::NotRepresentable(value));
    }

    let scale = value * settings.tolerance;
    let (mut h1, mut h2) = (1.0_f64, 0.0_f64);
    let (mut k1, mut k2) = (0.0_f64, 1.0_f64);
    let mut b = value;

    for iteration in 0..settings.max_iterations {
        let a = b.floor();
        (h1, h2) = (a * h1 + h2, h1);
        (k1, k2) = (a * k1 + k2, k1);
        b = 1.0 / (b - a);
        trace!("convergent {}: {}/{} (term {})", iteration, h1, k1, a);

        if !h1.is_finite() || !k1.is_finite() {
            break;
        }
        if (value - h1 / k1).abs() <= scale {
            return match (to_i64(h1), to_i64(k1)) {
                (Some(h), Some(k)) => Ok((h, k)),
                _ => Err(RationalError::NotRepresentable(value)),
            };
        }
    }

    debug!("no convergent for {} within {} terms", value, settings.max_iterations);
    Err(RationalError::NotRepresentable(value))
}

impl Rational {
    /// Approximates a floating-point value using the given settings
    ///
    /// # Arguments
    /// * `value` - The value to approximate
    /// * `settings` - Tolerance and iteration limit for the expansion
    ///
    /// # Returns
    /// * `Result<Rational, RationalError>` - The reduced convergent, or
    ///   `NotRepresentable` for NaN, infinities, negative non-integral values,
    ///   and values whose convergents leave the `i64` range
    pub fn approximate(
        value: f64,
        settings: &ApproximationSettings,
    ) -> Result<Self, RationalError> {
        let (numerator, denominator) = continued_fraction(value, settings)?;
        Rational::try_new(numerator, denominator)
    }

    /// Approximates a floating-point value with the default settings
    ///
    /// # Panics
    /// Panics if the value cannot be approximated; see [`Rational::approximate`].
    ///
    /// # Examples
    /// ```
    /// use rational::Rational;
    ///
    /// assert_eq!(Rational::from_f64(1.5), Rational::new(3, 2));
    /// assert_eq!(Rational::from_f64(0.666667), Rational::new(2, 3));
    /// ```
    pub fn from_f64(value: f64) -> Self {
        match Rational::try_from(value) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl TryFrom<f64> for Rational {
    type Error = RationalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rational::approximate(value, ApproximationSettings::embedded())
    }
}
