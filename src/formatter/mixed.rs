use std::fmt;

use crate::types::Rational;

/// Display adapter rendering a rational as a mixed number
///
/// Created by [`Rational::mixed`].
#[derive(Debug, Clone, Copy)]
pub struct Mixed<'a>(&'a Rational);

impl fmt::Display for Mixed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numerator, denominator) = (self.0.numerator(), self.0.denominator());
        if self.0.is_degenerate() {
            return f.write_str("0");
        }
        if numerator < denominator {
            return write!(f, "{}/{}", numerator, denominator);
        }

        let whole = numerator / denominator;
        let remainder = numerator % denominator;
        if whole != 0 {
            write!(f, "{}", whole)?;
        }
        if whole != 0 && remainder != 0 {
            f.write_str(" ")?;
        }
        if remainder != 0 {
            write!(f, "{}/{}", remainder, denominator)?;
        }
        Ok(())
    }
}

/// Format a rational as a mixed number such as `"1 1/2"`
///
/// Proper fractions render as `numerator/denominator`. Otherwise the whole part
/// is written first, followed by the remaining fraction; either piece is left
/// out when it is zero, so `6/3` renders as `"2"`.
///
/// # Arguments
/// * `value` - The rational to format
///
/// # Returns
/// * `String` - The mixed number, or `"0"` for degenerate values
///
/// # Examples
/// ```
/// use rational::Rational;
/// use rational::formatter::format_mixed;
///
/// assert_eq!(format_mixed(&Rational::new(7, 4)), "1 3/4");
/// assert_eq!(format_mixed(&Rational::new(6, 3)), "2");
/// ```
pub fn format_mixed(value: &Rational) -> String {
    value.mixed().to_string()
}

impl Rational {
    /// Display adapter for the mixed-number form
    pub fn mixed(&self) -> Mixed<'_> {
        Mixed(self)
    }

    /// Render as a mixed number; see [`format_mixed`]
    pub fn to_mixed_string(&self) -> String {
        format_mixed(self)
    }
}
