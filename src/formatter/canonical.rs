use std::fmt;

use crate::types::Rational;

/// Format a rational as `numerator/denominator`
///
/// No whole part is split off, so `3/2` stays `"3/2"` and `2/1` stays `"2/1"`.
///
/// # Arguments
/// * `value` - The rational to format
///
/// # Returns
/// * `String` - The formatted fraction, or `"0"` for degenerate values
pub fn format_fraction(value: &Rational) -> String {
    value.to_string()
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_degenerate() {
            return f.write_str("0");
        }
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}
