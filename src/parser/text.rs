use std::str::FromStr;

use log::debug;
use winnow::Parser;

use crate::parser::combinators::{parse_decimal, parse_fraction, parse_integer};
use crate::types::{Rational, RationalError};

/// Tabs and Unicode space separators; line breaks are not trimmed
fn is_horizontal_space(c: char) -> bool {
    c == '\t' || (c.is_whitespace() && !c.is_control() && !matches!(c, '\u{2028}' | '\u{2029}'))
}

/// Parse a fraction string into a `Rational`
///
/// Three shapes are accepted:
/// * `"<whole> <numerator>/<denominator>"`, e.g. `"1 1/2"`
/// * `"<numerator>/<denominator>"`, e.g. `"3/4"`
/// * a decimal literal, e.g. `"0.75"`, approximated as a continued fraction
///
/// Letters and minus signs are never accepted, so negative values cannot be
/// parsed. Malformed input yields `None`; this function never panics.
///
/// # Examples
/// ```
/// use rational::parser::parse_rational;
///
/// let value = parse_rational("1 1/2").unwrap();
/// assert_eq!((value.numerator(), value.denominator()), (3, 2));
/// assert!(parse_rational("1/g").is_none());
/// ```
pub fn parse_rational(input: &str) -> Option<Rational> {
    let parsed = parse_components(input);
    if parsed.is_none() {
        debug!("rejected fraction string '{}'", input);
    }
    parsed
}

fn parse_components(input: &str) -> Option<Rational> {
    if input.chars().any(char::is_alphabetic) || input.contains('-') {
        return None;
    }

    let components: Vec<&str> = input.trim_matches(is_horizontal_space).split(' ').collect();
    match components.as_slice() {
        [whole, fraction] => parse_mixed(whole, fraction),
        [token] => parse_single(token),
        _ => None,
    }
}

/// `"<whole> <numerator>/<denominator>"`
fn parse_mixed(whole: &str, fraction: &str) -> Option<Rational> {
    if whole.contains(['/', '.']) || fraction.contains('.') || !fraction.contains('/') {
        return None;
    }

    // Only the first two `/`-separated parts count; anything after is ignored
    let mut parts = fraction.split('/');
    let numerator = parse_integer.parse(parts.next()?).ok()?;
    let denominator = parse_integer.parse(parts.next()?).ok()?;
    let whole = parse_integer.parse(whole).ok()?;
    let numerator = whole.checked_mul(denominator)?.checked_add(numerator)?;
    Rational::try_new(numerator, denominator).ok()
}

/// A decimal literal, or `"<numerator>/<denominator>"`
fn parse_single(token: &str) -> Option<Rational> {
    if let Ok(value) = parse_decimal.parse(token) {
        return Rational::try_from(value).ok();
    }

    if token.split('/').count() != 2 || token.contains('.') {
        return None;
    }
    let (numerator, denominator) = parse_fraction.parse(token).ok()?;
    Rational::try_new(numerator, denominator).ok()
}

impl Rational {
    /// Parse a fraction string, returning `None` for malformed input
    ///
    /// See [`parse_rational`] for the accepted shapes.
    pub fn parse(input: &str) -> Option<Self> {
        parse_rational(input)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rational(s).ok_or_else(|| RationalError::InvalidInput(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(input: &str) -> Option<(i64, i64)> {
        parse_rational(input).map(|r| (r.numerator(), r.denominator()))
    }

    #[test]
    fn test_simple_fraction() {
        assert_eq!(pair("1/2"), Some((1, 2)));
        assert_eq!(pair("4/6"), Some((2, 3)));
        assert_eq!(pair("  3/4\t"), Some((3, 4)));
    }

    #[test]
    fn test_mixed_number() {
        assert_eq!(pair("1 1/2"), Some((3, 2)));
        assert_eq!(pair("2 3/4"), Some((11, 4)));
        assert_eq!(pair("0 2/4"), Some((1, 2)));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(pair("0.5"), Some((1, 2)));
        assert_eq!(pair("1.5"), Some((3, 2)));
        assert_eq!(pair("3"), Some((3, 1)));
        assert_eq!(pair("0.666667"), Some((2, 3)));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(pair(""), None);
        assert_eq!(pair("   "), None);
        assert_eq!(pair("blah"), None);
        assert_eq!(pair("1/g"), None);
        assert_eq!(pair("-1/2"), None);
        assert_eq!(pair("1 - 1/2"), None);
        assert_eq!(pair("1 1/2 3"), None);
        assert_eq!(pair("1  1/2"), None);
        assert_eq!(pair("1/2/3"), None);
        assert_eq!(pair("1.5/2"), None);
    }

    #[test]
    fn test_mixed_rejections() {
        assert_eq!(pair("1/2 1/2"), None);
        assert_eq!(pair("1.0 1/2"), None);
        assert_eq!(pair("1 1.5/2"), None);
        assert_eq!(pair("1 2"), None);
        assert_eq!(pair("1 1/"), None);
        assert_eq!(pair("1 /2"), None);
        assert_eq!(pair("1 1//3"), None);
    }

    #[test]
    fn test_mixed_ignores_extra_slashes() {
        assert_eq!(pair("1 1/2/3"), Some((3, 2)));
        assert_eq!(pair("2 1/4/"), Some((9, 4)));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(pair("01/02"), Some((1, 2)));
        assert_eq!(pair("1/02"), Some((1, 2)));
        assert_eq!(pair("1 01/2"), Some((3, 2)));
        assert_eq!(pair("01 1/2"), Some((3, 2)));
        assert_eq!(pair("007"), Some((7, 1)));
    }

    #[test]
    fn test_zero_denominator_is_absent() {
        assert_eq!(pair("1/0"), None);
        assert_eq!(pair("2 1/0"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("3/9".parse::<Rational>(), Ok(Rational::new(1, 3)));
        assert_eq!(
            "x".parse::<Rational>(),
            Err(RationalError::InvalidInput("x".to_string()))
        );
    }
}
