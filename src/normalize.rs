use crate::types::RationalError;

/// Greatest common divisor by Euclid's remainder chain.
///
/// `b` must be non-zero. Remainders are truncated (`%`), so the sign of the
/// result follows the last non-zero remainder rather than being forced positive.
fn gcd(a: i64, b: i64) -> Result<i64, RationalError> {
    debug_assert!(b != 0, "gcd called with a zero divisor");
    let r = a.checked_rem(b).ok_or(RationalError::Overflow)?;
    if r == 0 { Ok(b) } else { gcd(b, r) }
}

/// Reduces a numerator/denominator pair to lowest terms
///
/// # Returns
/// * `Err(RationalError::ZeroDenominator)` - if `denominator` is zero
/// * `Err(RationalError::Overflow)` - if a remainder or quotient overflows,
///   which only happens when `i64::MIN` meets `-1`
pub(crate) fn normalize(numerator: i64, denominator: i64) -> Result<(i64, i64), RationalError> {
    if denominator == 0 {
        return Err(RationalError::ZeroDenominator);
    }
    let d = gcd(numerator, denominator)?;
    let numerator = numerator.checked_div(d).ok_or(RationalError::Overflow)?;
    let denominator = denominator.checked_div(d).ok_or(RationalError::Overflow)?;
    Ok((numerator, denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), Ok(6));
        assert_eq!(gcd(18, 12), Ok(6));
        assert_eq!(gcd(7, 13), Ok(1));
        assert_eq!(gcd(0, 5), Ok(5));
    }

    #[test]
    fn test_normalize_lowest_terms() {
        assert_eq!(normalize(4, 6), Ok((2, 3)));
        assert_eq!(normalize(6, 3), Ok((2, 1)));
        assert_eq!(normalize(0, 9), Ok((0, 1)));
        assert_eq!(normalize(17, 5), Ok((17, 5)));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for (n, d) in [(4, 6), (100, 75), (81, 27), (13, 39), (1, 1)] {
            let once = normalize(n, d).unwrap();
            assert_eq!(normalize(once.0, once.1), Ok(once));
        }
    }

    #[test]
    fn test_normalize_negative_signs() {
        // Sign placement follows the remainder chain.
        assert_eq!(normalize(-2, 4), Ok((1, -2)));
        assert_eq!(normalize(2, -4), Ok((1, -2)));
        assert_eq!(normalize(-1, -2), Ok((1, 2)));
        assert_eq!(normalize(-2, 3), Ok((-2, 3)));
    }

    #[test]
    fn test_normalize_errors() {
        assert_eq!(normalize(3, 0), Err(RationalError::ZeroDenominator));
        assert_eq!(normalize(i64::MIN, -1), Err(RationalError::Overflow));
    }
}
