//! Type definitions for rational values
//!
//! This module defines the `Rational` value type together with the error type
//! shared by every constructor and operator of the crate.

use std::fmt;

use crate::normalize::normalize;

/// Error type for rational construction and arithmetic
#[derive(Debug, Clone, PartialEq)]
pub enum RationalError {
    /// A numerator/denominator pair was supplied with a zero denominator
    ZeroDenominator,
    /// Division by (or the reciprocal of) a zero-valued rational
    DivisionByZero,
    /// An intermediate product, sum or quotient does not fit in `i64`
    Overflow,
    /// A floating-point value has no convergent within the approximation limits
    NotRepresentable(f64),
    /// A string did not match any of the accepted fraction shapes
    InvalidInput(String),
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::ZeroDenominator => write!(f, "denominator must not be zero"),
            RationalError::DivisionByZero => write!(f, "division by a zero-valued rational"),
            RationalError::Overflow => write!(f, "arithmetic overflow in 64-bit rational"),
            RationalError::NotRepresentable(value) => {
                write!(f, "cannot approximate {} as a 64-bit rational", value)
            }
            RationalError::InvalidInput(input) => write!(f, "invalid fraction string: '{}'", input),
        }
    }
}

impl std::error::Error for RationalError {}

/// An exact rational number stored as a pair of `i64`
///
/// Every checked constructor and every arithmetic operator stores the pair in
/// lowest terms, so structural equality is value equality:
///
/// ```
/// use rational::Rational;
///
/// assert_eq!(Rational::new(2, 3), Rational::new(4, 6));
/// assert_eq!(Rational::new(4, 6).numerator(), 2);
/// ```
///
/// The sign of the stored pair is whatever the Euclidean remainder chain
/// leaves behind; it is not moved onto the numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// The value `0/1`
    pub const ZERO: Rational = Rational::new_raw(0, 1);
    /// The value `1/1`
    pub const ONE: Rational = Rational::new_raw(1, 1);

    /// Creates a rational from a numerator and denominator, reduced to lowest terms
    ///
    /// # Panics
    /// Panics if `denominator` is zero, or if reduction overflows (only possible
    /// for pairs involving `i64::MIN`). Use [`Rational::try_new`] to get an error
    /// instead.
    ///
    /// # Examples
    /// ```
    /// use rational::Rational;
    ///
    /// let half = Rational::new(3, 6);
    /// assert_eq!((half.numerator(), half.denominator()), (1, 2));
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> Self {
        match Self::try_new(numerator, denominator) {
            Ok(value) => value,
            Err(e) => panic!("invalid rational {}/{}: {}", numerator, denominator, e),
        }
    }

    /// Creates a rational from a numerator and denominator, reduced to lowest terms
    ///
    /// # Returns
    /// * `Err(RationalError::ZeroDenominator)` - if `denominator` is zero
    /// * `Err(RationalError::Overflow)` - if reduction overflows `i64`
    pub fn try_new(numerator: i64, denominator: i64) -> Result<Self, RationalError> {
        let (numerator, denominator) = normalize(numerator, denominator)?;
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Stores the pair exactly as given, without reduction or validation
    ///
    /// This is the only way to hold a degenerate pair such as `0/0` or `5/0`.
    /// Both formatters render such values as `"0"`.
    pub const fn new_raw(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns `true` when either half of the pair is zero
    pub const fn is_degenerate(&self) -> bool {
        self.numerator == 0 || self.denominator == 0
    }

    /// The value with numerator and denominator swapped
    ///
    /// # Panics
    /// Panics if the value is zero. Use [`Rational::try_reciprocal`] to get an
    /// error instead.
    pub fn reciprocal(&self) -> Self {
        match self.try_reciprocal() {
            Ok(value) => value,
            Err(e) => panic!("no reciprocal of {}: {}", self, e),
        }
    }

    /// The value with numerator and denominator swapped, or an error for zero
    pub fn try_reciprocal(&self) -> Result<Self, RationalError> {
        Self::try_new(self.denominator, self.numerator).map_err(|e| match e {
            RationalError::ZeroDenominator => RationalError::DivisionByZero,
            other => other,
        })
    }

    /// Converts to the nearest `f64` by dividing numerator by denominator
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::ZERO
    }
}

impl From<i64> for Rational {
    /// Every integer is already in lowest terms over 1.
    fn from(value: i64) -> Self {
        Rational::new_raw(value, 1)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Rational::from(i64::from(value))
    }
}

impl From<u32> for Rational {
    fn from(value: u32) -> Self {
        Rational::from(i64::from(value))
    }
}

impl From<Rational> for f64 {
    fn from(value: Rational) -> Self {
        value.to_f64()
    }
}
