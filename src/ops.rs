//! Arithmetic on rational values
//!
//! Each operation computes a numerator/denominator pair with checked `i64`
//! arithmetic and reduces it through [`Rational::try_new`]. The operator traits
//! panic on failure; the `checked_*` methods return the error instead.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::types::{Rational, RationalError};

fn mul(a: i64, b: i64) -> Result<i64, RationalError> {
    a.checked_mul(b).ok_or(RationalError::Overflow)
}

impl Rational {
    /// Checked addition
    ///
    /// # Examples
    /// ```
    /// use rational::{Rational, RationalError};
    ///
    /// let sum = Rational::new(1, 3).checked_add(Rational::new(1, 6));
    /// assert_eq!(sum, Ok(Rational::new(1, 2)));
    /// assert_eq!(
    ///     Rational::from(i64::MAX).checked_add(Rational::ONE),
    ///     Err(RationalError::Overflow)
    /// );
    /// ```
    pub fn checked_add(self, rhs: Self) -> Result<Self, RationalError> {
        let numerator = mul(self.numerator(), rhs.denominator())?
            .checked_add(mul(self.denominator(), rhs.numerator())?)
            .ok_or(RationalError::Overflow)?;
        let denominator = mul(self.denominator(), rhs.denominator())?;
        Rational::try_new(numerator, denominator)
    }

    /// Checked subtraction, the inverse of [`Rational::checked_add`]
    pub fn checked_sub(self, rhs: Self) -> Result<Self, RationalError> {
        let numerator = mul(self.numerator(), rhs.denominator())?
            .checked_sub(mul(self.denominator(), rhs.numerator())?)
            .ok_or(RationalError::Overflow)?;
        let denominator = mul(self.denominator(), rhs.denominator())?;
        Rational::try_new(numerator, denominator)
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self, RationalError> {
        let numerator = mul(self.numerator(), rhs.numerator())?;
        let denominator = mul(self.denominator(), rhs.denominator())?;
        Rational::try_new(numerator, denominator)
    }

    /// Checked division: multiplication by the reciprocal of `rhs`
    ///
    /// # Returns
    /// * `Err(RationalError::DivisionByZero)` - if `rhs` is zero
    pub fn checked_div(self, rhs: Self) -> Result<Self, RationalError> {
        self.checked_mul(rhs.try_reciprocal()?)
    }
}

impl Add for Rational {
    type Output = Rational;

    /// # Panics
    /// Panics on `i64` overflow.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
            .unwrap_or_else(|e| panic!("rational addition failed: {}", e))
    }
}

impl Sub for Rational {
    type Output = Rational;

    /// # Panics
    /// Panics on `i64` overflow.
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .unwrap_or_else(|e| panic!("rational subtraction failed: {}", e))
    }
}

impl Mul for Rational {
    type Output = Rational;

    /// # Panics
    /// Panics on `i64` overflow.
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .unwrap_or_else(|e| panic!("rational multiplication failed: {}", e))
    }
}

impl Div for Rational {
    type Output = Rational;

    /// # Panics
    /// Panics if `rhs` is zero or on `i64` overflow.
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
            .unwrap_or_else(|e| panic!("rational division failed: {}", e))
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
