//! Fraction string parsing module
//!
//! This module is responsible for turning textual fractions such as `"3/4"`,
//! `"1 1/2"` or `"0.75"` into `Rational` values.
//! The main entry point is the `parse_rational` function.

mod combinators;
mod text;

pub use combinators::{parse_decimal, parse_fraction, parse_integer};
pub use text::parse_rational;
