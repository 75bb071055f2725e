//! Rational formatting module
//!
//! This module renders `Rational` values as text. Two forms exist: the
//! canonical `numerator/denominator` form used by `Display`, and the mixed
//! form that splits off a whole part (`"1 1/2"`).
//! Both render degenerate values (zero numerator or zero denominator) as `"0"`.

mod canonical;
mod mixed;

pub use canonical::format_fraction;
pub use mixed::{Mixed, format_mixed};
