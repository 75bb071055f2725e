use winnow::ascii::{digit1, float};
use winnow::combinator::{opt, separated_pair};
use winnow::token::{literal, one_of};
use winnow::{ModalResult, Parser};

/// Parse a base-10 integer with an optional sign
///
/// Leading zeros are allowed (`"007"` is 7). A digit run that overflows `i64`
/// fails to parse.
pub fn parse_integer(input: &mut &str) -> ModalResult<i64> {
    (opt(one_of(['+', '-'])), digit1)
        .take()
        .try_map(str::parse::<i64>)
        .parse_next(input)
}

/// Parse a floating point literal such as `1.5`, `.25` or `3`
pub fn parse_decimal(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}

/// Parse a simple fraction in the format `numerator/denominator`
pub fn parse_fraction(input: &mut &str) -> ModalResult<(i64, i64)> {
    separated_pair(parse_integer, literal("/"), parse_integer).parse_next(input)
}
