use std::cmp::Ordering;

use crate::types::Rational;

/// Orders values by their `f64` conversions.
///
/// Equal pairs compare `Equal` without touching floating point. Distinct pairs
/// whose quotients round to the same `f64` (only possible beyond 2^53) also
/// compare `Equal` even though `==` is false, so ordering agrees with equality
/// only up to `f64` precision. `<=` and `>=` are exact equality or a strict
/// `f64` comparison, so such pairs are neither `<=` nor `>=` each other.
impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.to_f64().partial_cmp(&other.to_f64())
    }

    fn le(&self, other: &Self) -> bool {
        self == other || self.to_f64() < other.to_f64()
    }

    fn ge(&self, other: &Self) -> bool {
        self == other || self.to_f64() > other.to_f64()
    }
}
